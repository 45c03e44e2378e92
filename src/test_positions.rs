//! 井字棋测试局面库
//!
//! 提供命名的记谱局面，方便测试、基准和调试
//!
//! 命名规范:
//! - EMPTY: 空棋盘
//! - OPENING_n: 开局 1-2 步
//! - MID_n: 中局
//! - WIN_n: 一方可一步取胜
//! - BLOCK_n: 需要堵截
//! - FORK_n: 双杀局面
//! - END_n: 终局

/// 空棋盘
pub const EMPTY: &str = "___/___/___";

// =============================================================================
// 开局 (OPENING)
// =============================================================================

/// X 占中心
pub const OPENING_1: &str = "___/_X_/___";

/// X 占角
pub const OPENING_2: &str = "X__/___/___";

/// X 占边
pub const OPENING_3: &str = "_X_/___/___";

/// X 中心，O 角
pub const OPENING_4: &str = "O__/_X_/___";

// =============================================================================
// 中局 (MID)
// =============================================================================

/// X 角、O 边、X 中心：O 必须堵 8
pub const MID_1: &str = "XO_/_X_/___";

/// 对角开局
pub const MID_2: &str = "X__/_O_/__X";

/// 中心对攻
pub const MID_3: &str = "_O_/_X_/X__";

// =============================================================================
// 一步取胜 (WIN)
// =============================================================================

/// X 在 2 取胜
pub const WIN_1: &str = "XX_/OO_/___";

/// O 在 5 取胜（同时 X 威胁 8）
pub const WIN_2: &str = "X__/OO_/XX_";

// =============================================================================
// 堵截 (BLOCK)
// =============================================================================

/// O 必须堵 2
pub const BLOCK_1: &str = "XX_/_O_/___";

// =============================================================================
// 双杀 (FORK)
// =============================================================================

/// X 同时威胁 2 和 6
pub const FORK_1: &str = "XX_/XO_/_O_";

// =============================================================================
// 终局 (END)
// =============================================================================

/// 平局
pub const END_DRAW: &str = "XOX/XOO/OXX";

/// X 对角线获胜
pub const END_X_WINS: &str = "XOX/OXO/OXX";

/// 所有未结束局面（名称，记谱）
pub const ONGOING_POSITIONS: [(&str, &str); 12] = [
    ("EMPTY", EMPTY),
    ("OPENING_1", OPENING_1),
    ("OPENING_2", OPENING_2),
    ("OPENING_3", OPENING_3),
    ("OPENING_4", OPENING_4),
    ("MID_1", MID_1),
    ("MID_2", MID_2),
    ("MID_3", MID_3),
    ("WIN_1", WIN_1),
    ("WIN_2", WIN_2),
    ("BLOCK_1", BLOCK_1),
    ("FORK_1", FORK_1),
];
