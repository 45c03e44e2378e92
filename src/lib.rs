//! Tic-Tac-Toe AI Engine
//!
//! 井字棋引擎与 AI - 支持记谱输入输出
//!
//! 所有函数都是纯函数：不做 I/O，不持有共享可变状态。

pub mod ai;
pub mod analysis;
pub mod board;
pub mod error;
pub mod game;
pub mod notation;
pub mod test_positions;
pub mod types;

pub use ai::{
    choose_move, AIConfig, AIEngine, AIStrategy, HeuristicAI, MinimaxAI, MoveChooser, RandomAI,
    RngChooser, ScoredMove, SearchStats, SequenceChooser, WIN_SCORE,
};
pub use analysis::{detect_pattern, heatmap, MovePattern, Tendency};
pub use board::{apply_move, evaluate, is_legal_move, legal_moves, Board};
pub use error::{Error, Result};
pub use game::{Game, MoveRecord};
pub use notation::{apply_move_to_notation, parse_board};
pub use types::{
    next_player, Cell, Difficulty, Outcome, Player, WinLine, AVAILABLE_DIFFICULTIES, WIN_LINES,
};
