//! 棋盘记谱解析和生成
//!
//! 格式: `<行0>/<行1>/<行2>`，每行 3 个格子；也可省略 `/` 直接写 9 个格子。
//!
//! 格子符号：
//! - X 方：`X` 或 `x`
//! - O 方：`O` 或 `o`
//! - 空格：`_` `.` `-`
//!
//! 例：`XO_/_X_/__O`

use crate::board::Board;
use crate::error::{Error, Result};
use crate::types::{Cell, Player, BOARD_CELLS};
use std::fmt;
use std::str::FromStr;

fn invalid(notation: &str, reason: impl Into<String>) -> Error {
    Error::InvalidNotation {
        notation: notation.to_string(),
        reason: reason.into(),
    }
}

/// 解析记谱字符串
pub fn parse_board(notation: &str) -> Result<Board> {
    let trimmed = notation.trim();
    let rows: Vec<&str> = trimmed.split('/').collect();
    if rows.len() != 1 && rows.len() != 3 {
        return Err(invalid(
            notation,
            format!("expected 3 rows separated by '/', got {}", rows.len()),
        ));
    }

    let mut cells = [Cell::Empty; BOARD_CELLS];
    let mut idx = 0;

    for (row_idx, row_str) in rows.iter().enumerate() {
        let row_len = row_str.chars().count();
        if rows.len() == 3 && row_len != 3 {
            return Err(invalid(
                notation,
                format!("row {} has {} cells, expected 3", row_idx, row_len),
            ));
        }

        for ch in row_str.chars() {
            let cell = Cell::from_notation_char(ch)
                .ok_or_else(|| invalid(notation, format!("invalid character '{}'", ch)))?;
            if idx >= BOARD_CELLS {
                return Err(invalid(notation, "more than 9 cells"));
            }
            cells[idx] = cell;
            idx += 1;
        }
    }

    if idx != BOARD_CELLS {
        return Err(invalid(
            notation,
            format!("expected {} cells, got {}", BOARD_CELLS, idx),
        ));
    }

    Board::from_cells(cells)
}

/// 在记谱上落子，返回新的记谱
pub fn apply_move_to_notation(notation: &str, position: usize, player: Player) -> Result<String> {
    let board = parse_board(notation)?;
    Ok(board.apply_move(position, player)?.to_notation())
}

impl Board {
    /// 从记谱字符串创建棋盘
    pub fn from_notation(notation: &str) -> Result<Board> {
        parse_board(notation)
    }

    /// 转换为记谱字符串（如 `XO_/_X_/__O`）
    pub fn to_notation(&self) -> String {
        self.cells()
            .chunks(3)
            .map(|row| row.iter().map(Cell::to_notation_char).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// 多行网格形式，用于终端显示
    pub fn to_grid(&self) -> String {
        self.cells()
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|c| c.to_notation_char().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_board(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
