//! 井字棋棋盘
//!
//! 3x3 棋盘按行优先存储为 9 个格子：
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! `Board` 是不可变值类型，落子总是返回新棋盘。

use crate::error::{Error, Result};
use crate::types::{Cell, Outcome, Player, BOARD_CELLS, WIN_LINES};
use serde::{Deserialize, Serialize};

/// 棋盘
///
/// 序列化为 9 个格子的数组；反序列化时经 `from_cells` 检查子数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "[Cell; BOARD_CELLS]", try_from = "[Cell; BOARD_CELLS]")]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl TryFrom<[Cell; BOARD_CELLS]> for Board {
    type Error = Error;

    fn try_from(cells: [Cell; BOARD_CELLS]) -> Result<Self> {
        Board::from_cells(cells)
    }
}

impl From<Board> for [Cell; BOARD_CELLS] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl Board {
    /// 空棋盘
    pub fn new() -> Self {
        Board::default()
    }

    /// 从格子数组创建棋盘，检查双方子数
    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Result<Board> {
        let board = Board { cells };
        let x_count = board.count(Cell::X);
        let o_count = board.count(Cell::O);
        if x_count != o_count && x_count != o_count + 1 {
            return Err(Error::InvalidPieceCounts { x_count, o_count });
        }
        Ok(board)
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// 获取某位置的格子，越界返回 None
    #[inline]
    pub fn cell(&self, position: usize) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    /// 统计某种格子的数量
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(Cell::is_empty)
    }

    /// 根据双方子数推断轮到谁走（X 先手）
    pub fn side_to_move(&self) -> Player {
        if self.count(Cell::X) > self.count(Cell::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// 检查走法是否合法：位置在 0..9 内且为空
    #[inline]
    pub fn is_legal_move(&self, position: usize) -> bool {
        self.cell(position) == Some(Cell::Empty)
    }

    /// 落子，返回新棋盘（不修改原棋盘）
    pub fn apply_move(&self, position: usize, player: Player) -> Result<Board> {
        if !self.is_legal_move(position) {
            return Err(Error::IllegalMove { position });
        }
        Ok(self.with_mark(position, player))
    }

    /// 在空格上落子，不做检查；`position` 必须来自 `legal_moves()`
    #[inline]
    pub(crate) fn with_mark(&self, position: usize, player: Player) -> Board {
        debug_assert!(self.is_legal_move(position), "position {} is not empty", position);
        let mut next = *self;
        next.cells[position] = Cell::from(player);
        next
    }

    /// 判断局面结果
    ///
    /// 按 `WIN_LINES` 顺序扫描，第一条三子相同且非空的连线即为胜线；
    /// 没有连线且棋盘已满为平局。
    pub fn evaluate(&self) -> Outcome {
        for line in WIN_LINES {
            let [a, b, c] = line;
            if let Some(player) = self.cells[a].player() {
                if self.cells[a] == self.cells[b] && self.cells[a] == self.cells[c] {
                    return Outcome::Won { player, line };
                }
            }
        }

        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// 所有合法走法（升序）
    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
            .collect()
    }
}

/// 检查走法是否合法
pub fn is_legal_move(board: &Board, position: usize) -> bool {
    board.is_legal_move(position)
}

/// 落子，返回新棋盘
pub fn apply_move(board: &Board, position: usize, player: Player) -> Result<Board> {
    board.apply_move(position, player)
}

/// 判断局面结果
pub fn evaluate(board: &Board) -> Outcome {
    board.evaluate()
}

/// 所有合法走法（升序）
pub fn legal_moves(board: &Board) -> Vec<usize> {
    board.legal_moves()
}
