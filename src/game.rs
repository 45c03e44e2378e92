//! 对局记录
//!
//! 在纯内存中维护棋盘、轮次和走法历史，执行回合规则。
//! 持久化和并发控制由调用方负责。

use crate::ai::{choose_move, MoveChooser};
use crate::board::Board;
use crate::error::{Error, Result};
use crate::types::{Difficulty, Outcome, Player};
use log::debug;
use serde::Serialize;

/// 一步走法记录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub position: usize,
    pub player: Player,
}

/// 对局
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    board: Board,
    turn: Player,
    outcome: Outcome,
    history: Vec<MoveRecord>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// 新对局，X 先手
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            turn: Player::X,
            outcome: Outcome::Ongoing,
            history: Vec::new(),
        }
    }

    /// 从已有局面继续（轮次由子数推断）
    pub fn from_board(board: Board) -> Self {
        Game {
            board,
            turn: board.side_to_move(),
            outcome: board.evaluate(),
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 当前轮到谁走
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// 某玩家走过的位置（按时间顺序），用于热力图分析
    pub fn moves_by(&self, player: Player) -> Vec<usize> {
        self.history
            .iter()
            .filter(|m| m.player == player)
            .map(|m| m.position)
            .collect()
    }

    /// 落子
    ///
    /// 对局已结束返回 `GameOver`，不是该玩家回合返回 `WrongTurn`，
    /// 非法位置返回 `IllegalMove`。失败时对局不变。
    pub fn play(&mut self, position: usize, player: Player) -> Result<Outcome> {
        if !self.outcome.is_ongoing() {
            return Err(Error::GameOver);
        }
        if player != self.turn {
            return Err(Error::WrongTurn {
                expected: self.turn,
            });
        }

        self.board = self.board.apply_move(position, player)?;
        self.history.push(MoveRecord { position, player });
        self.turn = player.opposite();
        self.outcome = self.board.evaluate();

        debug!("{} plays {}: {} ({})", player, position, self.board, self.outcome);
        Ok(self.outcome)
    }

    /// 让 AI 为当前玩家走一步，返回所走位置
    pub fn play_ai(
        &mut self,
        difficulty: Difficulty,
        chooser: &mut dyn MoveChooser,
    ) -> Result<usize> {
        if !self.outcome.is_ongoing() {
            return Err(Error::GameOver);
        }
        let position = choose_move(&self.board, self.turn, difficulty, chooser)?;
        self.play(position, self.turn)?;
        Ok(position)
    }
}
