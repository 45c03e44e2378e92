//! 随机 AI 策略（Easy）

use super::{AIStrategy, MoveChooser};
use crate::board::Board;
use crate::error::{Error, Result};
use crate::types::Player;

/// 随机 AI - 在合法走法中均匀随机选择
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAI;

impl RandomAI {
    /// 随机选择一个合法走法
    pub fn random_move(board: &Board, chooser: &mut dyn MoveChooser) -> Result<usize> {
        let moves = board.legal_moves();
        if moves.is_empty() {
            return Err(Error::NoLegalMove);
        }
        Ok(chooser.choose(&moves))
    }
}

impl AIStrategy for RandomAI {
    fn select_move(
        &self,
        board: &Board,
        _player: Player,
        chooser: &mut dyn MoveChooser,
    ) -> Result<usize> {
        RandomAI::random_move(board, chooser)
    }
}
