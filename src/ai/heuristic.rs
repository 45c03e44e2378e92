//! 规则 AI 策略（Medium）
//!
//! 按顺序尝试，第一条适用的规则生效：
//! 1. 自己能一步取胜则取胜
//! 2. 对手能一步取胜则堵住
//! 3. 中心为空则占中心
//! 4. 随机占一个空角
//! 5. 退化为随机走法（此时只剩边）

use super::{AIStrategy, MoveChooser, RandomAI};
use crate::board::Board;
use crate::error::{Error, Result};
use crate::types::{Cell, Player, CENTER, CORNERS};
use log::debug;

/// 规则 AI
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAI;

impl HeuristicAI {
    /// 找出玩家一步取胜的位置（按下标升序取第一个）
    pub fn find_winning_move(board: &Board, player: Player) -> Option<usize> {
        board.legal_moves().into_iter().find(|&pos| {
            board
                .apply_move(pos, player)
                .map(|next| next.evaluate().winner() == Some(player))
                .unwrap_or(false)
        })
    }

    pub fn heuristic_move(
        board: &Board,
        player: Player,
        chooser: &mut dyn MoveChooser,
    ) -> Result<usize> {
        if board.legal_moves().is_empty() {
            return Err(Error::NoLegalMove);
        }

        if let Some(pos) = Self::find_winning_move(board, player) {
            debug!("medium: {} wins at {}", player, pos);
            return Ok(pos);
        }

        if let Some(pos) = Self::find_winning_move(board, player.opposite()) {
            debug!("medium: {} blocks at {}", player, pos);
            return Ok(pos);
        }

        if board.cell(CENTER) == Some(Cell::Empty) {
            debug!("medium: {} takes center", player);
            return Ok(CENTER);
        }

        let empty_corners: Vec<usize> = CORNERS
            .iter()
            .copied()
            .filter(|&pos| board.is_legal_move(pos))
            .collect();
        if !empty_corners.is_empty() {
            let pos = chooser.choose(&empty_corners);
            debug!("medium: {} takes corner {}", player, pos);
            return Ok(pos);
        }

        RandomAI::random_move(board, chooser)
    }
}

impl AIStrategy for HeuristicAI {
    fn select_move(
        &self,
        board: &Board,
        player: Player,
        chooser: &mut dyn MoveChooser,
    ) -> Result<usize> {
        HeuristicAI::heuristic_move(board, player, chooser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::SequenceChooser;
    use crate::types::EDGES;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_win_preferred_over_block() {
        // O 在 5 成行，X 在 8 成行；先赢后堵
        let b = board("___/OO_/XX_");
        let mut chooser = SequenceChooser::first();
        assert_eq!(HeuristicAI.select_move(&b, Player::O, &mut chooser), Ok(5));
    }

    #[test]
    fn test_block_opponent() {
        let b = board("XX_/_O_/___");
        let mut chooser = SequenceChooser::first();
        assert_eq!(HeuristicAI.select_move(&b, Player::O, &mut chooser), Ok(2));
    }

    #[test]
    fn test_lowest_winning_index() {
        // X 可在 2（行 0）或 6（列 0）取胜，取下标较小者
        let b = board("XX_/XO_/_OO");
        assert_eq!(HeuristicAI::find_winning_move(&b, Player::X), Some(2));
    }

    #[test]
    fn test_no_winning_move() {
        assert_eq!(HeuristicAI::find_winning_move(&Board::new(), Player::X), None);
        assert_eq!(
            HeuristicAI::find_winning_move(&board("X__/_O_/___"), Player::X),
            None
        );
    }

    #[test]
    fn test_take_center() {
        let b = board("X__/___/___");
        let mut chooser = SequenceChooser::first();
        assert_eq!(HeuristicAI.select_move(&b, Player::O, &mut chooser), Ok(4));
    }

    #[test]
    fn test_take_random_corner() {
        let b = board("___/_X_/___");
        // 空角为 [0, 2, 6, 8]
        let mut chooser = SequenceChooser::new(vec![2]);
        assert_eq!(HeuristicAI.select_move(&b, Player::O, &mut chooser), Ok(6));

        let mut chooser = SequenceChooser::new(vec![3]);
        assert_eq!(HeuristicAI.select_move(&b, Player::O, &mut chooser), Ok(8));
    }

    #[test]
    fn test_fallback_to_edges() {
        // 中心和四角全满，双方都没有一步胜
        let b = board("OXO/_X_/XOX");
        assert_eq!(b.legal_moves(), vec![3, 5]);
        assert_eq!(HeuristicAI::find_winning_move(&b, Player::O), None);
        assert_eq!(HeuristicAI::find_winning_move(&b, Player::X), None);

        let mut chooser = SequenceChooser::new(vec![1]);
        let pos = HeuristicAI.select_move(&b, Player::O, &mut chooser).unwrap();
        assert_eq!(pos, 5);
        assert!(EDGES.contains(&pos));
    }

    #[test]
    fn test_full_board() {
        let b = board("XOX/XOO/OXX");
        let mut chooser = SequenceChooser::first();
        assert_eq!(
            HeuristicAI.select_move(&b, Player::O, &mut chooser),
            Err(Error::NoLegalMove)
        );
    }
}
