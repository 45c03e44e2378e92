//! AI 策略模块
//!
//! 三种难度对应三种策略：随机（Easy）、规则（Medium）、Alpha-Beta 完全搜索（Hard）

mod chooser;
mod heuristic;
mod minimax;
mod random;

pub use chooser::{MoveChooser, RngChooser, SequenceChooser};
pub use heuristic::HeuristicAI;
pub use minimax::{MinimaxAI, SearchStats, WIN_SCORE};
pub use random::RandomAI;

use crate::board::Board;
use crate::error::{Error, Result};
use crate::types::{Difficulty, Player};
use log::debug;
use serde::Serialize;

/// AI 配置
#[derive(Debug, Clone, Default)]
pub struct AIConfig {
    /// 难度
    pub difficulty: Difficulty,
    /// 随机种子
    pub seed: Option<u64>,
}

/// 走法评分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredMove {
    pub position: usize,
    pub score: i32,
}

/// AI 策略接口
pub trait AIStrategy {
    /// 为 `player` 选择走法，随机部分由 `chooser` 提供
    fn select_move(
        &self,
        board: &Board,
        player: Player,
        chooser: &mut dyn MoveChooser,
    ) -> Result<usize>;
}

static RANDOM: RandomAI = RandomAI;
static HEURISTIC: HeuristicAI = HeuristicAI;
static MINIMAX: MinimaxAI = MinimaxAI::ALPHA_BETA;

impl Difficulty {
    /// 难度对应的策略
    pub fn strategy(&self) -> &'static dyn AIStrategy {
        match self {
            Difficulty::Easy => &RANDOM,
            Difficulty::Medium => &HEURISTIC,
            Difficulty::Hard => &MINIMAX,
        }
    }
}

/// 按难度为 AI 选择走法
///
/// 棋盘已满时返回 `NoLegalMove`。返回值只是位置，调用方自行落子。
pub fn choose_move(
    board: &Board,
    ai_player: Player,
    difficulty: Difficulty,
    chooser: &mut dyn MoveChooser,
) -> Result<usize> {
    if board.is_full() {
        return Err(Error::NoLegalMove);
    }
    let position = difficulty.strategy().select_move(board, ai_player, chooser)?;
    debug!(
        "choose_move: difficulty={} player={} board={} -> {}",
        difficulty, ai_player, board, position
    );
    Ok(position)
}

/// AI 引擎 - 持有难度和随机源的统一接口
pub struct AIEngine {
    difficulty: Difficulty,
    chooser: RngChooser,
}

impl AIEngine {
    pub fn new(config: &AIConfig) -> Self {
        AIEngine {
            difficulty: config.difficulty,
            chooser: RngChooser::new(config.seed),
        }
    }

    /// 从难度名称创建
    pub fn from_strategy(name: &str, seed: Option<u64>) -> Result<Self> {
        let difficulty = name.parse()?;
        Ok(Self::new(&AIConfig { difficulty, seed }))
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// 选择走法
    pub fn select_move(&mut self, board: &Board, player: Player) -> Result<usize> {
        choose_move(board, player, self.difficulty, &mut self.chooser)
    }

    /// 从记谱选择走法，玩家由子数推断
    pub fn select_move_notation(&mut self, notation: &str) -> Result<usize> {
        let board = Board::from_notation(notation)?;
        self.select_move(&board, board.side_to_move())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AVAILABLE_DIFFICULTIES;

    #[test]
    fn test_choose_move_dispatch() {
        let b: Board = "XX_/OO_/___".parse().unwrap();
        let mut chooser = SequenceChooser::first();

        // 合法走法 [2, 5, 6, 7, 8]，Easy 取第一个
        assert_eq!(choose_move(&b, Player::X, Difficulty::Easy, &mut chooser), Ok(2));
        assert_eq!(choose_move(&b, Player::X, Difficulty::Medium, &mut chooser), Ok(2));
        assert_eq!(choose_move(&b, Player::X, Difficulty::Hard, &mut chooser), Ok(2));

        let mut chooser = SequenceChooser::new(vec![4]);
        assert_eq!(choose_move(&b, Player::X, Difficulty::Easy, &mut chooser), Ok(8));
    }

    #[test]
    fn test_choose_move_full_board() {
        let b: Board = "XOX/XOO/OXX".parse().unwrap();
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let mut chooser = SequenceChooser::first();
            assert_eq!(
                choose_move(&b, Player::O, d, &mut chooser),
                Err(Error::NoLegalMove)
            );
        }
    }

    #[test]
    fn test_choose_move_does_not_apply() {
        let b: Board = "X__/___/___".parse().unwrap();
        let snapshot = b;
        let mut chooser = SequenceChooser::first();
        let pos = choose_move(&b, Player::O, Difficulty::Hard, &mut chooser).unwrap();
        assert!(b.is_legal_move(pos));
        assert_eq!(b, snapshot);
    }

    #[test]
    fn test_engine_is_reproducible_with_seed() {
        let config = AIConfig {
            difficulty: Difficulty::Easy,
            seed: Some(42),
        };
        let mut a = AIEngine::new(&config);
        let mut b = AIEngine::new(&config);
        let board = Board::new();
        for _ in 0..10 {
            assert_eq!(
                a.select_move(&board, Player::X),
                b.select_move(&board, Player::X)
            );
        }
    }

    #[test]
    fn test_engine_from_notation() {
        let mut ai = AIEngine::from_strategy("hard", None).unwrap();
        assert_eq!(ai.select_move_notation("XX_/_O_/___"), Ok(2));
        assert!(matches!(
            ai.select_move_notation("XX"),
            Err(Error::InvalidNotation { .. })
        ));
    }

    #[test]
    fn test_all_strategies_from_name() {
        for name in AVAILABLE_DIFFICULTIES {
            let result = AIEngine::from_strategy(name, Some(1));
            assert!(result.is_ok(), "Failed to create strategy: {}", name);
        }
        assert!(matches!(
            AIEngine::from_strategy("impossible", None),
            Err(Error::UnknownDifficulty(_))
        ));
    }

    #[test]
    fn test_medium_vs_hard_never_wins() {
        // Medium 执先手对 Hard，多组种子下 Hard 都不输
        for seed in 0..20 {
            let mut medium = RngChooser::new(Some(seed));
            let mut b = Board::new();
            let mut player = Player::X;
            while b.evaluate().is_ongoing() {
                let d = if player == Player::X {
                    Difficulty::Medium
                } else {
                    Difficulty::Hard
                };
                let pos = choose_move(&b, player, d, &mut medium).unwrap();
                b = b.apply_move(pos, player).unwrap();
                player = player.opposite();
            }
            assert_ne!(b.evaluate().winner(), Some(Player::X), "seed {}: {}", seed, b);
        }
    }
}
