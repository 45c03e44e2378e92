//! Minimax AI 策略（Hard）
//!
//! 对整棵博弈树做完全搜索，带 Alpha-Beta 剪枝。

use super::{AIStrategy, MoveChooser, ScoredMove};
use crate::board::Board;
use crate::error::{Error, Result};
use crate::types::{Outcome, Player};
use log::{debug, trace};

/// 胜局基础分，实际得分为 `WIN_SCORE - depth`
pub const WIN_SCORE: i32 = 10;

const NEG_INF: i32 = i32::MIN;
const POS_INF: i32 = i32::MAX;

/// 搜索统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// 访问的节点数
    pub nodes: u64,
}

/// 单次搜索的上下文
struct SearchContext {
    ai: Player,
    nodes: u64,
}

/// Minimax AI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxAI {
    pruning: bool,
}

impl Default for MinimaxAI {
    fn default() -> Self {
        MinimaxAI::ALPHA_BETA
    }
}

impl MinimaxAI {
    /// 带 Alpha-Beta 剪枝
    pub const ALPHA_BETA: MinimaxAI = MinimaxAI { pruning: true };

    /// 不剪枝的朴素 Minimax（用于对照）
    pub const PLAIN: MinimaxAI = MinimaxAI { pruning: false };

    pub fn new(pruning: bool) -> Self {
        MinimaxAI { pruning }
    }

    pub fn pruning(&self) -> bool {
        self.pruning
    }

    /// 终局得分：AI 胜 `10 - depth`，AI 负 `depth - 10`，平局 0
    fn terminal_score(outcome: Outcome, ai: Player, depth: i32) -> Option<i32> {
        match outcome {
            Outcome::Won { player, .. } if player == ai => Some(WIN_SCORE - depth),
            Outcome::Won { .. } => Some(depth - WIN_SCORE),
            Outcome::Draw => Some(0),
            Outcome::Ongoing => None,
        }
    }

    /// 朴素 Minimax
    fn minimax(&self, ctx: &mut SearchContext, board: Board, depth: i32, maximizing: bool) -> i32 {
        ctx.nodes += 1;

        if let Some(score) = Self::terminal_score(board.evaluate(), ctx.ai, depth) {
            return score;
        }

        let mover = if maximizing { ctx.ai } else { ctx.ai.opposite() };
        let mut best = if maximizing { NEG_INF } else { POS_INF };

        for pos in board.legal_moves() {
            let next = board.with_mark(pos, mover);
            let score = self.minimax(ctx, next, depth + 1, !maximizing);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }

    /// Alpha-Beta 搜索
    fn alphabeta(
        &self,
        ctx: &mut SearchContext,
        board: Board,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        ctx.nodes += 1;

        if let Some(score) = Self::terminal_score(board.evaluate(), ctx.ai, depth) {
            return score;
        }

        if maximizing {
            let mut max_eval = NEG_INF;
            for pos in board.legal_moves() {
                let next = board.with_mark(pos, ctx.ai);
                let eval = self.alphabeta(ctx, next, depth + 1, false, alpha, beta);
                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break; // Beta 剪枝
                }
            }
            max_eval
        } else {
            let mut min_eval = POS_INF;
            for pos in board.legal_moves() {
                let next = board.with_mark(pos, ctx.ai.opposite());
                let eval = self.alphabeta(ctx, next, depth + 1, true, alpha, beta);
                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    break; // Alpha 剪枝
                }
            }
            min_eval
        }
    }

    /// 对每个合法走法搜索得分（按下标升序）
    ///
    /// 每个根走法都以完整窗口独立搜索，所以得分是精确值。
    pub fn score_moves(&self, board: &Board, player: Player) -> (Vec<ScoredMove>, SearchStats) {
        let mut ctx = SearchContext {
            ai: player,
            nodes: 0,
        };

        let mut scored = Vec::new();
        for position in board.legal_moves() {
            let next = board.with_mark(position, player);
            let score = if self.pruning {
                self.alphabeta(&mut ctx, next, 0, false, NEG_INF, POS_INF)
            } else {
                self.minimax(&mut ctx, next, 0, false)
            };
            scored.push(ScoredMove { position, score });
        }

        trace!(
            "search: player={} pruning={} moves={} nodes={}",
            player,
            self.pruning,
            scored.len(),
            ctx.nodes
        );
        (scored, SearchStats { nodes: ctx.nodes })
    }

    /// 选择最佳走法：得分最高者中下标最小的
    pub fn best_move(&self, board: &Board, player: Player) -> Result<ScoredMove> {
        let (scored, _) = self.score_moves(board, player);

        let mut best: Option<ScoredMove> = None;
        for sm in scored {
            if best.map_or(true, |b| sm.score > b.score) {
                best = Some(sm);
            }
        }

        let best = best.ok_or(Error::NoLegalMove)?;
        debug!(
            "hard: {} plays {} (score {})",
            player, best.position, best.score
        );
        Ok(best)
    }
}

impl AIStrategy for MinimaxAI {
    fn select_move(
        &self,
        board: &Board,
        player: Player,
        _chooser: &mut dyn MoveChooser,
    ) -> Result<usize> {
        self.best_move(board, player).map(|sm| sm.position)
    }
}
