//! 错误类型定义
//!
//! 引擎内部所有失败都是调用方违反约定，不存在可重试的错误。

use crate::types::Player;
use thiserror::Error;

/// 引擎错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 落子位置越界或已被占用
    #[error("illegal move: position {position} is out of range or already occupied")]
    IllegalMove { position: usize },

    /// 棋盘已满，没有可走的位置
    #[error("no legal move available: the board is full")]
    NoLegalMove,

    #[error("invalid board notation '{notation}': {reason}")]
    InvalidNotation { notation: String, reason: String },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),

    #[error("not your turn: {expected} is to move")]
    WrongTurn { expected: Player },

    #[error("game already over")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, Error>;
