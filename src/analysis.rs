//! 走法统计分析
//!
//! 根据历史走法生成热力图并判断玩家风格，不修改任何状态。

use crate::types::{BOARD_CELLS, CENTER, CORNERS};
use serde::Serialize;

/// 玩家风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tendency {
    /// 角落走法超过一半
    Aggressive,
    /// 中心走法超过三成
    Defensive,
    Balanced,
}

/// 走法模式
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovePattern {
    /// 走得最多的三个位置（次数相同按下标升序）
    pub preferred_positions: Vec<usize>,
    pub tendency: Tendency,
}

/// 统计每个位置出现的次数，越界位置忽略
pub fn heatmap(moves: &[usize]) -> [u32; BOARD_CELLS] {
    let mut counts = [0; BOARD_CELLS];
    for &pos in moves {
        if let Some(c) = counts.get_mut(pos) {
            *c += 1;
        }
    }
    counts
}

/// 判断玩家走法模式
///
/// 比例的分母是传入的走法总数（含越界项），空列表按 1 计。
pub fn detect_pattern(moves: &[usize]) -> MovePattern {
    let counts = heatmap(moves);
    let total = moves.len().max(1) as f64;

    let corner_moves: u32 = CORNERS.iter().map(|&p| counts[p]).sum();
    let center_moves = counts[CENTER];

    let tendency = if f64::from(corner_moves) / total > 0.5 {
        Tendency::Aggressive
    } else if f64::from(center_moves) / total > 0.3 {
        Tendency::Defensive
    } else {
        Tendency::Balanced
    };

    // 稳定排序：次数相同保持下标升序
    let mut ranked: Vec<usize> = (0..BOARD_CELLS).collect();
    ranked.sort_by(|&a, &b| counts[b].cmp(&counts[a]));
    ranked.truncate(3);

    MovePattern {
        preferred_positions: ranked,
        tendency,
    }
}
