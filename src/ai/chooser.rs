//! 随机选择器
//!
//! Easy / Medium 的随机部分都通过 `MoveChooser` 注入，测试可替换为固定序列。

use rand::prelude::*;

/// 从候选位置中挑选一个
pub trait MoveChooser {
    /// `candidates` 保证非空，返回值必须是其中之一
    fn choose(&mut self, candidates: &[usize]) -> usize;
}

/// 基于 StdRng 的均匀随机选择
#[derive(Debug, Clone)]
pub struct RngChooser {
    rng: StdRng,
}

impl RngChooser {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        RngChooser { rng }
    }
}

impl Default for RngChooser {
    fn default() -> Self {
        RngChooser::new(None)
    }
}

impl MoveChooser for RngChooser {
    fn choose(&mut self, candidates: &[usize]) -> usize {
        candidates[self.rng.gen_range(0..candidates.len())]
    }
}

/// 按固定序列选择：第 k 次调用取 `candidates[picks[k] % len]`，序列用完后循环
#[derive(Debug, Clone)]
pub struct SequenceChooser {
    picks: Vec<usize>,
    cursor: usize,
}

impl SequenceChooser {
    pub fn new(picks: Vec<usize>) -> Self {
        SequenceChooser { picks, cursor: 0 }
    }

    /// 总是选第一个候选
    pub fn first() -> Self {
        SequenceChooser::new(vec![0])
    }
}

impl MoveChooser for SequenceChooser {
    fn choose(&mut self, candidates: &[usize]) -> usize {
        let pick = if self.picks.is_empty() {
            0
        } else {
            self.picks[self.cursor % self.picks.len()]
        };
        self.cursor += 1;
        candidates[pick % candidates.len()]
    }
}
