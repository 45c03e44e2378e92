//! 井字棋核心类型定义
//!
//! 定义棋盘格子、玩家、胜负结果和 AI 难度等基础数据类型

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 棋盘格子数
pub const BOARD_CELLS: usize = 9;

/// 中心位置
pub const CENTER: usize = 4;

/// 四个角
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// 四条边（非角非中心）
pub const EDGES: [usize; 4] = [1, 3, 5, 7];

/// 连线：三个格子的下标
pub type WinLine = [usize; 3];

/// 全部 8 条连线，顺序固定：行 (0-2)、列 (3-5)、对角线 (6-7)
///
/// 同一局面出现多条连线时以表中顺序取第一条。
pub const WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 玩家（X 先手）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// 获取对手
    pub fn opposite(&self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// 从字符解析（大小写均可）
    pub fn from_char(c: char) -> Option<Player> {
        match c.to_ascii_uppercase() {
            'X' => Some(Player::X),
            'O' => Some(Player::O),
            _ => None,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next().and_then(Player::from_char), chars.next()) {
            (Some(p), None) => Ok(p),
            _ => Err(format!("Invalid player: {} (expected X or O)", s)),
        }
    }
}

/// 获取下一个行动的玩家
pub fn next_player(player: Player) -> Player {
    player.opposite()
}

/// 棋盘格子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// 格子上的玩家，空格为 None
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    /// 从记谱字符解析
    pub fn from_notation_char(c: char) -> Option<Cell> {
        match c {
            '_' | '.' | '-' => Some(Cell::Empty),
            _ => Player::from_char(c).map(Cell::from),
        }
    }

    /// 转换为记谱字符
    pub fn to_notation_char(&self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation_char())
    }
}

/// 局面结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Ongoing,
    Won { player: Player, line: WinLine },
    Draw,
}

impl Outcome {
    pub fn is_ongoing(&self) -> bool {
        *self == Outcome::Ongoing
    }

    /// 获胜方（平局或未结束为 None）
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won { player, .. } => Some(*player),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "Ongoing"),
            Outcome::Won { player, line } => {
                write!(f, "{} wins ({}-{}-{})", player, line[0], line[1], line[2])
            }
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 随机走子
    Easy,
    /// 规则：赢 > 堵 > 中心 > 角 > 随机
    #[default]
    Medium,
    /// Alpha-Beta 完全搜索
    Hard,
}

/// 所有难度名称
pub const AVAILABLE_DIFFICULTIES: [&str; 3] = ["easy", "medium", "hard"];

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(Error::UnknownDifficulty(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_player() {
        assert_eq!(next_player(Player::X), Player::O);
        assert_eq!(next_player(Player::O), Player::X);
    }

    #[test]
    fn test_cell_notation_chars() {
        assert_eq!(Cell::from_notation_char('x'), Some(Cell::X));
        assert_eq!(Cell::from_notation_char('O'), Some(Cell::O));
        assert_eq!(Cell::from_notation_char('.'), Some(Cell::Empty));
        assert_eq!(Cell::from_notation_char('-'), Some(Cell::Empty));
        assert_eq!(Cell::from_notation_char('Z'), None);
        assert_eq!(Cell::from(Player::O).to_notation_char(), 'O');
    }

    #[test]
    fn test_player_from_str() {
        assert_eq!("x".parse::<Player>(), Ok(Player::X));
        assert_eq!(" O ".parse::<Player>(), Ok(Player::O));
        assert!("XO".parse::<Player>().is_err());
        assert!("".parse::<Player>().is_err());
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("Easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "expert".parse::<Difficulty>(),
            Err(Error::UnknownDifficulty("expert".to_string()))
        );
        assert_eq!(Difficulty::default(), Difficulty::Medium);

        for name in AVAILABLE_DIFFICULTIES {
            let d: Difficulty = name.parse().unwrap();
            assert_eq!(d.as_str(), name);
        }
    }

    #[test]
    fn test_win_lines_cover_every_cell() {
        let mut seen = [0; BOARD_CELLS];
        for line in WIN_LINES {
            for idx in line {
                seen[idx] += 1;
            }
        }
        // 中心 4 条线，角 3 条，边 2 条
        assert_eq!(seen[CENTER], 4);
        for c in CORNERS {
            assert_eq!(seen[c], 3);
        }
        for e in EDGES {
            assert_eq!(seen[e], 2);
        }
    }

    #[test]
    fn test_outcome_serialization() {
        let won = Outcome::Won {
            player: Player::X,
            line: [0, 4, 8],
        };
        let json = serde_json::to_string(&won).unwrap();
        assert_eq!(json, r#"{"status":"won","player":"X","line":[0,4,8]}"#);
        assert_eq!(
            serde_json::to_string(&Outcome::Draw).unwrap(),
            r#"{"status":"draw"}"#
        );
    }
}
