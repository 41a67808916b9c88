use super::ability::Ability;
use super::card::Instance;
use super::color::Color;
use crate::Position;
use serde::Deserialize;
use serde::Serialize;

/// Which way draft hands travel after every player has picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// seat p passes to seat p + 1
    Forward,
    /// seat p passes to seat p - 1
    Backward,
}

impl Direction {
    /// odd rounds pass forward, even rounds pass backward
    pub fn of(round: u32) -> Self {
        match round % 2 {
            1 => Self::Forward,
            _ => Self::Backward,
        }
    }
    /// the seat that receives the hand `from` is holding
    pub fn next(&self, from: Position, n: usize) -> Position {
        match self {
            Self::Forward => (from + 1) % n,
            Self::Backward => (from + n - 1) % n,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    /// picks completed by every player so far this round
    pub pick: usize,
    pub actor: Position,
    pub hands: Vec<Vec<Instance>>,
    pub direction: Direction,
    /// hot-seat pause between players; carries no decision
    pub waiting: bool,
}

/// A prompt the acting player must answer before the stack resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Pending {
    Workshop { count: usize },
    Destroy { count: usize },
    Mix { remaining: usize },
    Buyer,
    Secondary,
    Primary,
    LoseTertiary,
    GainTertiary { lost: Color },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub actor: Position,
    /// last in, first resolved
    pub stack: Vec<Ability>,
    pub pending: Option<Pending>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Phase {
    Draw,
    Draft(Draft),
    Action(Turn),
    Over,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_are_inverse() {
        for n in 2..=4 {
            for p in 0..n {
                let q = Direction::Forward.next(p, n);
                assert!(Direction::Backward.next(q, n) == p);
            }
        }
    }
}
