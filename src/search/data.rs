use crate::EXPLORATION;
use crate::Position;
use crate::Utility;
use std::collections::BTreeMap;

/// Statistics held at one node of the search tree.
///
/// The same node is reached under many determinizations, and a child
/// is only selectable when its choice is legal in the current one.
/// `offers` counts how often each choice was legal when this node was
/// expanded, which is the fair exploration denominator for that child.
#[derive(Debug, Clone)]
pub struct Data<C, K> {
    visits: usize,
    reward: Utility,
    player: Position,
    choice: Option<C>,
    offers: BTreeMap<K, usize>,
}

impl<C, K> Data<C, K>
where
    K: Ord,
{
    pub fn root(player: Position) -> Self {
        Self {
            visits: 0,
            reward: 0.,
            player,
            choice: None,
            offers: BTreeMap::new(),
        }
    }
    pub fn child(player: Position, choice: C) -> Self {
        Self {
            choice: Some(choice),
            ..Self::root(player)
        }
    }

    pub fn visits(&self) -> usize {
        self.visits
    }
    pub fn reward(&self) -> Utility {
        self.reward
    }
    /// seat to act at this node, whose reward is accumulated here
    pub fn player(&self) -> Position {
        self.player
    }
    pub fn choice(&self) -> Option<&C> {
        self.choice.as_ref()
    }
    pub fn offers(&self, key: &K) -> Option<usize> {
        self.offers.get(key).copied()
    }

    pub fn offer(&mut self, key: K) {
        *self.offers.entry(key).or_insert(0) += 1;
    }
    /// one simulation passed through here with these scores.
    /// an empty score vector counts as a visit with no reward.
    pub fn record(&mut self, scores: &[Utility]) {
        self.visits += 1;
        self.reward += scores.get(self.player).copied().unwrap_or(0.);
    }

    /// UCB1 against an arbitrary denominator. unvisited nodes are infinitely urgent.
    pub fn ucb(&self, total: usize) -> Utility {
        match self.visits {
            0 => Utility::INFINITY,
            n => {
                let n = n as Utility;
                let mean = self.reward / n;
                let explore = ((total.max(1) as Utility).ln() / n).sqrt();
                mean + EXPLORATION * explore
            }
        }
    }
}
