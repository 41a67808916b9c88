use crate::Position;
use crate::colori::GameState;
use crate::colori::Instance;
use crate::colori::Phase;
use serde::Deserialize;
use serde::Serialize;

/// Draft hands one player has looked at this round, indexed by the
/// pick number at which they saw them.
///
/// A hand seen at pick `r` keeps travelling after the observer picks
/// from it, so together with everyone's public picks it can pin down
/// exactly what a downstream opponent holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeenHands(Vec<Vec<Instance>>);

impl SeenHands {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Vec<Instance>> {
        self.0.iter()
    }

    /// note the hand `player` is about to pick from. a new draft
    /// round forgets everything seen in the previous one.
    pub fn observe(&mut self, state: &GameState, player: Position) {
        let Phase::Draft(ref draft) = state.phase else {
            return;
        };
        if draft.actor != player || draft.waiting {
            return;
        }
        self.0.truncate(draft.pick);
        self.0.resize(draft.pick, Vec::new());
        self.0.push(draft.hands[player].clone());
    }
}

impl From<Vec<Vec<Instance>>> for SeenHands {
    fn from(hands: Vec<Vec<Instance>>) -> Self {
        Self(hands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn observe_tracks_picks() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut state = GameState::new(2, rng);
        state.draw(rng);
        let mut seen = SeenHands::default();
        seen.observe(&state, 1);
        assert!(seen.is_empty());
        seen.observe(&state, 0);
        assert!(seen.len() == 1);
        assert!(seen.iter().all(|hand| hand.len() == crate::HAND_SIZE));
        seen.observe(&state, 0);
        assert!(seen.len() == 1);
    }
}
