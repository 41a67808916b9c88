use super::choice::ColoriChoice;
use super::enumerate::Prompt;
use super::enumerate::choices;
use super::enumerate::partition;
use crate::CardId;
use crate::ROLLOUT_ACTION_WORKSHOP;
use crate::ROLLOUT_DESTROY;
use crate::ROLLOUT_SKIP_MIX;
use crate::ROLLOUT_SKIP_WORKSHOP;
use crate::colori::GameState;
use crate::colori::Pending;
use rand::prelude::*;

/// Biased random playout policy.
///
/// Uniform choices undervalue turns: ending the turn is always legal
/// and ends all further value. Idle players therefore mostly keep
/// destroying drafted cards, and workshop and destroy prompts draw
/// their selection size uniformly instead of their subset uniformly.
/// Everything else is uniform among legal choices.
pub fn rollout(state: &GameState, rng: &mut impl Rng) -> ColoriChoice {
    match Prompt::from(state) {
        Prompt::Idle(actor) => match state.players[actor].drafted.choose(rng) {
            Some(card) if rng.random_bool(ROLLOUT_DESTROY as f64) => {
                ColoriChoice::DestroyDraftedCard { card: card.id }
            }
            _ => ColoriChoice::EndTurn,
        },
        Prompt::Answer(actor, Pending::Workshop { count }) => {
            let (actions, others) = partition(&state.players[actor]);
            if rng.random_bool(ROLLOUT_SKIP_WORKSHOP as f64) {
                return ColoriChoice::SkipWorkshop;
            }
            match actions.choose(rng) {
                Some(id) if others.is_empty() || rng.random_bool(ROLLOUT_ACTION_WORKSHOP as f64) => {
                    ColoriChoice::Workshop { cards: vec![*id] }
                }
                _ => match sample(&others, count, rng) {
                    cards if cards.is_empty() => ColoriChoice::SkipWorkshop,
                    cards => ColoriChoice::Workshop { cards },
                },
            }
        }
        Prompt::Answer(actor, Pending::Destroy { count }) => {
            let ids = state.players[actor]
                .workshop
                .iter()
                .map(|c| c.id)
                .collect::<Vec<_>>();
            ColoriChoice::DestroyDrawnCards {
                cards: sample(&ids, count, rng),
            }
        }
        Prompt::Answer(actor, Pending::Mix { .. }) => {
            match state.players[actor].wheel.mixes().choose(rng) {
                Some((a, b)) if !rng.random_bool(ROLLOUT_SKIP_MIX as f64) => {
                    ColoriChoice::Mix { a: *a, b: *b }
                }
                _ => ColoriChoice::SkipMix,
            }
        }
        _ => choices(state)
            .choose(rng)
            .cloned()
            .expect("rollout requires a player to act"),
    }
}

/// between one and `max` distinct ids, size uniform, ascending.
/// empty only when there is nothing to choose from.
fn sample(ids: &[CardId], max: usize, rng: &mut impl Rng) -> Vec<CardId> {
    let most = max.min(ids.len());
    if most == 0 {
        return vec![];
    }
    let k = rng.random_range(1..=most);
    let mut cards = ids.choose_multiple(rng, k).copied().collect::<Vec<_>>();
    cards.sort_unstable();
    cards
}
