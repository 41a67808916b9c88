use super::seen::SeenHands;
use crate::CardId;
use crate::Position;
use crate::colori::Draft;
use crate::colori::GameState;
use crate::colori::Instance;
use crate::colori::Phase;
use rand::prelude::*;

/// Sample a full game state consistent with what `me` can observe.
///
/// Hidden orderings are reshuffled: the draft deck, the buyer deck and
/// every personal deck. During a draft, the hands of opponents `me`
/// cannot account for are pooled and redealt at their original sizes.
/// `me`'s own hand is never touched.
pub fn determinize(
    state: &GameState,
    seen: Option<&SeenHands>,
    me: Position,
    rng: &mut impl Rng,
) -> GameState {
    let mut world = state.clone();
    if let Phase::Draft(ref mut draft) = world.phase {
        let known = known(state, seen, me);
        let unknown = (0..draft.hands.len())
            .filter(|p| !known[*p])
            .collect::<Vec<_>>();
        let sizes = unknown
            .iter()
            .map(|p| draft.hands[*p].len())
            .collect::<Vec<_>>();
        let mut pool = unknown
            .iter()
            .flat_map(|p| std::mem::take(&mut draft.hands[*p]))
            .collect::<Vec<Instance>>();
        pool.shuffle(rng);
        for (p, size) in unknown.into_iter().zip(sizes) {
            draft.hands[p] = pool.split_off(pool.len() - size);
        }
    }
    world.draft_deck.shuffle(rng);
    world.buyer_deck.shuffle(rng);
    for player in world.players.iter_mut() {
        player.deck.shuffle(rng);
    }
    world
}

/// Seats whose current draft hand `me` can reconstruct exactly.
///
/// Each hand `me` saw and picked from travels on in the draft direction.
/// Its remainder is followed one seat per pick, removing each holder's
/// public pick, up to the pick in progress. The seat holding it now is
/// known if the remainder matches what they hold. Any inconsistency
/// (a pick that could not have come from the remainder, a missing pick,
/// or a full lap back to `me`) ends that trail without adding knowledge.
pub fn known(state: &GameState, seen: Option<&SeenHands>, me: Position) -> Vec<bool> {
    let mut known = vec![false; state.n()];
    known[me] = true;
    if let (Phase::Draft(draft), Some(seen)) = (&state.phase, seen) {
        for (round, hand) in seen.iter().enumerate() {
            if let Some(holder) = trail(state, draft, me, round, hand) {
                known[holder] = true;
            }
        }
    }
    known
}

fn trail(
    state: &GameState,
    draft: &Draft,
    me: Position,
    round: usize,
    hand: &[Instance],
) -> Option<Position> {
    let n = state.n();
    let mine = state.players[me].drafted.get(round)?;
    let mut remnant = hand
        .iter()
        .map(|c| c.id)
        .filter(|id| *id != mine.id)
        .collect::<Vec<CardId>>();
    if remnant.len() + 1 != hand.len() {
        return None;
    }
    let mut holder = me;
    for pick in round + 1..=draft.pick {
        holder = draft.direction.next(holder, n);
        if holder == me {
            return None;
        }
        match state.players[holder].drafted.get(pick) {
            Some(card) if remnant.contains(&card.id) => remnant.retain(|id| *id != card.id),
            None if pick == draft.pick => {}
            _ => return None,
        }
    }
    if holder == me {
        return None;
    }
    let mut held = draft.hands[holder].iter().map(|c| c.id).collect::<Vec<_>>();
    held.sort_unstable();
    remnant.sort_unstable();
    match held == remnant {
        true => Some(holder),
        false => {
            log::trace!("seen hand {} does not match player {}", round, holder);
            None
        }
    }
}
