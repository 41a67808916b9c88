use super::choice::ColoriChoice;
use crate::CardId;
use crate::Position;
use crate::colori::Color;
use crate::colori::GameState;
use crate::colori::Instance;
use crate::colori::Pending;
use crate::colori::Phase;
use crate::colori::Player;

/// The question the game is currently asking, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prompt<'a> {
    /// pick one card from this hand
    Draft(Position, &'a [Instance]),
    /// destroy a drafted card or end the turn
    Idle(Position),
    /// answer a prompt raised by the ability stack
    Answer(Position, Pending),
    /// nobody can act: between phases, hot-seat pause, or game over
    Closed,
}

impl<'a> From<&'a GameState> for Prompt<'a> {
    fn from(state: &'a GameState) -> Self {
        match &state.phase {
            Phase::Draft(draft) if !draft.waiting => {
                Self::Draft(draft.actor, &draft.hands[draft.actor])
            }
            Phase::Action(turn) => match turn.pending {
                None => Self::Idle(turn.actor),
                Some(pending) => Self::Answer(turn.actor, pending),
            },
            _ => Self::Closed,
        }
    }
}

/// Every legal choice, each with a distinct canonical key.
pub fn choices(state: &GameState) -> Vec<ColoriChoice> {
    match Prompt::from(state) {
        Prompt::Closed => vec![],
        Prompt::Draft(_, hand) => hand
            .iter()
            .map(|c| ColoriChoice::DraftPick { card: c.id })
            .collect(),
        Prompt::Idle(actor) => state.players[actor]
            .drafted
            .iter()
            .map(|c| ColoriChoice::DestroyDraftedCard { card: c.id })
            .chain(std::iter::once(ColoriChoice::EndTurn))
            .collect(),
        Prompt::Answer(actor, pending) => answers(state, &state.players[actor], pending),
    }
}

fn answers(state: &GameState, player: &Player, pending: Pending) -> Vec<ColoriChoice> {
    match pending {
        Pending::Workshop { count } => {
            let (actions, others) = partition(player);
            std::iter::once(ColoriChoice::SkipWorkshop)
                .chain(
                    subsets(&others, count)
                        .into_iter()
                        .map(|cards| ColoriChoice::Workshop { cards }),
                )
                .chain(
                    actions
                        .into_iter()
                        .map(|id| ColoriChoice::Workshop { cards: vec![id] }),
                )
                .collect()
        }
        Pending::Destroy { count } => {
            let ids = sorted(player.workshop.iter().map(|c| c.id));
            match ids.is_empty() {
                true => vec![ColoriChoice::DestroyDrawnCards { cards: vec![] }],
                false => subsets(&ids, count)
                    .into_iter()
                    .map(|cards| ColoriChoice::DestroyDrawnCards { cards })
                    .collect(),
            }
        }
        Pending::Mix { .. } => std::iter::once(ColoriChoice::SkipMix)
            .chain(
                player
                    .wheel
                    .mixes()
                    .into_iter()
                    .map(|(a, b)| ColoriChoice::Mix { a, b }),
            )
            .collect(),
        Pending::Buyer => state
            .buyer_display
            .iter()
            .filter(|c| player.affords(c))
            .map(|c| ColoriChoice::SelectBuyer { buyer: c.id })
            .collect(),
        Pending::Secondary => Color::SECONDARIES
            .into_iter()
            .map(|color| ColoriChoice::GainSecondary { color })
            .collect(),
        Pending::Primary => Color::PRIMARIES
            .into_iter()
            .map(|color| ColoriChoice::GainPrimary { color })
            .collect(),
        Pending::LoseTertiary => player
            .tertiaries()
            .into_iter()
            .map(|color| ColoriChoice::LoseTertiary { color })
            .collect(),
        Pending::GainTertiary { lost } => Color::TERTIARIES
            .into_iter()
            .filter(|color| *color != lost)
            .map(|color| ColoriChoice::GainTertiary { color })
            .collect(),
    }
}

/// Whether `choice` would be accepted right now. Agrees exactly with
/// key membership in [`choices`], without enumerating them.
pub fn available(state: &GameState, choice: &ColoriChoice) -> bool {
    match (Prompt::from(state), choice) {
        (Prompt::Draft(_, hand), ColoriChoice::DraftPick { card }) => {
            hand.iter().any(|c| c.id == *card)
        }
        (Prompt::Idle(actor), ColoriChoice::DestroyDraftedCard { card }) => {
            state.players[actor].drafted.iter().any(|c| c.id == *card)
        }
        (Prompt::Idle(_), ColoriChoice::EndTurn) => true,
        (Prompt::Answer(actor, pending), choice) => {
            answerable(state, &state.players[actor], pending, choice)
        }
        _ => false,
    }
}

fn answerable(state: &GameState, player: &Player, pending: Pending, choice: &ColoriChoice) -> bool {
    match (pending, choice) {
        (Pending::Workshop { .. }, ColoriChoice::SkipWorkshop) => true,
        (Pending::Workshop { count }, ColoriChoice::Workshop { cards }) => {
            let Some(picked) = drawn(player, cards) else {
                return false;
            };
            let actions = picked.iter().filter(|c| c.card.is_action()).count();
            match (actions, picked.len()) {
                (_, 0) => false,
                (0, n) => n <= count,
                (1, 1) => true,
                _ => false,
            }
        }
        (Pending::Destroy { count }, ColoriChoice::DestroyDrawnCards { cards }) => {
            match (player.workshop.is_empty(), drawn(player, cards)) {
                (true, _) => cards.is_empty(),
                (false, Some(picked)) => !picked.is_empty() && picked.len() <= count,
                (false, None) => false,
            }
        }
        (Pending::Mix { .. }, ColoriChoice::SkipMix) => true,
        (Pending::Mix { .. }, ColoriChoice::Mix { a, b }) => {
            a.mixes(b) && player.wheel.get(*a) > 0 && player.wheel.get(*b) > 0
        }
        (Pending::Buyer, ColoriChoice::SelectBuyer { buyer }) => state
            .buyer_display
            .iter()
            .any(|c| c.id == *buyer && player.affords(c)),
        (Pending::Secondary, ColoriChoice::GainSecondary { color }) => color.is_secondary(),
        (Pending::Primary, ColoriChoice::GainPrimary { color }) => color.is_primary(),
        (Pending::LoseTertiary, ColoriChoice::LoseTertiary { color }) => {
            color.is_tertiary() && player.wheel.get(*color) > 0
        }
        (Pending::GainTertiary { lost }, ColoriChoice::GainTertiary { color }) => {
            color.is_tertiary() && *color != lost
        }
        _ => false,
    }
}

/// the named workshop cards, if every id is present and distinct
fn drawn<'a>(player: &'a Player, cards: &[CardId]) -> Option<Vec<&'a Instance>> {
    let picked = cards
        .iter()
        .map(|id| player.workshop.iter().find(|c| c.id == *id))
        .collect::<Option<Vec<_>>>()?;
    let distinct = sorted(cards.iter().copied());
    match distinct.windows(2).any(|w| w[0] == w[1]) {
        true => None,
        false => Some(picked),
    }
}

/// workshop ids split into action cards and everything else, each ascending
pub(super) fn partition(player: &Player) -> (Vec<CardId>, Vec<CardId>) {
    let actions = sorted(
        player
            .workshop
            .iter()
            .filter(|c| c.card.is_action())
            .map(|c| c.id),
    );
    let others = sorted(
        player
            .workshop
            .iter()
            .filter(|c| !c.card.is_action())
            .map(|c| c.id),
    );
    (actions, others)
}

fn sorted(ids: impl Iterator<Item = CardId>) -> Vec<CardId> {
    let mut ids = ids.collect::<Vec<_>>();
    ids.sort_unstable();
    ids
}

/// non-empty ascending combinations of `ids` with at most `max` elements
pub(super) fn subsets(ids: &[CardId], max: usize) -> Vec<Vec<CardId>> {
    let mut out = Vec::new();
    let mut stack = Vec::new();
    fn grow(ids: &[CardId], max: usize, stack: &mut Vec<CardId>, out: &mut Vec<Vec<CardId>>) {
        for (i, id) in ids.iter().enumerate() {
            stack.push(*id);
            out.push(stack.clone());
            if stack.len() < max {
                grow(&ids[i + 1..], max, stack, out);
            }
            stack.pop();
        }
    }
    if max > 0 {
        grow(ids, max, &mut stack, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subsets_respect_bound() {
        let all = subsets(&[1, 2, 3, 4], 2);
        assert!(all.len() == 4 + 6);
        assert!(all.iter().all(|s| !s.is_empty() && s.len() <= 2));
        assert!(all.iter().all(|s| s.windows(2).all(|w| w[0] < w[1])));
        assert!(subsets(&[1, 2, 3], 0).is_empty());
        assert!(subsets(&[], 3).is_empty());
    }
}
