use super::*;
use crate::CardId;
use crate::HAND_SIZE;
use crate::colori::Color;
use crate::colori::GameState;
use crate::colori::Phase;
use crate::search::Game;
use crate::search::Search;
use crate::search::Status;
use rand::prelude::*;
use std::collections::BTreeSet;

/// play uniformly random legal choices, calling `visit` before each one.
fn playout(n: usize, seed: u64, steps: usize, mut visit: impl FnMut(&mut ColoriGame)) {
    let ref mut rng = SmallRng::seed_from_u64(seed);
    let mut game = ColoriGame::fresh(n, seed);
    for _ in 0..steps {
        if let Status::Terminated(_) = game.status() {
            break;
        }
        visit(&mut game);
        let choice = game.choices().choose(rng).cloned().expect("legal choice");
        game.apply(&choice);
    }
}

fn ids(cards: &[crate::colori::Instance]) -> BTreeSet<CardId> {
    cards.iter().map(|c| c.id).collect()
}

fn hands(state: &GameState) -> Vec<Vec<crate::colori::Instance>> {
    match state.phase {
        Phase::Draft(ref draft) => draft.hands.clone(),
        _ => vec![],
    }
}

/// choices that might or might not be legal, to probe availability
fn probes(game: &ColoriGame) -> Vec<ColoriChoice> {
    let state = game.state();
    let mut probes = game.choices();
    let ids = state
        .players
        .iter()
        .flat_map(|p| p.workshop.iter().chain(p.drafted.iter()))
        .chain(hands(state).iter().flatten())
        .map(|c| c.id)
        .collect::<Vec<_>>();
    for id in ids.iter().copied() {
        probes.push(ColoriChoice::DraftPick { card: id });
        probes.push(ColoriChoice::DestroyDraftedCard { card: id });
        probes.push(ColoriChoice::Workshop { cards: vec![id] });
        probes.push(ColoriChoice::DestroyDrawnCards { cards: vec![id] });
    }
    for pair in ids.windows(2) {
        probes.push(ColoriChoice::Workshop { cards: pair.to_vec() });
        probes.push(ColoriChoice::DestroyDrawnCards { cards: pair.to_vec() });
        probes.push(ColoriChoice::Workshop { cards: vec![pair[0], pair[0]] });
    }
    for color in Color::ALL {
        probes.push(ColoriChoice::GainPrimary { color });
        probes.push(ColoriChoice::GainSecondary { color });
        probes.push(ColoriChoice::LoseTertiary { color });
        probes.push(ColoriChoice::GainTertiary { color });
        for other in Color::ALL {
            probes.push(ColoriChoice::Mix { a: color, b: other });
        }
    }
    for buyer in state.buyer_display.iter() {
        probes.push(ColoriChoice::SelectBuyer { buyer: buyer.id });
    }
    probes.extend([
        ColoriChoice::EndTurn,
        ColoriChoice::SkipMix,
        ColoriChoice::SkipWorkshop,
        ColoriChoice::Workshop { cards: vec![] },
        ColoriChoice::DestroyDrawnCards { cards: vec![] },
    ]);
    probes
}

#[test]
fn choice_keys_are_unique() {
    for (n, seed) in [(2, 0), (3, 1), (4, 2), (2, 3)] {
        playout(n, seed, 400, |game| {
            let choices = game.choices();
            let keys = choices.iter().map(|c| game.key(c)).collect::<BTreeSet<_>>();
            assert!(keys.len() == choices.len());
            assert!(!choices.is_empty());
        });
    }
}

#[test]
fn availability_matches_enumeration() {
    for (n, seed) in [(2, 10), (3, 11), (4, 12)] {
        playout(n, seed, 250, |game| {
            let keys = game
                .choices()
                .iter()
                .map(|c| game.key(c))
                .collect::<BTreeSet<_>>();
            for probe in probes(game) {
                assert!(game.available(&probe) == keys.contains(&game.key(&probe)));
            }
        });
    }
}

#[test]
fn rollout_choices_are_legal() {
    for (n, seed) in [(2, 20), (3, 21), (4, 22)] {
        playout(n, seed, 400, |game| {
            for _ in 0..4 {
                let choice = game.rollout();
                assert!(game.available(&choice));
            }
        });
    }
}

#[test]
fn determinization_preserves_hand_sizes_and_own_hand() {
    for (n, seed) in [(2, 30), (3, 31), (4, 32)] {
        playout(n, seed, 300, |game| {
            let Status::Awaiting(me) = game.status() else {
                return;
            };
            let before = game.state().clone();
            let world = game.determinize(me);
            let after = world.state();
            let (a, b) = (hands(&before), hands(after));
            assert!(a.len() == b.len());
            for (p, (x, y)) in a.iter().zip(b.iter()).enumerate() {
                assert!(x.len() == y.len());
                if p == me {
                    assert!(x == y);
                }
            }
            let pooled = |hands: &Vec<Vec<crate::colori::Instance>>| {
                hands.iter().flatten().map(|c| c.id).collect::<BTreeSet<_>>()
            };
            assert!(pooled(&a) == pooled(&b));
            assert!(ids(&before.draft_deck) == ids(&after.draft_deck));
            for (x, y) in before.players.iter().zip(after.players.iter()) {
                assert!(ids(&x.deck) == ids(&y.deck));
                assert!(x.workshop == y.workshop);
                assert!(x.drafted == y.drafted);
                assert!(x.discard == y.discard);
            }
            assert!(before.buyer_display == after.buyer_display);
            assert!(game.state() == &before);
        });
    }
}

#[test]
fn searched_draft_pick_is_legal() {
    let game = ColoriGame::fresh(2, 40);
    assert!(matches!(game.state().phase, Phase::Draft(ref d) if d.hands.iter().all(|h| h.len() == HAND_SIZE)));
    for seed in 0..20 {
        let ref mut game = game.clone();
        let choice = Search::seeded(50, seed).run(game).unwrap();
        assert!(game.choices().contains(&choice));
        assert!(matches!(choice, ColoriChoice::DraftPick { .. }));
    }
}

#[test]
fn finished_game_cannot_be_searched() {
    let ref mut rng = SmallRng::seed_from_u64(41);
    let mut state = GameState::new(2, rng);
    state.phase = Phase::Over;
    let ref mut game = ColoriGame::new(state, None, None, 41);
    assert!(matches!(game.status(), Status::Terminated(_)));
    assert!(game.choices().is_empty());
    assert!(Search::seeded(10, 41).run(game).is_err());
}

#[test]
fn horizon_terminates_with_partial_scores() {
    let ref mut rng = SmallRng::seed_from_u64(42);
    let mut state = GameState::new(3, rng);
    state.players[1].ducats = 3;
    state.players[2].ducats = 1;
    state.round = 5;
    let game = ColoriGame::new(state, None, Some(4), 42);
    let Status::Terminated(scores) = game.status() else {
        panic!("expected horizon to end the game")
    };
    assert!(scores == vec![0., 0.75, 0.25]);
}

#[test]
fn scoreless_game_normalizes_to_zero() {
    let game = ColoriGame::fresh(4, 43);
    assert!(game.utilities() == vec![0.; 4]);
}

/// drafting `n` players through complete picks, with player 0
/// recording every hand they pick from.
fn drafted(n: usize, picks: usize, seed: u64) -> (ColoriGame, SeenHands) {
    let mut game = ColoriGame::fresh(n, seed);
    let mut seen = SeenHands::default();
    for _ in 0..picks * n {
        seen.observe(game.state(), 0);
        let choice = game.choices()[0].clone();
        game.apply(&choice);
    }
    (game, seen)
}

#[test]
fn seen_hand_reveals_next_player() {
    let (game, seen) = drafted(2, 1, 50);
    assert!(seen.len() == 1);
    assert!(game.status() == Status::Awaiting(0));
    assert!(known(game.state(), Some(&seen), 0) == vec![true, true]);
    assert!(known(game.state(), None, 0) == vec![true, false]);
    let before = hands(game.state());
    let ref mut game = ColoriGame::new(game.state().clone(), Some(seen), None, 50);
    for _ in 0..8 {
        let world = game.determinize(0);
        let after = hands(world.state());
        let kept = after
            .iter()
            .zip(before.iter())
            .skip(1)
            .filter(|(a, b)| ids(a) == ids(b))
            .count();
        assert!(kept == 1);
        assert!(after[0] == before[0]);
    }
}

#[test]
fn seen_hands_chain_through_several_picks() {
    let (game, mut seen) = drafted(4, 2, 51);
    seen.observe(game.state(), 0);
    assert!(seen.len() == 3);
    assert!(known(game.state(), Some(&seen), 0) == vec![true, true, true, false]);
}

#[test]
fn unknown_hands_are_redealt() {
    let (game, seen) = drafted(4, 1, 52);
    assert!(known(game.state(), Some(&seen), 0) == vec![true, true, false, false]);
    let before = hands(game.state());
    let ref mut game = ColoriGame::new(game.state().clone(), Some(seen), None, 52);
    let mut moved = false;
    for _ in 0..10 {
        let world = game.determinize(0);
        let after = hands(world.state());
        assert!(ids(&after[1]) == ids(&before[1]));
        let union = |h: &Vec<Vec<crate::colori::Instance>>| {
            ids(&h[2]).union(&ids(&h[3])).copied().collect::<BTreeSet<_>>()
        };
        assert!(union(&after) == union(&before));
        moved |= ids(&after[2]) != ids(&before[2]);
    }
    assert!(moved);
}

#[test]
fn inconsistent_seen_hands_are_ignored() {
    let (game, _) = drafted(3, 1, 53);
    let bogus = SeenHands::from(vec![hands(game.state())[2].clone()]);
    assert!(known(game.state(), Some(&bogus), 0) == vec![true, false, false]);
}

#[test]
fn determinization_carries_seen_hands_and_horizon() {
    let (game, seen) = drafted(3, 1, 54);
    let ref mut game = ColoriGame::new(game.state().clone(), Some(seen.clone()), Some(3), 54);
    let world = game.determinize(0);
    assert!(world.seen() == Some(&seen));
    assert!(world.horizon() == Some(3));
    assert!(game.seen() == Some(&seen));
    assert!(ColoriGame::fresh(2, 54).determinize(1).seen().is_none());
}

#[test]
fn partial_seen_hands_only_reveal_current_holders() {
    let (game, seen) = drafted(3, 2, 55);
    let first = SeenHands::from(vec![seen.iter().next().cloned().unwrap()]);
    assert!(known(game.state(), Some(&first), 0) == vec![true, false, true]);
    assert!(known(game.state(), Some(&seen), 0) == vec![true, true, true]);
    let before = hands(game.state());
    let ref mut game = ColoriGame::new(game.state().clone(), Some(first), None, 55);
    for _ in 0..8 {
        let after = hands(game.determinize(0).state());
        assert!(after[0] == before[0]);
        assert!(after[2] == before[2]);
    }
}
