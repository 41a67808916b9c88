use super::buyer::Buyer;
use super::buyer::Contract;
use super::card::Card;
use super::card::Instance;
use super::color::Color;
use super::phase::Direction;
use super::phase::Draft;
use super::phase::Phase;
use super::phase::Turn;
use super::player::Player;
use super::wheel::ColorWheel;
use crate::ACTION_COPIES;
use crate::BUYER_DISPLAY;
use crate::CardId;
use crate::DRAFT_PICKS;
use crate::DRAW_SIZE;
use crate::DYE_COPIES;
use crate::HAND_SIZE;
use crate::MAX_ROUNDS;
use crate::Position;
use crate::WINNING_SCORE;
use rand::prelude::*;
use serde::Deserialize;
use serde::Serialize;

/// The authoritative game state. Plain values all the way down,
/// so `clone()` is a full deep copy that shares nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub players: Vec<Player>,
    pub draft_deck: Vec<Instance>,
    pub destroyed: Vec<Instance>,
    pub buyer_deck: Vec<Contract>,
    pub buyer_display: Vec<Contract>,
    pub phase: Phase,
    pub round: u32,
}

impl GameState {
    /// fresh game in the draw phase of round one.
    pub fn new(n: usize, rng: &mut impl Rng) -> Self {
        assert!((2..=4).contains(&n), "colori seats 2 to 4 players");
        let mut ids: std::ops::RangeFrom<CardId> = 0..;
        let mut next = || ids.next().expect("card ids exhausted");
        let players = (0..n)
            .map(|_| {
                let mut deck = Card::STARTER
                    .iter()
                    .map(|card| Instance { id: next(), card: *card })
                    .collect::<Vec<_>>();
                deck.shuffle(rng);
                Player {
                    deck,
                    wheel: ColorWheel::from(&Color::PRIMARIES[..]),
                    ..Player::default()
                }
            })
            .collect::<Vec<_>>();
        let mut draft_deck = Card::DYES
            .iter()
            .flat_map(|card| std::iter::repeat_n(*card, DYE_COPIES))
            .chain(Card::MATERIALS.iter().copied())
            .chain(
                Card::ACTIONS
                    .iter()
                    .flat_map(|card| std::iter::repeat_n(*card, ACTION_COPIES)),
            )
            .map(|card| Instance { id: next(), card })
            .collect::<Vec<_>>();
        draft_deck.shuffle(rng);
        let mut buyer_deck = Buyer::deck()
            .into_iter()
            .map(|buyer| Contract { id: next(), buyer })
            .collect::<Vec<_>>();
        buyer_deck.shuffle(rng);
        let buyer_display = buyer_deck.split_off(buyer_deck.len() - BUYER_DISPLAY);
        Self {
            players,
            draft_deck,
            destroyed: Vec::new(),
            buyer_deck,
            buyer_display,
            phase: Phase::Draw,
            round: 1,
        }
    }

    pub fn n(&self) -> usize {
        self.players.len()
    }
    /// first to pick and first to act this round
    pub fn starter(&self) -> Position {
        (self.round as usize - 1) % self.n()
    }
    pub fn scores(&self) -> Vec<u32> {
        self.players.iter().map(Player::score).collect()
    }
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over)
    }
    /// seat whose input the game is waiting for, if any
    pub fn actor(&self) -> Option<Position> {
        match &self.phase {
            Phase::Draft(draft) => Some(draft.actor),
            Phase::Action(turn) => Some(turn.actor),
            Phase::Draw | Phase::Over => None,
        }
    }

    // ===== DRAW PHASE =====

    /// everyone draws into their workshop, then the draft is dealt.
    pub fn draw(&mut self, rng: &mut impl Rng) {
        assert!(matches!(self.phase, Phase::Draw), "draw outside draw phase");
        for player in self.players.iter_mut() {
            player.draw(DRAW_SIZE, rng);
        }
        self.deal(rng);
    }

    // ===== DRAFT PHASE =====

    fn deal(&mut self, rng: &mut impl Rng) {
        let mut hands = Vec::with_capacity(self.n());
        for _ in 0..self.n() {
            let mut hand = Vec::with_capacity(HAND_SIZE);
            for _ in 0..HAND_SIZE {
                if self.draft_deck.is_empty() {
                    if self.destroyed.is_empty() {
                        break;
                    }
                    self.draft_deck.append(&mut self.destroyed);
                    self.draft_deck.shuffle(rng);
                }
                hand.extend(self.draft_deck.pop());
            }
            hands.push(hand);
        }
        if hands.iter().any(Vec::is_empty) {
            log::debug!("draft deck exhausted in round {}", self.round);
            self.destroyed.extend(hands.into_iter().flatten());
            self.begin_actions();
        } else {
            self.phase = Phase::Draft(Draft {
                pick: 0,
                actor: self.starter(),
                hands,
                direction: Direction::of(self.round),
                waiting: false,
            });
        }
    }

    /// the acting drafter keeps one card from their hand.
    pub fn pick(&mut self, id: CardId) {
        let n = self.n();
        let starter = self.starter();
        let Phase::Draft(ref mut draft) = self.phase else {
            panic!("draft pick outside draft phase")
        };
        assert!(!draft.waiting, "draft pick while waiting for pass");
        let actor = draft.actor;
        let hand = &mut draft.hands[actor];
        let index = hand
            .iter()
            .position(|c| c.id == id)
            .unwrap_or_else(|| panic!("card {} not in hand of player {}", id, actor));
        let card = hand.remove(index);
        self.players[actor].drafted.push(card);
        draft.actor = (actor + 1) % n;
        if draft.actor != starter {
            draft.waiting = true;
            return;
        }
        match draft.direction {
            Direction::Forward => draft.hands.rotate_right(1),
            Direction::Backward => draft.hands.rotate_left(1),
        }
        draft.pick += 1;
        if draft.pick >= DRAFT_PICKS || draft.hands.iter().any(Vec::is_empty) {
            let leftovers = std::mem::take(&mut draft.hands);
            self.destroyed.extend(leftovers.into_iter().flatten());
            self.begin_actions();
        } else {
            draft.waiting = true;
        }
    }

    /// the next drafter has taken the hand.
    pub fn confirm_pass(&mut self) {
        if let Phase::Draft(ref mut draft) = self.phase {
            draft.waiting = false;
        }
    }

    pub(super) fn begin_actions(&mut self) {
        self.phase = Phase::Action(Turn {
            actor: self.starter(),
            stack: Vec::new(),
            pending: None,
        });
    }

    pub(super) fn end_round(&mut self) {
        self.round += 1;
        let won = self.players.iter().any(|p| p.score() >= WINNING_SCORE);
        if won || self.round > MAX_ROUNDS {
            log::debug!("game over after round {} with {:?}", self.round - 1, self.scores());
            self.phase = Phase::Over;
        } else {
            self.phase = Phase::Draw;
        }
    }
}
