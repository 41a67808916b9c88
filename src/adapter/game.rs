use super::choice::ColoriChoice;
use super::determinize::determinize;
use super::enumerate;
use super::rollout::rollout;
use super::seen::SeenHands;
use crate::Position;
use crate::Utility;
use crate::colori::GameState;
use crate::colori::Phase;
use crate::search::Game;
use crate::search::Status;
use rand::prelude::*;

/// Colori as seen by the search.
///
/// Wraps a rules-engine state together with what the searching player
/// has observed in the current draft, an optional round horizon, and
/// the randomness used for draws and shuffles. Forced transitions
/// (draw phase, hot-seat passes) happen inside [`Game::apply`], so the
/// search only ever sees a player to act or a finished game.
#[derive(Debug, Clone)]
pub struct ColoriGame {
    state: GameState,
    seen: Option<SeenHands>,
    horizon: Option<u32>,
    rng: SmallRng,
}

impl ColoriGame {
    pub fn new(state: GameState, seen: Option<SeenHands>, horizon: Option<u32>, seed: u64) -> Self {
        let mut game = Self {
            state,
            seen,
            horizon,
            rng: SmallRng::seed_from_u64(seed),
        };
        game.settle();
        game
    }
    /// a fresh game of `n` players, ready for the first draft pick
    pub fn fresh(n: usize, seed: u64) -> Self {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let state = GameState::new(n, rng);
        Self::new(state, None, None, rng.random())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
    pub fn seen(&self) -> Option<&SeenHands> {
        self.seen.as_ref()
    }
    pub fn horizon(&self) -> Option<u32> {
        self.horizon
    }

    /// normalized scores: each player's share of all points scored.
    pub fn utilities(&self) -> Vec<Utility> {
        let scores = self.state.scores();
        let total = scores.iter().sum::<u32>().max(1) as Utility;
        scores.iter().map(|s| *s as Utility / total).collect()
    }

    fn finished(&self) -> bool {
        self.state.is_over() || self.horizon.is_some_and(|h| self.state.round > h)
    }

    /// run every transition that needs no decision.
    fn settle(&mut self) {
        loop {
            match self.state.phase {
                Phase::Draw => self.state.draw(&mut self.rng),
                Phase::Draft(ref draft) if draft.waiting => self.state.confirm_pass(),
                _ => break,
            }
        }
    }
}

impl Game for ColoriGame {
    type Choice = ColoriChoice;
    type Key = ColoriChoice;

    fn choices(&self) -> Vec<ColoriChoice> {
        match self.finished() {
            true => vec![],
            false => enumerate::choices(&self.state),
        }
    }

    fn apply(&mut self, choice: &ColoriChoice) {
        log::trace!("round {} apply {}", self.state.round, choice);
        let ref mut rng = self.rng;
        let state = &mut self.state;
        match choice {
            ColoriChoice::DraftPick { card } => state.pick(*card),
            ColoriChoice::DestroyDraftedCard { card } => state.destroy_drafted(*card, rng),
            ColoriChoice::EndTurn => state.end_turn(),
            ColoriChoice::Workshop { cards } => state.workshop(cards, rng),
            ColoriChoice::SkipWorkshop => state.skip_workshop(rng),
            ColoriChoice::DestroyDrawnCards { cards } => state.destroy_drawn(cards, rng),
            ColoriChoice::Mix { a, b } => state.mix(*a, *b, rng),
            ColoriChoice::SkipMix => state.skip_mix(rng),
            ColoriChoice::SelectBuyer { buyer } => state.sell(*buyer, rng),
            ColoriChoice::GainSecondary { color } => state.gain_secondary(*color, rng),
            ColoriChoice::GainPrimary { color } => state.gain_primary(*color, rng),
            ColoriChoice::LoseTertiary { color } => state.lose_tertiary(*color),
            ColoriChoice::GainTertiary { color } => state.gain_tertiary(*color, rng),
        }
        self.settle();
    }

    fn status(&self) -> Status {
        match (self.finished(), self.state.actor()) {
            (false, Some(actor)) => Status::Awaiting(actor),
            _ => Status::Terminated(self.utilities()),
        }
    }

    fn determinize(&mut self, perspective: Position) -> Self {
        let state = determinize(&self.state, self.seen.as_ref(), perspective, &mut self.rng);
        Self {
            state,
            seen: self.seen.clone(),
            horizon: self.horizon,
            rng: SmallRng::from_rng(&mut self.rng),
        }
    }

    fn available(&self, choice: &ColoriChoice) -> bool {
        !self.finished() && enumerate::available(&self.state, choice)
    }

    fn rollout(&mut self) -> ColoriChoice {
        rollout(&self.state, &mut self.rng)
    }

    fn key(&self, choice: &ColoriChoice) -> ColoriChoice {
        choice.canonical()
    }
}
