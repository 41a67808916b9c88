use super::record::GameLog;
use crate::HORIZON_LOOKAHEAD;
use crate::MIN_HORIZON;
use crate::adapter::ColoriGame;
use crate::adapter::SeenHands;
use crate::advisor::Advisor;
use crate::advisor::Request;
use crate::search::Game;
use crate::search::Status;
use rand::prelude::*;

/// Every seat played by the search against itself.
///
/// The table keeps one canonical game. Each seat only ever hands the
/// search a copy of it, plus the draft hands that seat has looked at
/// this round, so no seat can see what it should not.
#[derive(Debug, Clone)]
pub struct Arena {
    pub players: usize,
    pub iterations: usize,
    /// rounds searched past the current one, instead of the default
    pub lookahead: Option<u32>,
    pub seed: u64,
}

impl Arena {
    /// last round a search made during `round` plays out
    pub fn horizon(&self, round: u32) -> u32 {
        match self.lookahead {
            Some(lookahead) => round + lookahead,
            None => MIN_HORIZON.max(round + HORIZON_LOOKAHEAD),
        }
    }

    /// play game number `index` to the end.
    pub fn play(&self, index: usize) -> anyhow::Result<GameLog> {
        let ref mut rng = SmallRng::seed_from_u64(self.seed.wrapping_add(index as u64));
        let mut table = ColoriGame::fresh(self.players, rng.random());
        let mut seen = vec![SeenHands::default(); self.players];
        let mut log = GameLog::new(table.state().clone());
        while let Status::Awaiting(player) = table.status() {
            seen[player].observe(table.state(), player);
            let request = Request {
                game_state: table.state().clone(),
                player_index: player,
                iterations: self.iterations,
                seen_hands: Some(seen[player].clone()),
                horizon: Some(self.horizon(table.state().round)),
                seed: Some(rng.random()),
            };
            let choice = Advisor::search(&request)?;
            log.record(table.state(), player, &choice);
            table.apply(&choice);
        }
        log.finish(table.state());
        log::info!(
            "game {} over after round {} with scores {:?}",
            index,
            table.state().round - 1,
            table.state().scores()
        );
        Ok(log)
    }

    /// wins per seat over a batch of finished games
    pub fn tally(&self, logs: &[GameLog]) -> Vec<usize> {
        let mut wins = vec![0; self.players];
        for winner in logs.iter().filter_map(GameLog::winner) {
            wins[winner] += 1;
        }
        wins
    }
}
