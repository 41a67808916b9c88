use super::request::Request;
use crate::adapter::ColoriChoice;
use crate::adapter::ColoriGame;
use crate::search::Game;
use crate::search::Search;
use crate::search::Status;
use anyhow::Context;
use rand::prelude::*;

/// Runs searches on behalf of an orchestrator. Requests and answers
/// cross this boundary as plain values, so a search can be moved to
/// another thread or process without sharing state.
pub struct Advisor;

impl Advisor {
    /// search for the requested seat, failing if it is not their move.
    pub fn search(request: &Request) -> anyhow::Result<ColoriChoice> {
        let seed = request.seed.unwrap_or_else(rand::random);
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let ref mut game = ColoriGame::new(
            request.game_state.clone(),
            request.seen_hands.clone(),
            request.horizon,
            rng.random(),
        );
        match game.status() {
            Status::Awaiting(player) if player == request.player_index => {}
            status => anyhow::bail!("player {} cannot act in {:?}", request.player_index, status),
        }
        let choice = Search::seeded(request.iterations, rng.random()).run(game)?;
        log::debug!("player {} chooses {}", request.player_index, choice);
        Ok(choice)
    }

    /// a failed search means no move from the AI this time.
    pub fn decide(request: &Request) -> Option<ColoriChoice> {
        match Self::search(request) {
            Ok(choice) => Some(choice),
            Err(e) => {
                log::error!("no AI move available: {:#}", e);
                None
            }
        }
    }

    /// search off the calling thread.
    pub fn spawn(request: Request) -> std::thread::JoinHandle<Option<ColoriChoice>> {
        std::thread::spawn(move || Self::decide(&request))
    }

    /// JSON request in, JSON choice out.
    pub fn respond(json: &str) -> anyhow::Result<String> {
        let request = Request::from_json(json).context("malformed search request")?;
        let choice = Self::search(&request)?;
        Ok(serde_json::to_string(&choice)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colori::GameState;
    use crate::colori::Phase;
    use rand::prelude::*;

    fn request(player: usize) -> Request {
        let game = ColoriGame::fresh(2, 60);
        Request {
            game_state: game.state().clone(),
            player_index: player,
            iterations: 20,
            seen_hands: None,
            horizon: Some(2),
            seed: Some(60),
        }
    }

    #[test]
    fn answers_for_acting_player() {
        let request = request(0);
        let choice = Advisor::decide(&request).unwrap();
        let game = ColoriGame::new(request.game_state, None, None, 0);
        assert!(game.available(&choice));
    }

    #[test]
    fn refuses_wrong_player() {
        assert!(Advisor::decide(&request(1)).is_none());
    }

    #[test]
    fn refuses_finished_game() {
        let ref mut rng = SmallRng::seed_from_u64(61);
        let mut state = GameState::new(2, rng);
        state.phase = Phase::Over;
        let request = Request {
            game_state: state,
            ..request(0)
        };
        assert!(Advisor::search(&request).is_err());
    }

    #[test]
    fn background_search_joins() {
        let handle = Advisor::spawn(request(0));
        assert!(handle.join().unwrap().is_some());
    }

    #[test]
    fn seeded_requests_repeat() {
        let request = request(0);
        let first = Advisor::search(&request).unwrap();
        assert!((0..4).all(|_| Advisor::search(&request).unwrap() == first));
    }

    #[test]
    fn json_boundary_round_trips() {
        let request = request(0);
        let json = request.to_json().unwrap();
        assert!(Request::from_json(&json).unwrap() == request);
        let answer = Advisor::respond(&json).unwrap();
        let choice = serde_json::from_str::<ColoriChoice>(&answer).unwrap();
        assert!(choice == Advisor::search(&request).unwrap());
        assert!(Advisor::respond("{}").is_err());
    }
}
