use crate::Position;
use crate::adapter::ColoriChoice;
use crate::colori::ColorWheel;
use crate::colori::Contract;
use crate::colori::GameState;
use crate::colori::Materials;
use crate::colori::Phase;
use crate::colori::Player;
use serde::Deserialize;
use serde::Serialize;

/// One decision as it was made at the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub seq: u32,
    pub timestamp: u64,
    pub round: u32,
    pub phase: String,
    pub player_index: Position,
    pub choice: ColoriChoice,
}

impl Entry {
    pub fn phase(state: &GameState) -> &'static str {
        match state.phase {
            Phase::Draw => "draw",
            Phase::Draft(_) => "draft",
            Phase::Action(_) => "action",
            Phase::Over => "gameOver",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalScore {
    pub name: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalStats {
    pub name: String,
    pub deck_size: usize,
    pub completed_buyers: Vec<Contract>,
    pub ducats: u32,
    pub color_wheel: ColorWheel,
    pub materials: Materials,
}

impl From<(String, &Player)> for FinalStats {
    fn from((name, player): (String, &Player)) -> Self {
        Self {
            name,
            deck_size: player.deck.len()
                + player.discard.len()
                + player.workshop.len()
                + player.drafted.len(),
            completed_buyers: player.buyers.clone(),
            ducats: player.ducats,
            color_wheel: player.wheel,
            materials: player.materials,
        }
    }
}

/// A whole self-play game: where it started, every choice, how it ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLog {
    pub version: u32,
    pub game_started_at: u64,
    pub game_ended_at: Option<u64>,
    pub player_names: Vec<String>,
    pub ai_players: Vec<bool>,
    pub initial_state: GameState,
    pub final_scores: Option<Vec<FinalScore>>,
    pub final_player_stats: Option<Vec<FinalStats>>,
    pub entries: Vec<Entry>,
}

impl GameLog {
    pub const VERSION: u32 = 1;

    pub fn new(initial: GameState) -> Self {
        let names = (1..=initial.n())
            .map(|i| format!("Player {}", i))
            .collect::<Vec<_>>();
        Self {
            version: Self::VERSION,
            game_started_at: now(),
            game_ended_at: None,
            ai_players: vec![true; names.len()],
            player_names: names,
            initial_state: initial,
            final_scores: None,
            final_player_stats: None,
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, state: &GameState, player: Position, choice: &ColoriChoice) {
        self.entries.push(Entry {
            seq: self.entries.len() as u32 + 1,
            timestamp: now(),
            round: state.round,
            phase: Entry::phase(state).to_string(),
            player_index: player,
            choice: choice.clone(),
        });
    }

    pub fn finish(&mut self, state: &GameState) {
        self.game_ended_at = Some(now());
        self.final_scores = Some(
            self.player_names
                .iter()
                .zip(state.scores())
                .map(|(name, score)| FinalScore {
                    name: name.clone(),
                    score,
                })
                .collect(),
        );
        self.final_player_stats = Some(
            self.player_names
                .iter()
                .cloned()
                .zip(state.players.iter())
                .map(FinalStats::from)
                .collect(),
        );
    }

    /// seat with the highest final score, earliest seat on ties.
    pub fn winner(&self) -> Option<Position> {
        self.final_scores
            .as_ref()?
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|(_, s)| s.score)
            .map(|(i, _)| i)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// milliseconds since the epoch
fn now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
