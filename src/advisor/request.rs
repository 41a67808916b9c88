use crate::Position;
use crate::adapter::SeenHands;
use crate::colori::GameState;
use serde::Deserialize;
use serde::Serialize;

/// Everything a worker needs to choose a move for one seat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub game_state: GameState,
    pub player_index: Position,
    pub iterations: usize,
    #[serde(default)]
    pub seen_hands: Option<SeenHands>,
    #[serde(default)]
    pub horizon: Option<u32>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Request {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
