use serde::Deserialize;
use serde::Serialize;

/// Effects pushed onto a player's ability stack when a card is
/// destroyed from the drafted row, or workshopped if it is an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Ability {
    Workshop { count: usize },
    DrawCards { count: usize },
    MixColors { count: usize },
    DestroyCards { count: usize },
    Sell,
    GainDucats { count: u32 },
    GainSecondary,
    GainPrimary,
    ChangeTertiary,
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Workshop { count } => write!(f, "workshop {}", count),
            Self::DrawCards { count } => write!(f, "draw {}", count),
            Self::MixColors { count } => write!(f, "mix {}", count),
            Self::DestroyCards { count } => write!(f, "destroy {}", count),
            Self::Sell => write!(f, "sell"),
            Self::GainDucats { count } => write!(f, "ducats {}", count),
            Self::GainSecondary => write!(f, "secondary"),
            Self::GainPrimary => write!(f, "primary"),
            Self::ChangeTertiary => write!(f, "tertiary"),
        }
    }
}
