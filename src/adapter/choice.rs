use crate::CardId;
use crate::colori::Color;
use serde::Deserialize;
use serde::Serialize;

/// Every decision a Colori player can be asked to make.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ColoriChoice {
    DraftPick { card: CardId },
    DestroyDraftedCard { card: CardId },
    EndTurn,
    Workshop { cards: Vec<CardId> },
    SkipWorkshop,
    DestroyDrawnCards { cards: Vec<CardId> },
    Mix { a: Color, b: Color },
    SkipMix,
    SelectBuyer { buyer: CardId },
    GainSecondary { color: Color },
    GainPrimary { color: Color },
    LoseTertiary { color: Color },
    GainTertiary { color: Color },
}

impl ColoriChoice {
    /// Canonical form used as a search key: card lists sorted
    /// ascending and mixes ordered around the wheel, so choices
    /// that mean the same thing compare equal.
    pub fn canonical(&self) -> Self {
        match self {
            Self::Workshop { cards } => Self::Workshop {
                cards: Self::sorted(cards),
            },
            Self::DestroyDrawnCards { cards } => Self::DestroyDrawnCards {
                cards: Self::sorted(cards),
            },
            Self::Mix { a, b } if b < a => Self::Mix { a: *b, b: *a },
            other => other.clone(),
        }
    }
    fn sorted(cards: &[CardId]) -> Vec<CardId> {
        let mut cards = cards.to_vec();
        cards.sort_unstable();
        cards
    }
}

impl std::fmt::Display for ColoriChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let list = |cards: &[CardId]| {
            cards
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",")
        };
        match self {
            Self::DraftPick { card } => write!(f, "draftPick:{}", card),
            Self::DestroyDraftedCard { card } => write!(f, "destroyDrafted:{}", card),
            Self::EndTurn => write!(f, "endTurn"),
            Self::Workshop { cards } => write!(f, "workshop:{}", list(cards)),
            Self::SkipWorkshop => write!(f, "skipWorkshop"),
            Self::DestroyDrawnCards { cards } => write!(f, "destroyDrawn:{}", list(cards)),
            Self::Mix { a, b } => write!(f, "mix:{}:{}", a, b),
            Self::SkipMix => write!(f, "skipMix"),
            Self::SelectBuyer { buyer } => write!(f, "selectBuyer:{}", buyer),
            Self::GainSecondary { color } => write!(f, "gainSecondary:{}", color),
            Self::GainPrimary { color } => write!(f, "gainPrimary:{}", color),
            Self::LoseTertiary { color } => write!(f, "loseTertiary:{}", color),
            Self::GainTertiary { color } => write!(f, "gainTertiary:{}", color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_ignores_order() {
        let a = ColoriChoice::Workshop { cards: vec![9, 2, 5] };
        let b = ColoriChoice::Workshop { cards: vec![5, 9, 2] };
        assert!(a.canonical() == b.canonical());
        let x = ColoriChoice::Mix { a: Color::Orange, b: Color::Red };
        let y = ColoriChoice::Mix { a: Color::Red, b: Color::Orange };
        assert!(x.canonical() == y.canonical());
        assert!(x.canonical().to_string() == "mix:Red:Orange");
    }

    #[test]
    fn json_round_trip() {
        let choice = ColoriChoice::DestroyDrawnCards { cards: vec![3, 1] };
        let json = serde_json::to_string(&choice).unwrap();
        assert!(json == r#"{"type":"destroyDrawnCards","cards":[3,1]}"#);
        assert!(serde_json::from_str::<ColoriChoice>(&json).unwrap() == choice);
    }
}
