use super::color::Color;
use super::material::Material;
use crate::CardId;
use serde::Deserialize;
use serde::Serialize;

/// A scoring card: pay one material plus a color cost, gain its stars.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Buyer {
    pub stars: u32,
    pub material: Material,
    pub cost: Vec<Color>,
}

impl Buyer {
    /// the full buyer deck, 51 cards:
    /// textiles for a tertiary or a secondary with a primary,
    /// ceramics for a tertiary with a primary,
    /// paintings for a tertiary with a secondary.
    pub fn deck() -> Vec<Self> {
        let textiles = Color::TERTIARIES
            .iter()
            .map(|t| vec![*t])
            .chain(
                Color::SECONDARIES
                    .iter()
                    .flat_map(|s| Color::PRIMARIES.iter().map(move |p| vec![*s, *p])),
            )
            .map(|cost| Self::from((2, Material::Textiles, cost)));
        let ceramics = Color::TERTIARIES
            .iter()
            .flat_map(|t| Color::PRIMARIES.iter().map(move |p| vec![*t, *p]))
            .map(|cost| Self::from((3, Material::Ceramics, cost)));
        let paintings = Color::TERTIARIES
            .iter()
            .flat_map(|t| Color::SECONDARIES.iter().map(move |s| vec![*t, *s]))
            .map(|cost| Self::from((4, Material::Paintings, cost)));
        textiles.chain(ceramics).chain(paintings).collect()
    }
}

impl From<(u32, Material, Vec<Color>)> for Buyer {
    fn from((stars, material, cost): (u32, Material, Vec<Color>)) -> Self {
        Self {
            stars,
            material,
            cost,
        }
    }
}

/// One physical buyer card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contract {
    pub id: CardId,
    pub buyer: Buyer,
}

impl std::fmt::Display for Contract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}★ {:?} {:?} #{}",
            self.buyer.stars, self.buyer.material, self.buyer.cost, self.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_composition() {
        let deck = Buyer::deck();
        assert!(deck.len() == 51);
        assert!(deck.iter().filter(|b| b.stars == 2).count() == 15);
        assert!(deck.iter().filter(|b| b.stars == 3).count() == 18);
        assert!(deck.iter().filter(|b| b.stars == 4).count() == 18);
    }
}
