use serde::Deserialize;
use serde::Serialize;

/// The twelve hues of the dye wheel, in wheel order.
///
/// Primaries sit every four steps, secondaries halfway between them,
/// and tertiaries fill the remaining slots. Mixing two neighbouring
/// tiers lands on the midpoint of the shorter arc between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Vermilion,
    Orange,
    Amber,
    Yellow,
    Chartreuse,
    Green,
    Teal,
    Blue,
    Indigo,
    Purple,
    Magenta,
}

impl Color {
    pub const ALL: [Self; 12] = [
        Self::Red,
        Self::Vermilion,
        Self::Orange,
        Self::Amber,
        Self::Yellow,
        Self::Chartreuse,
        Self::Green,
        Self::Teal,
        Self::Blue,
        Self::Indigo,
        Self::Purple,
        Self::Magenta,
    ];
    pub const PRIMARIES: [Self; 3] = [Self::Red, Self::Yellow, Self::Blue];
    pub const SECONDARIES: [Self; 3] = [Self::Orange, Self::Green, Self::Purple];
    pub const TERTIARIES: [Self; 6] = [
        Self::Vermilion,
        Self::Amber,
        Self::Chartreuse,
        Self::Teal,
        Self::Indigo,
        Self::Magenta,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }
    pub fn is_primary(&self) -> bool {
        self.index() % 4 == 0
    }
    pub fn is_secondary(&self) -> bool {
        self.index() % 4 == 2
    }
    pub fn is_tertiary(&self) -> bool {
        self.index() % 2 == 1
    }

    /// shortest step count around the wheel
    fn distance(&self, other: &Self) -> usize {
        let d = (self.index() + 12 - other.index()) % 12;
        d.min(12 - d)
    }

    /// two distinct primaries, or a primary and a secondary
    /// two steps apart, can be mixed.
    pub fn mixes(&self, other: &Self) -> bool {
        match (self.is_primary(), other.is_primary()) {
            (true, true) => self != other,
            (true, false) => other.is_secondary() && self.distance(other) == 2,
            (false, true) => self.is_secondary() && self.distance(other) == 2,
            (false, false) => false,
        }
    }

    /// midpoint of the shorter arc between two mixable colors.
    pub fn mix(&self, other: &Self) -> Self {
        assert!(self.mixes(other), "cannot mix {:?} with {:?}", self, other);
        let a = self.index();
        let b = other.index();
        let forward = (b + 12 - a) % 12;
        let index = if forward <= 6 {
            (a + forward / 2) % 12
        } else {
            (a + 12 - (12 - forward) / 2) % 12
        };
        Self::ALL[index]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_partition_wheel() {
        for color in Color::ALL {
            let tiers = [color.is_primary(), color.is_secondary(), color.is_tertiary()];
            assert!(tiers.iter().filter(|t| **t).count() == 1);
        }
        assert!(Color::PRIMARIES.iter().all(Color::is_primary));
        assert!(Color::SECONDARIES.iter().all(Color::is_secondary));
        assert!(Color::TERTIARIES.iter().all(Color::is_tertiary));
    }

    #[test]
    fn primaries_mix_into_secondaries() {
        assert!(Color::Red.mix(&Color::Yellow) == Color::Orange);
        assert!(Color::Yellow.mix(&Color::Blue) == Color::Green);
        assert!(Color::Blue.mix(&Color::Red) == Color::Purple);
        assert!(Color::Red.mix(&Color::Blue) == Color::Purple);
    }

    #[test]
    fn secondaries_mix_into_tertiaries() {
        assert!(Color::Red.mix(&Color::Orange) == Color::Vermilion);
        assert!(Color::Orange.mix(&Color::Yellow) == Color::Amber);
        assert!(Color::Green.mix(&Color::Blue) == Color::Teal);
        assert!(Color::Purple.mix(&Color::Red) == Color::Magenta);
        assert!(Color::Red.mix(&Color::Purple) == Color::Magenta);
    }

    #[test]
    fn unmixable_pairs() {
        assert!(!Color::Red.mixes(&Color::Red));
        assert!(!Color::Red.mixes(&Color::Green));
        assert!(!Color::Orange.mixes(&Color::Green));
        assert!(!Color::Vermilion.mixes(&Color::Red));
        assert!(!Color::Yellow.mixes(&Color::Purple));
    }

    #[test]
    fn mixing_is_symmetric() {
        for a in Color::ALL {
            for b in Color::ALL {
                assert!(a.mixes(&b) == b.mixes(&a));
                if a.mixes(&b) {
                    assert!(a.mix(&b) == b.mix(&a));
                }
            }
        }
    }
}
