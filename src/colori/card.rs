use super::ability::Ability;
use super::color::Color;
use super::material::Material;
use crate::CardId;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    BasicDye,
    Dye,
    Material,
    Action,
}

/// Every card printed in the game. Physical copies are
/// distinguished by [`Instance`] ids, not by this enum.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    BasicRed, BasicYellow, BasicBlue,
    Kermes, Weld, Woad,
    Madder, Turmeric, DyersGreenweed, Verdigris, Orchil, Logwood,
    Vermilion, Saffron, PersianBerries, Azurite, Indigo, Cochineal,
    Ceramics, Paintings, Textiles,
    FineCeramics, FinePaintings, FineTextiles,
    TerraCotta, OchreWare, CobaltWare,
    CinnabarCanvas, OrpimentCanvas, UltramarineCanvas,
    AlizarinFabric, FusticFabric, PastelFabric,
    ClayCanvas, ClayFabric, CanvasFabric,
    Alum, CreamOfTartar, GumArabic, Potash, Vinegar,
    Chalk,
}

/// Printed attributes of a card.
struct Print {
    kind: Kind,
    pips: &'static [Color],
    materials: &'static [Material],
    ability: Ability,
    workshop: &'static [Ability],
}

impl Card {
    #[rustfmt::skip]
    pub const DYES: [Self; 15] = [
        Self::Kermes, Self::Weld, Self::Woad,
        Self::Madder, Self::Turmeric, Self::DyersGreenweed, Self::Verdigris, Self::Orchil, Self::Logwood,
        Self::Vermilion, Self::Saffron, Self::PersianBerries, Self::Azurite, Self::Indigo, Self::Cochineal,
    ];
    #[rustfmt::skip]
    pub const MATERIALS: [Self; 15] = [
        Self::FineCeramics, Self::FinePaintings, Self::FineTextiles,
        Self::TerraCotta, Self::OchreWare, Self::CobaltWare,
        Self::CinnabarCanvas, Self::OrpimentCanvas, Self::UltramarineCanvas,
        Self::AlizarinFabric, Self::FusticFabric, Self::PastelFabric,
        Self::ClayCanvas, Self::ClayFabric, Self::CanvasFabric,
    ];
    pub const ACTIONS: [Self; 5] = [
        Self::Alum,
        Self::CreamOfTartar,
        Self::GumArabic,
        Self::Potash,
        Self::Vinegar,
    ];
    /// every player's opening deck
    pub const STARTER: [Self; 7] = [
        Self::BasicRed,
        Self::BasicYellow,
        Self::BasicBlue,
        Self::Ceramics,
        Self::Paintings,
        Self::Textiles,
        Self::Chalk,
    ];

    pub fn kind(&self) -> Kind {
        self.print().kind
    }
    pub fn is_action(&self) -> bool {
        self.kind() == Kind::Action
    }
    /// color pips added to the wheel when workshopped
    pub fn pips(&self) -> &'static [Color] {
        self.print().pips
    }
    /// materials stored when workshopped
    pub fn materials(&self) -> &'static [Material] {
        self.print().materials
    }
    /// effect when destroyed from the drafted row or the workshop
    pub fn ability(&self) -> Ability {
        self.print().ability
    }
    /// effects when an action card is workshopped
    pub fn workshop(&self) -> &'static [Ability] {
        self.print().workshop
    }

    #[rustfmt::skip]
    fn print(&self) -> Print {
        use Color::*;
        const W2: Ability = Ability::Workshop { count: 2 };
        const W3: Ability = Ability::Workshop { count: 3 };
        const D1: Ability = Ability::DestroyCards { count: 1 };
        const D2: Ability = Ability::DrawCards { count: 2 };
        const M2: Ability = Ability::MixColors { count: 2 };
        const SELL: Ability = Ability::Sell;
        fn dye(pips: &'static [Color], ability: Ability) -> Print { Print { kind: Kind::Dye, pips, materials: &[], ability, workshop: &[] } }
        fn stuff(materials: &'static [Material], pips: &'static [Color], ability: Ability) -> Print { Print { kind: Kind::Material, pips, materials, ability, workshop: &[] } }
        fn action(ability: Ability, workshop: &'static [Ability]) -> Print { Print { kind: Kind::Action, pips: &[], materials: &[], ability, workshop } }
        match self {
            Self::BasicRed          => Print { kind: Kind::BasicDye, pips: &[Red], materials: &[], ability: SELL, workshop: &[] },
            Self::BasicYellow       => Print { kind: Kind::BasicDye, pips: &[Yellow], materials: &[], ability: SELL, workshop: &[] },
            Self::BasicBlue         => Print { kind: Kind::BasicDye, pips: &[Blue], materials: &[], ability: SELL, workshop: &[] },
            Self::Kermes            => dye(&[Red, Red, Red], SELL),
            Self::Weld              => dye(&[Yellow, Yellow, Yellow], SELL),
            Self::Woad              => dye(&[Blue, Blue, Blue], SELL),
            Self::Madder            => dye(&[Orange, Red], W3),
            Self::Turmeric          => dye(&[Orange, Yellow], W3),
            Self::DyersGreenweed    => dye(&[Green, Yellow], W3),
            Self::Verdigris         => dye(&[Green, Blue], W3),
            Self::Orchil            => dye(&[Purple, Red], W3),
            Self::Logwood           => dye(&[Purple, Blue], W3),
            Self::Vermilion         => dye(&[Color::Vermilion], M2),
            Self::Saffron           => dye(&[Amber], M2),
            Self::PersianBerries    => dye(&[Chartreuse], M2),
            Self::Azurite           => dye(&[Teal], M2),
            Self::Indigo            => dye(&[Color::Indigo], M2),
            Self::Cochineal         => dye(&[Magenta], M2),
            Self::Ceramics          => stuff(&[Material::Ceramics], &[], W2),
            Self::Paintings         => stuff(&[Material::Paintings], &[], SELL),
            Self::Textiles          => stuff(&[Material::Textiles], &[], W2),
            Self::FineCeramics      => stuff(&[Material::Ceramics, Material::Ceramics], &[], W2),
            Self::FinePaintings     => stuff(&[Material::Paintings, Material::Paintings], &[], SELL),
            Self::FineTextiles      => stuff(&[Material::Textiles, Material::Textiles], &[], D2),
            Self::TerraCotta        => stuff(&[Material::Ceramics], &[Red], W2),
            Self::OchreWare         => stuff(&[Material::Ceramics], &[Yellow], W2),
            Self::CobaltWare        => stuff(&[Material::Ceramics], &[Blue], W2),
            Self::CinnabarCanvas    => stuff(&[Material::Paintings], &[Red], SELL),
            Self::OrpimentCanvas    => stuff(&[Material::Paintings], &[Yellow], SELL),
            Self::UltramarineCanvas => stuff(&[Material::Paintings], &[Blue], SELL),
            Self::AlizarinFabric    => stuff(&[Material::Textiles], &[Red], D2),
            Self::FusticFabric      => stuff(&[Material::Textiles], &[Yellow], D2),
            Self::PastelFabric      => stuff(&[Material::Textiles], &[Blue], D2),
            Self::ClayCanvas        => stuff(&[Material::Ceramics, Material::Paintings], &[], D1),
            Self::ClayFabric        => stuff(&[Material::Ceramics, Material::Textiles], &[], D1),
            Self::CanvasFabric      => stuff(&[Material::Paintings, Material::Textiles], &[], D1),
            Self::Alum              => action(D1, &[Ability::GainDucats { count: 1 }]),
            Self::CreamOfTartar     => action(D1, &[Ability::DrawCards { count: 3 }]),
            Self::GumArabic         => action(D1, &[Ability::GainSecondary]),
            Self::Potash            => action(D1, &[W3]),
            Self::Vinegar           => action(D1, &[Ability::ChangeTertiary]),
            Self::Chalk             => action(SELL, &[Ability::GainPrimary]),
        }
    }
}

/// One physical copy of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instance {
    pub id: CardId,
    pub card: Card,
}

impl std::fmt::Display for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}#{}", self.card, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_actions_have_workshop_effects() {
        let all = Card::STARTER
            .iter()
            .chain(Card::DYES.iter())
            .chain(Card::MATERIALS.iter())
            .chain(Card::ACTIONS.iter());
        for card in all {
            assert!(card.is_action() != card.workshop().is_empty());
        }
    }

    #[test]
    fn materials_store_materials() {
        assert!(Card::MATERIALS.iter().all(|c| !c.materials().is_empty()));
        assert!(Card::DYES.iter().all(|c| c.materials().is_empty()));
        assert!(Card::DYES.iter().all(|c| !c.pips().is_empty()));
    }
}
