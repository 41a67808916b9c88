use super::buyer::Contract;
use super::card::Instance;
use super::color::Color;
use super::material::Materials;
use super::wheel::ColorWheel;
use rand::prelude::*;
use serde::Deserialize;
use serde::Serialize;

/// Everything one seat owns. The deck is face down and unordered
/// as far as anyone knows; discard, wheel, materials and buyers are public.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub deck: Vec<Instance>,
    pub discard: Vec<Instance>,
    pub workshop: Vec<Instance>,
    pub drafted: Vec<Instance>,
    pub wheel: ColorWheel,
    pub materials: Materials,
    pub buyers: Vec<Contract>,
    pub ducats: u32,
}

impl Player {
    pub fn score(&self) -> u32 {
        self.ducats + self.buyers.iter().map(|c| c.buyer.stars).sum::<u32>()
    }

    /// draw into the workshop, reshuffling the discard pile
    /// into the deck whenever the deck runs dry.
    pub fn draw(&mut self, n: usize, rng: &mut impl Rng) {
        for _ in 0..n {
            if self.deck.is_empty() {
                if self.discard.is_empty() {
                    break;
                }
                self.deck.append(&mut self.discard);
                self.deck.shuffle(rng);
            }
            if let Some(card) = self.deck.pop() {
                self.workshop.push(card);
            }
        }
    }

    pub fn affords(&self, contract: &Contract) -> bool {
        self.materials.get(contract.buyer.material) > 0 && self.wheel.affords(&contract.buyer.cost)
    }

    pub fn tertiaries(&self) -> Vec<Color> {
        self.wheel.owned().filter(Color::is_tertiary).collect()
    }

    /// remove a card from the workshop by id
    pub fn take_workshop(&mut self, id: crate::CardId) -> Instance {
        let index = self
            .workshop
            .iter()
            .position(|c| c.id == id)
            .unwrap_or_else(|| panic!("card {} not in workshop", id));
        self.workshop.remove(index)
    }

    /// remove a card from the drafted row by id
    pub fn take_drafted(&mut self, id: crate::CardId) -> Instance {
        let index = self
            .drafted
            .iter()
            .position(|c| c.id == id)
            .unwrap_or_else(|| panic!("card {} not drafted", id));
        self.drafted.remove(index)
    }
}
