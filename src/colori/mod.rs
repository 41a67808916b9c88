//! Colori rules engine.
//!
//! A deck-building game about dyes. Each round players draw into their
//! workshop, draft cards from rotating hands, then destroy drafted cards
//! to trigger abilities: storing materials and color pips, mixing colors
//! on their wheel, and selling to buyers for stars.
mod ability;
mod action;
mod buyer;
mod card;
mod color;
mod material;
mod phase;
mod player;
mod state;
mod wheel;

pub use ability::*;
pub use buyer::*;
pub use card::*;
pub use color::*;
pub use material::*;
pub use phase::*;
pub use player::*;
pub use state::*;
pub use wheel::*;
