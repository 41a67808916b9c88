//! Colori behind the [`crate::search::Game`] abstraction.
mod choice;
mod determinize;
mod enumerate;
mod game;
mod rollout;
mod seen;

pub use choice::*;
pub use determinize::*;
pub use enumerate::*;
pub use game::*;
pub use rollout::*;
pub use seen::*;

#[cfg(test)]
mod tests;
