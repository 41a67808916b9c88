//! Generic information-set Monte Carlo tree search.
mod data;
mod game;
mod search;
mod tree;

pub use data::*;
pub use game::*;
pub use search::*;
pub use tree::*;
