//! Self-play with structured game logs.
mod arena;
mod record;

pub use arena::*;
pub use record::*;
