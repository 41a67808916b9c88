//! Serializable boundary between orchestrators and the search.
mod advisor;
mod request;

pub use advisor::*;
pub use request::*;
