use crate::Position;
use crate::Utility;
use std::fmt::Debug;
use std::hash::Hash;

/// Where a game stands from the search's point of view.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    /// the given seat must choose next
    Awaiting(Position),
    /// final utilities, one per seat, normalized to sum to at most one
    Terminated(Vec<Utility>),
}

/// The contract between the ISMCTS engine and a concrete ruleset.
///
/// The engine never inspects a game beyond these capabilities, so any
/// imperfect-information game can be searched by implementing them.
/// Determinizations are independent values: mutating one never leaks
/// into the game it was sampled from.
///
/// Choices are compared by [`Game::Key`], never by value, so the same
/// decision reached through different determinizations shares a child.
pub trait Game: Sized {
    /// A decision a player can make.
    type Choice: Clone + Debug;
    /// Stable identity of a choice. Distinct legal choices at one
    /// decision point have distinct keys.
    type Key: Clone + Eq + Hash + Ord + Debug;

    /// Every legal choice for the player to act. Pure.
    fn choices(&self) -> Vec<Self::Choice>;
    /// Advance the game by one choice, including any forced follow-up.
    fn apply(&mut self, choice: &Self::Choice);
    fn status(&self) -> Status;
    /// Sample a concrete state consistent with everything `perspective`
    /// can observe. Cards that seat holds stay exactly where they are.
    fn determinize(&mut self, perspective: Position) -> Self;
    /// Whether the choice is legal here. Must agree with
    /// membership of its key among [`Game::choices`].
    fn available(&self, choice: &Self::Choice) -> bool;
    /// A cheap, biased-random legal choice for playouts.
    fn rollout(&mut self) -> Self::Choice;
    fn key(&self, choice: &Self::Choice) -> Self::Key;
}
