//! Information-set Monte Carlo tree search for Colori.
//!
//! The crate is layered leaf-first:
//! - [`colori`] the rules engine (colors, cards, buyers, phases, scoring)
//! - [`search`] a generic ISMCTS engine over the [`search::Game`] trait
//! - [`adapter`] the [`adapter::ColoriGame`] bridge, including determinization
//! - [`advisor`] the serializable request boundary used by orchestrators
//! - [`arena`] self-play harness with structured game logs
pub mod adapter;
pub mod advisor;
pub mod arena;
pub mod colori;
pub mod search;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Seat index around the table, 0-based.
pub type Position = usize;
/// Normalized scores, rewards and UCB values.
pub type Utility = f32;
/// Rollout policy weights.
pub type Probability = f32;
/// Unique identity of a physical card or buyer within one game.
pub type CardId = u32;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Cards dealt to each player at the start of a draft.
pub const HAND_SIZE: usize = 5;
/// Picks each player makes before leftover draft cards are destroyed.
pub const DRAFT_PICKS: usize = 4;
/// Cards drawn into the workshop during the draw phase.
pub const DRAW_SIZE: usize = 5;
/// Buyers face-up on the display.
pub const BUYER_DISPLAY: usize = 6;
/// Copies of each dye in the draft deck.
pub const DYE_COPIES: usize = 4;
/// Copies of each action card in the draft deck.
pub const ACTION_COPIES: usize = 3;
/// Score at which the game ends after the current round.
pub const WINNING_SCORE: u32 = 15;
/// Last round played before the game is forced to end.
pub const MAX_ROUNDS: u32 = 10;

// ============================================================================
// ISMCTS PARAMETERS
// ============================================================================
/// UCB1 exploration constant (√2).
pub const EXPLORATION: Utility = std::f32::consts::SQRT_2;
/// Rollouts that have not terminated after this many steps score nothing.
pub const MAX_ROLLOUT_STEPS: usize = 1000;
/// Minimum lookahead horizon used by self-play, in rounds.
pub const MIN_HORIZON: u32 = 8;
/// Rounds of lookahead past the current round used by self-play.
pub const HORIZON_LOOKAHEAD: u32 = 2;

// ============================================================================
// ROLLOUT POLICY
// Biased random playout. Destroying drafted cards is how value is made,
// so idle turns prefer it over ending the turn.
// ============================================================================
/// Chance an idle player destroys a drafted card rather than ending the turn.
pub const ROLLOUT_DESTROY: Probability = 0.8;
/// Chance a workshop prompt is skipped outright.
pub const ROLLOUT_SKIP_WORKSHOP: Probability = 0.2;
/// Chance an available action card is workshopped instead of materials.
pub const ROLLOUT_ACTION_WORKSHOP: Probability = 0.5;
/// Chance a mix prompt is skipped.
pub const ROLLOUT_SKIP_MIX: Probability = 0.5;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
