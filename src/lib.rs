//! # Monopoly Spot Frequency Simulator
//!
//! Monte Carlo estimate of how often each of the 40 spots of a Monopoly board
//! is landed on.
//!
//! ## Features
//!
//! - **Game Engine**: single-player turn resolution with jail, doubles and
//!   community chest / chance cards
//! - **Simulation**: many independent games from identical start conditions
//! - **Ranking**: visit counts per spot, sorted by frequency
//!
//! ## Usage
//!
//! ```rust
//! use monopoly_sim::{Simulation, Visualization};
//!
//! let mut simulation = Simulation::new(100, 50);
//! simulation.run();
//! if let Ok(Visualization::Ranked(ranking)) = simulation.visualize(true, true) {
//!     assert_eq!(ranking.total(), 100 * 50);
//! }
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Board, cards, dice and the single-game state machine
pub mod game;

/// Multi-game runs and visit aggregation
pub mod simulation;

/// Logger bootstrap
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use game::board::{Spot, SpotKind, BOARD_SIZE};
pub use game::card::Card;
pub use game::closest::closest;
pub use game::create_deck::{CHANCE, COMMUNITY_CHEST};
pub use game::deck::Deck;
pub use game::dice::dice_roll;
pub use game::game_state::StartConditions;
pub use game::play_game::Game;

pub use simulation::config::SimulationConfig;
pub use simulation::simulation::Simulation;
pub use simulation::visualize::{SpotVisits, VisitRanking, Visualization};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the simulator
#[derive(Debug, thiserror::Error)]
pub enum MonopolyError {
    #[error("Spot {0} is not on the board (expected 0..40)")]
    InvalidSpot(usize),

    #[error("No simulation has been run yet")]
    NotRun,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MonopolyError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
