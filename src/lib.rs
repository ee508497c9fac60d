//! Five-card poker hand comparison.
//!
//! - [`cards`]: ranks, suits, cards, hands and their classification
//! - [`play`]: heads-up showdown from a ten-card line, and batch tallies
//! - [`lcm`]: least common multiple of a range
pub mod cards;
pub mod error;
pub mod lcm;
pub mod play;

pub use error::Error;

use cards::ranking::Ranking;

// ============================================================================
// CONSTANTS
// ============================================================================
/// Cards in one hand.
pub const HAND_SIZE: usize = 5;
/// Card tokens on one input line, player 1's hand then player 2's.
pub const LINE_SIZE: usize = 2 * HAND_SIZE;
/// Showdowns where both hands rank above this are logged at debug level.
pub const DIAGNOSTIC_THRESHOLD: Ranking = Ranking::TwoPair;
/// Upper bound of the range used when none is given.
pub const LCM_DEFAULT_UPTO: u64 = 20;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// LOGGING
// ============================================================================
/// Initialize terminal logging, plus a file logger at debug level
/// when a path is given.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter, file: Option<&std::path::Path>) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = Vec::new();
    loggers.push(simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ));
    if let Some(path) = file {
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config.clone(),
            std::fs::File::create(path)?,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}
