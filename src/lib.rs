//! Klondike solitaire rules engine.
//!
//! Cards and piles, the placement rules, scoring, deck recycling,
//! win detection and snapshot undo. The engine is a library first;
//! the `cli` feature adds a terminal front end.
pub mod cards;
pub mod piles;
pub mod play;
pub mod rules;

#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Running score. Never negative.
pub type Points = u32;
/// Signed change in score caused by a single event.
pub type Delta = i32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for tests and benchmarks.
pub trait Arbitrary {
    fn random() -> Self;
}

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Cards in a standard deck.
pub const N_CARDS: usize = 52;
/// Cards per suit, and the height of a full foundation.
pub const N_RANKS: usize = 13;
/// Tableau columns.
pub const N_COLUMNS: usize = 7;
/// Foundations, one per suit.
pub const N_FOUNDATIONS: usize = 4;
/// Cards turned from the stock per tap, unless configured otherwise.
pub const DRAW: usize = 3;
/// Recycles of the waste that cost nothing.
pub const FREE_PASSES: usize = 4;
/// Seconds of play between time penalties.
pub const PENALTY_INTERVAL: u64 = 10;

/// Terminal logging on stderr, so it never tangles with the board on stdout.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term]).expect("initialize logger");
}
