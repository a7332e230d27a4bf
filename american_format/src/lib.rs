//! # American Format
//!
//! Pairing scheduler and results engine for American Format doubles
//! tournaments: four players share a court, partners and opponents rotate
//! every round, and one cumulative point total ranks every player.
//!
//! The crate is a pure core. It performs no I/O and holds no shared state;
//! every operation takes plain values and returns new plain values that the
//! caller can serialize with `serde`.
//!
//! ## Architecture
//!
//! Data flows one way:
//!
//! - **Configuration**: parameters and roster are validated up front
//! - **Schedule**: a pairing strategy produces rounds, which are re-checked
//!   against the fairness rules before being returned
//! - **Results**: scores are validated and applied, folded into player
//!   statistics, ranked into a leaderboard, and checked for integrity
//! - **Progress**: completion and remaining time are derived from the rounds
//!
//! ## Core Modules
//!
//! - [`config`]: Tournament parameters, limits, and validation
//! - [`schedule`]: Match models, pairing strategies, generation, validation
//! - [`results`]: Scores, statistics, leaderboards, and progress
//!
//! ## Example
//!
//! ```
//! use american_format::{apply_score, build_leaderboard, calculate_progress, generate};
//! use american_format::results::ScoreSubmission;
//!
//! let players = ["Ann", "Bob", "Cid", "Dee", "Eve", "Fay", "Gus", "Hal"];
//! let schedule = generate(&players, 2, 16);
//! assert!(schedule.validation.is_valid);
//!
//! let rounds = apply_score(&schedule.rounds, &ScoreSubmission::new(1, 9.0, 7.0), 16)?;
//! let leaderboard = build_leaderboard(&rounds);
//! assert_eq!(leaderboard.players[0].rank, 1);
//!
//! let progress = calculate_progress(&rounds);
//! assert_eq!(progress.completed_matches, 1);
//! assert_eq!(progress.estimated_time_remaining, 13 * 13);
//! # Ok::<(), american_format::results::ResultsError>(())
//! ```

/// Tournament configuration and roster validation.
pub mod config;

/// Schedule models, generation, and validation.
pub mod schedule;

/// Scores, statistics, leaderboards, and progress.
pub mod results;

/// Collect-all validation results.
pub mod validation;

pub use config::{TournamentConfiguration, validate_configuration, validate_players};
pub use results::{
    apply_score, build_leaderboard, calculate_progress, validate_leaderboard_integrity,
    validate_score,
};
pub use schedule::{AmericanFormatResult, Match, MatchStatus, Round, generate, validate_schedule};
pub use validation::ValidationResult;
