//! American Format schedule generation and validation.
//!
//! This module provides:
//! - Match, round, and partnership models
//! - Pluggable pairing strategies (round-robin and greedy)
//! - The schedule generator with a built-in fairness self-check
//! - A validator for generated or externally supplied schedules
//! - Optional roster shuffling before generation
//!
//! ## Example
//!
//! ```
//! use american_format::schedule::generate;
//!
//! let players = ["Ann", "Bob", "Cid", "Dee", "Eve", "Fay", "Gus", "Hal"];
//! let result = generate(&players, 2, 16);
//!
//! assert!(result.validation.is_valid);
//! assert_eq!(result.rounds.len(), 7);
//! ```

pub mod errors;
pub mod generator;
pub mod models;
pub mod seating;
pub mod strategy;
pub mod validator;

pub use errors::ScheduleIssue;
pub use generator::{
    AmericanFormatResult, build_rounds, generate, generate_default, generate_with_strategy,
};
pub use models::{
    Match, MatchStatus, PartnershipTracking, Player, PlayerPartnerships, Round, Side, Team,
};
pub use seating::PlayerShuffler;
pub use strategy::{
    GreedyStrategy, Pairing, PairingHistory, PairingStrategy, RoundRobinStrategy, Strategy,
};
pub use validator::{ScheduleValidation, validate_schedule};
