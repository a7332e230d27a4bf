//! Configuration issue types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problems found while validating a tournament configuration or roster.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ConfigIssue {
    /// Player count outside the accepted range
    #[error("Player count {count} must be between {min} and {max}")]
    PlayersOutOfRange { count: usize, min: usize, max: usize },

    /// Player count cannot be split into groups of four
    #[error("Player count {count} must be divisible by 4")]
    PlayersNotDivisibleByFour { count: usize },

    /// Court count outside the accepted range
    #[error("Court count {count} must be between 1 and {max}")]
    CourtsOutOfRange { count: usize, max: usize },

    /// Some players would sit out every round
    #[error("{courts} court(s) cannot host {players} players at once, need {needed}")]
    NotEnoughCourts {
        courts: usize,
        players: usize,
        needed: usize,
    },

    /// Points per match outside the accepted range
    #[error("Points per match {points} must be between {min} and {max}")]
    PointsOutOfRange { points: u32, min: u32, max: u32 },

    /// Match duration outside the accepted range
    #[error("Game duration of {minutes} minutes must be between {min} and {max}")]
    DurationOutOfRange { minutes: u32, min: u32, max: u32 },

    /// Player name is empty after trimming
    #[error("Player name at position {index} is empty")]
    EmptyPlayerName { index: usize },

    /// Same player registered twice (case-insensitive)
    #[error("Duplicate player name: {name}")]
    DuplicatePlayer { name: String },

    /// Warning: courts that will never be used
    #[error("Only {usable} of {courts} courts will be used")]
    UnusedCourts { courts: usize, usable: usize },

    /// Warning: the format is tuned for eight players
    #[error("American Format is optimized for 8 players, got {count}")]
    UntunedPlayerCount { count: usize },
}
