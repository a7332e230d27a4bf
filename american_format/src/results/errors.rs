//! Results error and issue types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problems with a submitted match score
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "code", content = "details", rename_all = "snake_case")]
pub enum ScoreIssue {
    /// Score has a fractional part (or is not a finite number)
    #[error("Team {team} score {value} must be a whole number")]
    NotInteger { team: u8, value: f64 },

    /// Score below zero
    #[error("Team {team} score {value} cannot be negative")]
    Negative { team: u8, value: f64 },

    /// Scores do not add up to the points played per match
    #[error("Scores must add up to {expected}, got {total}")]
    WrongTotal { total: f64, expected: u32 },

    /// One score alone is above the points played per match
    #[error("Team {team} score {value} exceeds the maximum of {max}")]
    ExceedsMaximum { team: u8, value: f64, max: u32 },
}

/// Inconsistencies between a leaderboard and its source rounds
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "code", content = "details", rename_all = "snake_case")]
pub enum LeaderboardIssue {
    /// A scheduled player has no leaderboard entry
    #[error("Player {player} is scheduled but missing from the leaderboard")]
    MissingFromLeaderboard { player: String },

    /// A leaderboard entry names someone who is not scheduled
    #[error("Player {player} is on the leaderboard but not in any round")]
    NotInRounds { player: String },

    /// Entry sorts before its predecessor
    #[error("Entry {position} ({player}) is out of order")]
    OutOfOrder { position: usize, player: String },
}

/// Score submission errors
#[derive(Debug, Error)]
pub enum ResultsError {
    /// No match carries the submitted game number
    #[error("Game not found: {0}")]
    GameNotFound(u32),

    /// Submitted score failed validation
    #[error("Invalid score for game {game_number}: {}", describe(.issues))]
    InvalidScore {
        game_number: u32,
        issues: Vec<ScoreIssue>,
    },
}

fn describe(issues: &[ScoreIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for results operations
pub type ResultsResult<T> = Result<T, ResultsError>;
