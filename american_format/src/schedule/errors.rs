//! Schedule issue types.

use crate::config::ConfigIssue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problems found while generating or validating a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "code", content = "details", rename_all = "snake_case")]
pub enum ScheduleIssue {
    /// Configuration or roster rejected before generation
    #[error(transparent)]
    Config(#[from] ConfigIssue),

    /// A registered player does not play in a round
    #[error("Round {round}: player {player} is missing")]
    MissingPlayer { round: u32, player: String },

    /// A player is scheduled more than once in a round
    #[error("Round {round}: player {player} is scheduled more than once")]
    DuplicatePlayer { round: u32, player: String },

    /// A round names someone who is not registered
    #[error("Round {round}: player {player} is not registered")]
    UnknownPlayer { round: u32, player: String },

    /// The four players of a match are not distinct
    #[error("Round {round}, game {game_number}: match players are not distinct")]
    MatchPlayersNotDistinct { round: u32, game_number: u32 },

    /// Two players are teammates for the second time
    #[error("Round {round}: {first} and {second} have already been partners")]
    RepeatedPartnership {
        round: u32,
        first: String,
        second: String,
    },

    /// Warning: match counts differ by more than one between players
    #[error("Uneven schedule: players play between {min} and {max} matches")]
    UnevenMatchCount { min: usize, max: usize },

    /// Warning: the requested strategy repeated a partnership and the
    /// round-robin strategy was used instead
    #[error("{strategy} pairing repeated a partnership, used round-robin pairing instead")]
    FellBackToRoundRobin { strategy: String },
}
