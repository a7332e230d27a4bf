//! Tournament configuration models.

use serde::{Deserialize, Serialize};

/// Four players share a court: two teams of two.
pub const PLAYERS_PER_MATCH: usize = 4;

/// Points played per match unless configured otherwise.
pub const DEFAULT_POINTS_PER_MATCH: u32 = 16;

/// The player count the format is tuned for.
pub const TUNED_PLAYER_COUNT: usize = 8;

/// Fixed estimate used by progress tracking (minutes per match).
pub const AVERAGE_MINUTES_PER_MATCH: u32 = 13;

/// Tournament parameters supplied by the organizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfiguration {
    /// Number of registered players
    pub players_count: usize,

    /// Number of courts available for every round
    pub courts_count: usize,

    /// Total points played in one match (both teams combined)
    pub points_per_match: u32,

    /// Expected duration of one match in minutes
    pub game_duration_minutes: u32,
}

impl Default for TournamentConfiguration {
    fn default() -> Self {
        Self {
            players_count: TUNED_PLAYER_COUNT,
            courts_count: 2,
            points_per_match: DEFAULT_POINTS_PER_MATCH,
            game_duration_minutes: AVERAGE_MINUTES_PER_MATCH,
        }
    }
}

impl TournamentConfiguration {
    /// Create a configuration with default points and duration
    pub fn new(players_count: usize, courts_count: usize) -> Self {
        Self {
            players_count,
            courts_count,
            ..Default::default()
        }
    }

    /// Override the points played per match
    pub fn with_points(mut self, points_per_match: u32) -> Self {
        self.points_per_match = points_per_match;
        self
    }

    /// Override the expected match duration
    pub fn with_duration(mut self, game_duration_minutes: u32) -> Self {
        self.game_duration_minutes = game_duration_minutes;
        self
    }

    /// Courts that can actually host a match in every round
    pub fn usable_courts(&self) -> usize {
        self.courts_count.min(self.players_count / PLAYERS_PER_MATCH)
    }
}

/// Inclusive bounds accepted by the configuration validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigLimits {
    pub min_players: usize,
    pub max_players: usize,
    pub max_courts: usize,
    pub min_points: u32,
    pub max_points: u32,
    pub min_duration_minutes: u32,
    pub max_duration_minutes: u32,
}

impl Default for ConfigLimits {
    fn default() -> Self {
        Self {
            min_players: 4,
            max_players: 16,
            max_courts: 4,
            min_points: 8,
            max_points: 32,
            min_duration_minutes: 5,
            max_duration_minutes: 60,
        }
    }
}
