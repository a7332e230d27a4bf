//! Score, statistics, leaderboard, and progress models.

use super::errors::ScoreIssue;
use crate::schedule::models::{Player, Side};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated match score.
///
/// Scores are carried as JSON numbers so malformed submissions (fractions,
/// negatives) can be represented and reported rather than rejected at
/// deserialization time. Only scores with `is_valid` count toward results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub team1_score: f64,
    pub team2_score: f64,
    pub total_points: f64,
    pub is_valid: bool,
    pub validation_errors: Vec<ScoreIssue>,
}

impl MatchScore {
    /// Whole-number points of both teams, if the score is valid.
    ///
    /// The stored values are re-checked, so a deserialized score flagged
    /// valid with fractional, negative, or inconsistent numbers yields `None`.
    pub fn points(&self) -> Option<(u32, u32)> {
        if !self.is_valid {
            return None;
        }
        let team1 = whole_points(self.team1_score)?;
        let team2 = whole_points(self.team2_score)?;
        let total = whole_points(self.total_points)?;
        (u64::from(team1) + u64::from(team2) == u64::from(total)).then_some((team1, team2))
    }

    /// The side with strictly more points. `None` for a tie or an invalid
    /// score.
    pub fn winner(&self) -> Option<Side> {
        let (team1, team2) = self.points()?;
        match team1.cmp(&team2) {
            std::cmp::Ordering::Greater => Some(Side::Team1),
            std::cmp::Ordering::Less => Some(Side::Team2),
            std::cmp::Ordering::Equal => None,
        }
    }
}

fn whole_points(value: f64) -> Option<u32> {
    let whole = value.is_finite() && value.fract() == 0.0;
    (whole && (0.0..=f64::from(u32::MAX)).contains(&value)).then_some(value as u32)
}

/// A score reported for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub game_number: u32,
    pub team1_score: f64,
    pub team2_score: f64,
}

impl ScoreSubmission {
    pub fn new(game_number: u32, team1_score: f64, team2_score: f64) -> Self {
        Self {
            game_number,
            team1_score,
            team2_score,
        }
    }
}

/// Cumulative results of one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player: Player,
    pub matches_played: u32,
    pub wins: u32,
    pub losses: u32,
    /// Ranking score; equal to `points_for`
    pub total_points: u32,
    pub points_for: u32,
    pub points_against: u32,
    pub win_percentage: f64,
    pub average_score: f64,
    /// 1-based rank; 0 until ranked
    pub rank: u32,
}

impl PlayerStats {
    /// Empty stats for a player who has not played
    pub fn new(player: impl Into<Player>) -> Self {
        Self {
            player: player.into(),
            matches_played: 0,
            wins: 0,
            losses: 0,
            total_points: 0,
            points_for: 0,
            points_against: 0,
            win_percentage: 0.0,
            average_score: 0.0,
            rank: 0,
        }
    }

    /// Point difference
    pub fn point_differential(&self) -> i64 {
        i64::from(self.points_for) - i64::from(self.points_against)
    }
}

/// Ranked standings derived from a schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentLeaderboard {
    pub players: Vec<PlayerStats>,
    pub last_updated: DateTime<Utc>,
    /// Every scheduled match has a valid score
    pub is_complete: bool,
    pub total_matches: usize,
    pub completed_matches: usize,
}

impl TournamentLeaderboard {
    /// Entry of a given player
    pub fn get(&self, player: &str) -> Option<&PlayerStats> {
        self.players.iter().find(|stats| stats.player == player)
    }

    /// Entries sharing rank 1
    pub fn leaders(&self) -> impl Iterator<Item = &PlayerStats> {
        self.players.iter().filter(|stats| stats.rank == 1)
    }
}

/// How far a tournament has progressed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressStats {
    pub total_matches: usize,
    pub completed_matches: usize,
    pub progress_percentage: f64,
    /// Minutes left at the average match length
    pub estimated_time_remaining: u32,
    /// First round that still has an unscored match
    pub current_round: Option<u32>,
}
