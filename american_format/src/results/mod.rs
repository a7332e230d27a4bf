//! Match results, player statistics, leaderboards, and progress.
//!
//! This module provides:
//! - Score validation and score submission against a schedule
//! - Per-player statistics aggregation
//! - Leaderboard ranking with shared ranks for ties
//! - Leaderboard integrity checks
//! - Progress and remaining-time estimates
//!
//! Everything is recomputed from the rounds on each call; nothing is cached.
//!
//! ## Example
//!
//! ```
//! use american_format::results::{ScoreSubmission, apply_score, build_leaderboard};
//! use american_format::schedule::generate;
//!
//! let players = ["Ann", "Bob", "Cid", "Dee"];
//! let schedule = generate(&players, 1, 16);
//!
//! let rounds = apply_score(&schedule.rounds, &ScoreSubmission::new(1, 10.0, 6.0), 16)?;
//! let leaderboard = build_leaderboard(&rounds);
//!
//! assert_eq!(leaderboard.completed_matches, 1);
//! assert_eq!(leaderboard.players[0].total_points, 10);
//! # Ok::<(), american_format::results::ResultsError>(())
//! ```

pub mod errors;
pub mod leaderboard;
pub mod models;
pub mod progress;
pub mod score;
pub mod stats;

pub use errors::{LeaderboardIssue, ResultsError, ResultsResult, ScoreIssue};
pub use leaderboard::{
    LeaderboardValidation, build_leaderboard, build_leaderboard_at, check_leaderboard_integrity,
    rank_players, validate_leaderboard_integrity,
};
pub use models::{MatchScore, PlayerStats, ProgressStats, ScoreSubmission, TournamentLeaderboard};
pub use progress::{calculate_progress, calculate_progress_with};
pub use score::{apply_score, validate_default_score, validate_score};
pub use stats::aggregate_player_stats;
