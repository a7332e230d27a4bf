//! Leaderboard ranking and integrity checks.

use super::errors::LeaderboardIssue;
use super::models::{PlayerStats, TournamentLeaderboard};
use super::stats::aggregate_player_stats;
use crate::schedule::models::Round;
use crate::validation::ValidationResult;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Result of a leaderboard integrity check
pub type LeaderboardValidation = ValidationResult<(), LeaderboardIssue>;

/// Leaderboard order: points desc, matches played desc, name asc
fn standing_order(a: &PlayerStats, b: &PlayerStats) -> Ordering {
    b.total_points
        .cmp(&a.total_points)
        .then_with(|| b.matches_played.cmp(&a.matches_played))
        .then_with(|| a.player.cmp(&b.player))
}

fn is_tied(a: &PlayerStats, b: &PlayerStats) -> bool {
    a.total_points == b.total_points && a.matches_played == b.matches_played
}

/// Sort stats into leaderboard order and assign ranks.
///
/// Tied entries (same points and matches played) share the rank of the
/// first of them; the next distinct entry is ranked by its position, so a
/// two-way tie for first is followed by third.
pub fn rank_players(mut stats: Vec<PlayerStats>) -> Vec<PlayerStats> {
    stats.sort_by(standing_order);
    for position in 0..stats.len() {
        let rank = if position > 0 && is_tied(&stats[position - 1], &stats[position]) {
            stats[position - 1].rank
        } else {
            position as u32 + 1
        };
        stats[position].rank = rank;
    }
    stats
}

/// Build the current leaderboard, stamped with the current time
pub fn build_leaderboard(rounds: &[Round]) -> TournamentLeaderboard {
    build_leaderboard_at(rounds, Utc::now())
}

/// Build the leaderboard with an explicit timestamp
pub fn build_leaderboard_at(rounds: &[Round], now: DateTime<Utc>) -> TournamentLeaderboard {
    let total_matches = rounds.iter().map(|round| round.matches.len()).sum();
    let completed_matches = rounds
        .iter()
        .flat_map(|round| &round.matches)
        .filter(|m| m.is_completed())
        .count();

    TournamentLeaderboard {
        players: rank_players(aggregate_player_stats(rounds)),
        last_updated: now,
        is_complete: total_matches > 0 && completed_matches == total_matches,
        total_matches,
        completed_matches,
    }
}

/// Check a leaderboard against the rounds it was derived from, reporting
/// every membership and ordering violation.
pub fn check_leaderboard_integrity(
    leaderboard: &TournamentLeaderboard,
    rounds: &[Round],
) -> LeaderboardValidation {
    let mut errors = Vec::new();

    let scheduled: BTreeSet<&str> = rounds
        .iter()
        .flat_map(|round| round.players())
        .map(String::as_str)
        .collect();
    let listed: BTreeSet<&str> = leaderboard
        .players
        .iter()
        .map(|stats| stats.player.as_str())
        .collect();

    for player in scheduled.difference(&listed) {
        errors.push(LeaderboardIssue::MissingFromLeaderboard {
            player: player.to_string(),
        });
    }
    for player in listed.difference(&scheduled) {
        errors.push(LeaderboardIssue::NotInRounds {
            player: player.to_string(),
        });
    }

    for (index, pair) in leaderboard.players.windows(2).enumerate() {
        let (previous, current) = (&pair[0], &pair[1]);
        if standing_order(previous, current) == Ordering::Greater {
            errors.push(LeaderboardIssue::OutOfOrder {
                position: index + 2,
                player: current.player.clone(),
            });
        }
    }

    if !errors.is_empty() {
        log::warn!(
            "Leaderboard integrity check failed with {} issue(s)",
            errors.len()
        );
    }

    ValidationResult::from_issues((), errors, Vec::new())
}

/// Whether a leaderboard is consistent with its source rounds
pub fn validate_leaderboard_integrity(leaderboard: &TournamentLeaderboard, rounds: &[Round]) -> bool {
    check_leaderboard_integrity(leaderboard, rounds).is_valid
}
