//! Tournament progress.

use super::models::ProgressStats;
use crate::config::AVERAGE_MINUTES_PER_MATCH;
use crate::schedule::models::Round;

/// Progress of a schedule, estimating 13 minutes per remaining match
pub fn calculate_progress(rounds: &[Round]) -> ProgressStats {
    calculate_progress_with(rounds, AVERAGE_MINUTES_PER_MATCH)
}

/// Progress of a schedule with a custom minutes-per-match estimate.
///
/// A match counts as completed only when it carries a valid score.
pub fn calculate_progress_with(rounds: &[Round], minutes_per_match: u32) -> ProgressStats {
    let total_matches: usize = rounds.iter().map(|round| round.matches.len()).sum();
    let completed_matches = rounds
        .iter()
        .flat_map(|round| &round.matches)
        .filter(|m| m.is_completed())
        .count();

    let progress_percentage = if total_matches == 0 {
        0.0
    } else {
        100.0 * completed_matches as f64 / total_matches as f64
    };

    let current_round = rounds
        .iter()
        .find(|round| round.matches.iter().any(|m| !m.is_completed()))
        .map(|round| round.round);

    let remaining = u32::try_from(total_matches - completed_matches).unwrap_or(u32::MAX);

    ProgressStats {
        total_matches,
        completed_matches,
        progress_percentage,
        estimated_time_remaining: remaining.saturating_mul(minutes_per_match),
        current_round,
    }
}
