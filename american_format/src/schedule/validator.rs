//! Fairness checks for generated or externally supplied schedules.

use super::errors::ScheduleIssue;
use super::models::Round;
use crate::validation::ValidationResult;
use std::collections::{HashMap, HashSet};

/// Result of validating a schedule
pub type ScheduleValidation = ValidationResult<(), ScheduleIssue>;

fn partnership_key<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Validate `rounds` against the full roster `players`.
///
/// Errors:
/// - a round that does not contain every player exactly once
/// - a match whose four players are not distinct
/// - a partnership that occurs a second time
///
/// Warning: the most- and least-played players differ by more than one match.
pub fn validate_schedule<S: AsRef<str>>(rounds: &[Round], players: &[S]) -> ScheduleValidation {
    let roster: Vec<&str> = players.iter().map(AsRef::as_ref).collect();
    let registered: HashSet<&str> = roster.iter().copied().collect();

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut partnerships: HashSet<(&str, &str)> = HashSet::new();
    let mut match_counts: HashMap<&str, usize> = roster.iter().map(|&p| (p, 0)).collect();

    for round in rounds {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut reported: HashSet<&str> = HashSet::new();

        for m in &round.matches {
            let names = m.players();
            let distinct: HashSet<&str> = names.iter().map(|p| p.as_str()).collect();
            if distinct.len() != names.len() {
                errors.push(ScheduleIssue::MatchPlayersNotDistinct {
                    round: round.round,
                    game_number: m.game_number,
                });
            }

            for player in names {
                let player = player.as_str();
                let count = seen.entry(player).or_insert(0);
                *count += 1;
                if *count > 1 && reported.insert(player) {
                    errors.push(ScheduleIssue::DuplicatePlayer {
                        round: round.round,
                        player: player.to_string(),
                    });
                }
                if !registered.contains(player) && *count == 1 {
                    errors.push(ScheduleIssue::UnknownPlayer {
                        round: round.round,
                        player: player.to_string(),
                    });
                }
                *match_counts.entry(player).or_insert(0) += 1;
            }

            for team in [&m.team1, &m.team2] {
                let key = partnership_key(&team.0, &team.1);
                if !partnerships.insert(key) {
                    errors.push(ScheduleIssue::RepeatedPartnership {
                        round: round.round,
                        first: key.0.to_string(),
                        second: key.1.to_string(),
                    });
                }
            }
        }

        for player in &roster {
            if !seen.contains_key(player) {
                errors.push(ScheduleIssue::MissingPlayer {
                    round: round.round,
                    player: player.to_string(),
                });
            }
        }
    }

    let min = match_counts.values().copied().min().unwrap_or(0);
    let max = match_counts.values().copied().max().unwrap_or(0);
    if max - min > 1 {
        warnings.push(ScheduleIssue::UnevenMatchCount { min, max });
    }

    if !errors.is_empty() {
        log::debug!("Schedule validation found {} error(s)", errors.len());
    }

    ValidationResult::from_issues((), errors, warnings)
}
