//! Match score validation and submission.

use super::errors::{ResultsError, ResultsResult, ScoreIssue};
use super::models::{MatchScore, ScoreSubmission};
use crate::config::DEFAULT_POINTS_PER_MATCH;
use crate::schedule::models::Round;

/// Validate a score against the default 16 points per match
pub fn validate_default_score(team1_score: f64, team2_score: f64) -> MatchScore {
    validate_score(team1_score, team2_score, DEFAULT_POINTS_PER_MATCH)
}

/// Validate one match score.
///
/// Both scores must be non-negative whole numbers, each at most
/// `max_points`, and together exactly `max_points`. All failures are
/// collected.
pub fn validate_score(team1_score: f64, team2_score: f64, max_points: u32) -> MatchScore {
    let mut errors = Vec::new();
    let max = f64::from(max_points);

    for (team, value) in [(1, team1_score), (2, team2_score)] {
        if !value.is_finite() || value.fract() != 0.0 {
            errors.push(ScoreIssue::NotInteger { team, value });
        }
        if value < 0.0 {
            errors.push(ScoreIssue::Negative { team, value });
        }
    }

    let total = team1_score + team2_score;
    if total != max {
        errors.push(ScoreIssue::WrongTotal {
            total,
            expected: max_points,
        });
    }

    for (team, value) in [(1, team1_score), (2, team2_score)] {
        if value > max {
            errors.push(ScoreIssue::ExceedsMaximum {
                team,
                value,
                max: max_points,
            });
        }
    }

    MatchScore {
        team1_score,
        team2_score,
        total_points: total,
        is_valid: errors.is_empty(),
        validation_errors: errors,
    }
}

/// Record a submitted score.
///
/// Returns a new schedule in which the submitted game is completed with the
/// validated score; every other match is left untouched. Resubmitting a
/// completed game replaces its score.
///
/// # Errors
///
/// - [`ResultsError::GameNotFound`] if no match has the game number
/// - [`ResultsError::InvalidScore`] if the score fails validation
pub fn apply_score(
    rounds: &[Round],
    submission: &ScoreSubmission,
    max_points: u32,
) -> ResultsResult<Vec<Round>> {
    let exists = rounds
        .iter()
        .flat_map(|round| &round.matches)
        .any(|m| m.game_number == submission.game_number);
    if !exists {
        return Err(ResultsError::GameNotFound(submission.game_number));
    }

    let score = validate_score(submission.team1_score, submission.team2_score, max_points);
    if !score.is_valid {
        return Err(ResultsError::InvalidScore {
            game_number: submission.game_number,
            issues: score.validation_errors,
        });
    }

    log::debug!(
        "Recording {}-{} for game {}",
        score.team1_score,
        score.team2_score,
        submission.game_number
    );

    Ok(rounds
        .iter()
        .map(|round| Round {
            round: round.round,
            matches: round
                .matches
                .iter()
                .map(|m| {
                    if m.game_number == submission.game_number {
                        m.with_score(score.clone())
                    } else {
                        m.clone()
                    }
                })
                .collect(),
        })
        .collect())
}
