//! Configuration and roster validation.

use super::errors::ConfigIssue;
use super::models::{ConfigLimits, PLAYERS_PER_MATCH, TUNED_PLAYER_COUNT, TournamentConfiguration};
use crate::validation::ValidationResult;
use std::collections::HashSet;

/// Result of validating a [`TournamentConfiguration`]
pub type ConfigValidation = ValidationResult<TournamentConfiguration, ConfigIssue>;

/// Validate a configuration against the default [`ConfigLimits`]
pub fn validate_configuration(config: &TournamentConfiguration) -> ConfigValidation {
    validate_configuration_with(config, &ConfigLimits::default())
}

/// Validate a configuration against custom limits.
///
/// Every violated rule is reported; nothing short-circuits.
pub fn validate_configuration_with(
    config: &TournamentConfiguration,
    limits: &ConfigLimits,
) -> ConfigValidation {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let players = config.players_count;
    if players < limits.min_players || players > limits.max_players {
        errors.push(ConfigIssue::PlayersOutOfRange {
            count: players,
            min: limits.min_players,
            max: limits.max_players,
        });
    }
    if players % PLAYERS_PER_MATCH != 0 {
        errors.push(ConfigIssue::PlayersNotDivisibleByFour { count: players });
    }

    let courts = config.courts_count;
    if courts < 1 || courts > limits.max_courts {
        errors.push(ConfigIssue::CourtsOutOfRange {
            count: courts,
            max: limits.max_courts,
        });
    }

    let needed = players.div_ceil(PLAYERS_PER_MATCH);
    if courts >= 1 && courts < needed {
        errors.push(ConfigIssue::NotEnoughCourts {
            courts,
            players,
            needed,
        });
    } else if needed > 0 && courts > needed {
        warnings.push(ConfigIssue::UnusedCourts {
            courts,
            usable: needed,
        });
    }

    let points = config.points_per_match;
    if points < limits.min_points || points > limits.max_points {
        errors.push(ConfigIssue::PointsOutOfRange {
            points,
            min: limits.min_points,
            max: limits.max_points,
        });
    }

    let minutes = config.game_duration_minutes;
    if minutes < limits.min_duration_minutes || minutes > limits.max_duration_minutes {
        errors.push(ConfigIssue::DurationOutOfRange {
            minutes,
            min: limits.min_duration_minutes,
            max: limits.max_duration_minutes,
        });
    }

    if players != TUNED_PLAYER_COUNT {
        warnings.push(ConfigIssue::UntunedPlayerCount { count: players });
    }

    ValidationResult::from_issues(config.clone(), errors, warnings)
}

/// Validate a roster of player names.
///
/// Names are trimmed; empty names and case-insensitive duplicates are
/// rejected. On success `data` holds the trimmed roster in input order.
pub fn validate_players<S: AsRef<str>>(names: &[S]) -> ValidationResult<Vec<String>, ConfigIssue> {
    let mut errors = Vec::new();
    let mut seen = HashSet::with_capacity(names.len());
    let mut roster = Vec::with_capacity(names.len());

    for (index, name) in names.iter().enumerate() {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            errors.push(ConfigIssue::EmptyPlayerName { index });
            continue;
        }
        if !seen.insert(trimmed.to_lowercase()) {
            errors.push(ConfigIssue::DuplicatePlayer {
                name: trimmed.to_string(),
            });
            continue;
        }
        roster.push(trimmed.to_string());
    }

    ValidationResult::from_issues(roster, errors, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid_without_warnings() {
        let result = validate_configuration(&TournamentConfiguration::default());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.data, Some(TournamentConfiguration::default()));
    }

    #[test]
    fn test_twelve_players_warns_about_tuning() {
        let result = validate_configuration(&TournamentConfiguration::new(12, 3));
        assert!(result.is_valid);
        assert_eq!(
            result.warnings,
            vec![ConfigIssue::UntunedPlayerCount { count: 12 }]
        );
    }

    #[test]
    fn test_all_errors_collected() {
        let config = TournamentConfiguration {
            players_count: 18,
            courts_count: 0,
            points_per_match: 4,
            game_duration_minutes: 90,
        };
        let result = validate_configuration(&config);
        assert!(!result.is_valid);
        assert!(result.data.is_none());
        assert!(result.errors.contains(&ConfigIssue::PlayersOutOfRange {
            count: 18,
            min: 4,
            max: 16
        }));
        assert!(
            result
                .errors
                .contains(&ConfigIssue::PlayersNotDivisibleByFour { count: 18 })
        );
        assert!(
            result
                .errors
                .contains(&ConfigIssue::CourtsOutOfRange { count: 0, max: 4 })
        );
        assert!(result.errors.contains(&ConfigIssue::PointsOutOfRange {
            points: 4,
            min: 8,
            max: 32
        }));
        assert!(result.errors.contains(&ConfigIssue::DurationOutOfRange {
            minutes: 90,
            min: 5,
            max: 60
        }));
        assert_eq!(result.errors.len(), 5);
    }

    #[test]
    fn test_not_enough_courts() {
        let result = validate_configuration(&TournamentConfiguration::new(8, 1));
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![ConfigIssue::NotEnoughCourts {
                courts: 1,
                players: 8,
                needed: 2
            }]
        );
    }

    #[test]
    fn test_extra_courts_warn() {
        let result = validate_configuration(&TournamentConfiguration::new(8, 3));
        assert!(result.is_valid);
        assert_eq!(
            result.warnings,
            vec![ConfigIssue::UnusedCourts {
                courts: 3,
                usable: 2
            }]
        );
    }

    #[test]
    fn test_custom_limits() {
        let limits = ConfigLimits {
            max_players: 24,
            max_courts: 6,
            ..Default::default()
        };
        let result = validate_configuration_with(&TournamentConfiguration::new(24, 6), &limits);
        assert!(result.is_valid);
    }

    #[test]
    fn test_players_trimmed() {
        let result = validate_players(&["  Ann ", "Bob"]);
        assert!(result.is_valid);
        assert_eq!(
            result.data,
            Some(vec!["Ann".to_string(), "Bob".to_string()])
        );
    }

    #[test]
    fn test_players_duplicates_case_insensitive() {
        let result = validate_players(&["Ann", "ann ", "", "Bob", "BOB"]);
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![
                ConfigIssue::DuplicatePlayer {
                    name: "ann".to_string()
                },
                ConfigIssue::EmptyPlayerName { index: 2 },
                ConfigIssue::DuplicatePlayer {
                    name: "BOB".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_issue_messages() {
        let issue = ConfigIssue::PlayersNotDivisibleByFour { count: 10 };
        assert_eq!(issue.to_string(), "Player count 10 must be divisible by 4");
    }
}
