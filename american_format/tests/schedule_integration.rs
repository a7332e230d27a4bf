//! Integration tests for schedule generation
//!
//! These tests verify the fairness guarantees of generated schedules and the
//! agreement between the generator and the schedule validator.

#[cfg(test)]
mod schedule_tests {
    use american_format::schedule::{
        GreedyStrategy, MatchStatus, PlayerShuffler, ScheduleIssue, Strategy, generate,
        generate_with_strategy, validate_schedule,
    };
    use std::collections::{HashMap, HashSet};

    fn roster(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Player {i:02}")).collect()
    }

    fn partnerships(result: &american_format::AmericanFormatResult) -> Vec<(String, String)> {
        result
            .rounds
            .iter()
            .flat_map(|round| &round.matches)
            .flat_map(|m| [&m.team1, &m.team2])
            .map(|(a, b)| {
                if a < b {
                    (a.clone(), b.clone())
                } else {
                    (b.clone(), a.clone())
                }
            })
            .collect()
    }

    #[test]
    fn test_eight_players_every_pair_partners_exactly_once() {
        let result = generate(&roster(8), 2, 16);

        assert_eq!(result.rounds.len(), 7);
        assert!(result.rounds.iter().all(|round| round.matches.len() == 2));

        let pairs = partnerships(&result);
        let distinct: HashSet<_> = pairs.iter().cloned().collect();
        assert_eq!(pairs.len(), 28);
        assert_eq!(distinct.len(), 28);
    }

    #[test]
    fn test_eight_players_each_play_seven_matches() {
        let result = generate(&roster(8), 2, 16);
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for m in result.rounds.iter().flat_map(|round| &round.matches) {
            for player in m.players() {
                *counts.entry(player.as_str()).or_insert(0) += 1;
            }
        }
        assert_eq!(counts.len(), 8);
        assert!(counts.values().all(|&count| count == 7));
    }

    #[test]
    fn test_every_round_contains_every_player_once() {
        for (players, courts) in [(4, 1), (8, 2), (12, 3), (16, 4)] {
            let names = roster(players);
            let result = generate(&names, courts, 16);
            for round in &result.rounds {
                let seen: Vec<&String> = round.players().collect();
                let distinct: HashSet<&String> = seen.iter().copied().collect();
                assert_eq!(seen.len(), players);
                assert_eq!(distinct.len(), players);
            }
        }
    }

    #[test]
    fn test_generated_schedules_pass_validation() {
        for (players, courts) in [(4, 1), (8, 2), (8, 4), (12, 3), (16, 4)] {
            let names = roster(players);
            let result = generate(&names, courts, 16);
            assert!(
                result.validation.is_valid,
                "{players} players: {:?}",
                result.validation.errors
            );
            let recheck = validate_schedule(&result.rounds, &names);
            assert!(recheck.is_valid, "{players} players: {:?}", recheck.errors);
        }
    }

    #[test]
    fn test_generation_is_reproducible() {
        for (players, courts) in [(8, 2), (12, 3), (16, 4)] {
            let names = roster(players);
            let first = generate(&names, courts, 16);
            let second = generate(&names, courts, 16);
            assert_eq!(first.rounds, second.rounds);
            assert_eq!(first.partnership_tracking, second.partnership_tracking);
        }
    }

    #[test]
    fn test_forced_greedy_is_reproducible() {
        let names = roster(12);
        let strategy = Strategy::from(GreedyStrategy);
        let first = generate_with_strategy(&names, 3, 16, strategy);
        let second = generate_with_strategy(&names, 3, 16, strategy);
        assert_eq!(first.rounds, second.rounds);
        assert_eq!(first.validation, second.validation);
    }

    #[test]
    fn test_partnership_tracking_matches_schedule() {
        let names = roster(8);
        let result = generate(&names, 2, 16);
        let tracking = &result.partnership_tracking;
        assert_eq!(tracking.len(), 8);
        for name in &names {
            let history = tracking.get(name).unwrap();
            assert_eq!(history.partners.len(), 7);
            assert!(!history.partners.contains(name));
            assert!(!history.opponents.contains(name));
        }
    }

    #[test]
    fn test_new_schedule_is_pending() {
        let result = generate(&roster(8), 2, 16);
        let matches: Vec<_> = result.rounds.iter().flat_map(|r| &r.matches).collect();
        assert!(matches.iter().all(|m| m.status == MatchStatus::Pending));
        assert!(matches.iter().all(|m| m.score.is_none()));
        let numbers: Vec<u32> = matches.iter().map(|m| m.game_number).collect();
        assert_eq!(numbers, (1..=14).collect::<Vec<u32>>());
    }

    #[test]
    fn test_shuffled_roster_still_valid() {
        let names = PlayerShuffler::seeded(7).shuffle(&roster(8));
        let result = generate(&names, 2, 16);
        assert!(result.validation.is_valid);
        assert_eq!(partnerships(&result).len(), 28);
    }

    #[test]
    fn test_rejected_configuration_reports_every_error() {
        let result = generate(&roster(10), 9, 64);
        assert!(!result.validation.is_valid);
        assert!(result.rounds.is_empty());
        let errors = &result.validation.errors;
        assert!(errors.len() >= 3);
        assert!(
            errors
                .iter()
                .all(|issue| matches!(issue, ScheduleIssue::Config(_)))
        );
    }

    #[test]
    fn test_validation_serializes_with_codes() {
        let result = generate(&roster(6), 2, 16);
        let json = serde_json::to_value(&result.validation).unwrap();
        assert_eq!(json["is_valid"], false);
        assert_eq!(json["errors"][0]["code"], "config");
        assert_eq!(
            json["errors"][0]["details"]["code"],
            "players_not_divisible_by_four"
        );
    }
}
