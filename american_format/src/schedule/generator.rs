//! Schedule generation.

use super::errors::ScheduleIssue;
use super::models::{Match, PartnershipTracking, Player, Round};
use super::strategy::{PairingHistory, PairingStrategy, RoundRobinStrategy, Strategy};
use super::validator::{ScheduleValidation, validate_schedule};
use crate::config::{
    DEFAULT_POINTS_PER_MATCH, TournamentConfiguration, validate_configuration, validate_players,
};
use serde::{Deserialize, Serialize};

/// A generated schedule together with its self-check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmericanFormatResult {
    pub rounds: Vec<Round>,
    pub partnership_tracking: PartnershipTracking,
    /// Configuration, roster, and schedule issues combined
    pub validation: ScheduleValidation,
    /// Name of the pairing strategy that produced `rounds`
    pub strategy: Option<String>,
    pub points_per_match: u32,
}

impl AmericanFormatResult {
    fn rejected(points_per_match: u32, validation: ScheduleValidation) -> Self {
        Self {
            rounds: Vec::new(),
            partnership_tracking: PartnershipTracking::default(),
            validation,
            strategy: None,
            points_per_match,
        }
    }

    /// Total matches across all rounds
    pub fn total_matches(&self) -> usize {
        self.rounds.iter().map(|round| round.matches.len()).sum()
    }

    /// Look up a match by its game number
    pub fn find_match(&self, game_number: u32) -> Option<&Match> {
        self.rounds
            .iter()
            .flat_map(|round| &round.matches)
            .find(|m| m.game_number == game_number)
    }
}

/// Generate a schedule with the default points per match
pub fn generate_default<S: AsRef<str>>(players: &[S], courts: usize) -> AmericanFormatResult {
    generate(players, courts, DEFAULT_POINTS_PER_MATCH)
}

/// Generate a schedule, choosing the pairing strategy from the player and
/// court counts.
///
/// Invalid input yields no rounds and a failing validation. If the greedy
/// strategy repeats a partnership, the schedule is regenerated with the
/// round-robin strategy and a warning is attached.
pub fn generate<S: AsRef<str>>(
    players: &[S],
    courts: usize,
    points_per_match: u32,
) -> AmericanFormatResult {
    run(players, courts, points_per_match, None)
}

/// Generate a schedule with an explicit strategy. No fallback is attempted.
pub fn generate_with_strategy<S: AsRef<str>>(
    players: &[S],
    courts: usize,
    points_per_match: u32,
    strategy: Strategy,
) -> AmericanFormatResult {
    run(players, courts, points_per_match, Some(strategy))
}

fn run<S: AsRef<str>>(
    players: &[S],
    courts: usize,
    points_per_match: u32,
    forced: Option<Strategy>,
) -> AmericanFormatResult {
    let config = TournamentConfiguration::new(players.len(), courts).with_points(points_per_match);
    let mut validation = validate_configuration(&config)
        .with_data(Some(()))
        .map_issues(ScheduleIssue::from);

    let roster = validate_players(players);
    let names = roster.data.clone().unwrap_or_default();
    validation.absorb(roster.map_issues(ScheduleIssue::from));

    if !validation.is_valid {
        log::warn!(
            "Rejected schedule request for {} players on {} courts: {} error(s)",
            players.len(),
            courts,
            validation.errors.len()
        );
        return AmericanFormatResult::rejected(points_per_match, validation);
    }

    let courts = config.usable_courts();
    let mut strategy = forced.unwrap_or_else(|| Strategy::for_tournament(names.len(), courts));
    let mut rounds = build_rounds(&strategy, &names, courts);
    let mut check = validate_schedule(&rounds, &names);

    if !check.is_valid && forced.is_none() && strategy != Strategy::from(RoundRobinStrategy) {
        log::warn!(
            "{} pairing repeated a partnership for {} players, falling back to round-robin",
            strategy.name(),
            names.len()
        );
        let failed = strategy.name().to_string();
        strategy = Strategy::from(RoundRobinStrategy);
        rounds = build_rounds(&strategy, &names, courts);
        check = validate_schedule(&rounds, &names);
        check
            .warnings
            .push(ScheduleIssue::FellBackToRoundRobin { strategy: failed });
    }
    validation.absorb(check);

    let result = AmericanFormatResult {
        partnership_tracking: PartnershipTracking::from_rounds(&rounds),
        rounds,
        validation,
        strategy: Some(strategy.name().to_string()),
        points_per_match,
    };
    log::info!(
        "Generated {} rounds ({} matches) for {} players on {} courts using {} pairing",
        result.rounds.len(),
        result.total_matches(),
        names.len(),
        courts,
        strategy.name()
    );
    result
}

/// Run `strategy` round by round, threading the pairing history through each
/// step. Courts are numbered per round from 1; game numbers run across the
/// whole schedule, round-major then court-minor.
pub fn build_rounds(strategy: &Strategy, players: &[Player], courts: usize) -> Vec<Round> {
    let count = strategy.round_count(players.len());
    let mut rounds = Vec::with_capacity(count);
    let mut history = PairingHistory::default();
    let mut game_number = 1;

    for index in 0..count {
        let pairings = strategy.pair_round(index, players.len(), courts, &history);
        let round_number = index as u32 + 1;
        let mut matches = Vec::with_capacity(pairings.len());
        for (court, pairing) in pairings.iter().enumerate() {
            let team1 = (
                players[pairing.team1.0].clone(),
                players[pairing.team1.1].clone(),
            );
            let team2 = (
                players[pairing.team2.0].clone(),
                players[pairing.team2.1].clone(),
            );
            matches.push(Match::new(
                round_number,
                court as u32 + 1,
                game_number,
                team1,
                team2,
            ));
            game_number += 1;
        }
        log::debug!("Round {}: {} match(es)", round_number, matches.len());
        history = history.record(&pairings);
        rounds.push(Round::new(round_number, matches));
    }

    rounds
}
