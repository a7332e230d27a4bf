//! Per-player statistics aggregation.

use super::models::PlayerStats;
use crate::schedule::models::{Round, Side};
use std::collections::BTreeMap;

/// Fold every validly scored match into per-player totals.
///
/// Every player named in `rounds` gets an entry, including players without
/// a scored match. Matches without a valid score are ignored. A player's
/// `total_points` is the sum of their own team's scores; there is no bonus
/// for winning. Entries are returned in name order with rank 0.
pub fn aggregate_player_stats(rounds: &[Round]) -> Vec<PlayerStats> {
    let mut table: BTreeMap<&str, PlayerStats> = BTreeMap::new();

    for m in rounds.iter().flat_map(|round| &round.matches) {
        for player in m.players() {
            table
                .entry(player.as_str())
                .or_insert_with(|| PlayerStats::new(player.as_str()));
        }

        let Some(score) = m.valid_score() else {
            continue;
        };
        let Some((team1_points, team2_points)) = score.points() else {
            continue;
        };
        let winner = score.winner();

        for (side, team, own, conceded) in [
            (Side::Team1, &m.team1, team1_points, team2_points),
            (Side::Team2, &m.team2, team2_points, team1_points),
        ] {
            for player in [&team.0, &team.1] {
                let Some(stats) = table.get_mut(player.as_str()) else {
                    continue;
                };
                stats.matches_played = stats.matches_played.saturating_add(1);
                stats.points_for = stats.points_for.saturating_add(own);
                stats.points_against = stats.points_against.saturating_add(conceded);
                stats.total_points = stats.total_points.saturating_add(own);
                match winner {
                    Some(w) if w == side => stats.wins = stats.wins.saturating_add(1),
                    Some(_) => stats.losses = stats.losses.saturating_add(1),
                    None => {}
                }
            }
        }
    }

    table
        .into_values()
        .map(|mut stats| {
            if stats.matches_played > 0 {
                let played = f64::from(stats.matches_played);
                stats.win_percentage = 100.0 * f64::from(stats.wins) / played;
                stats.average_score = f64::from(stats.total_points) / played;
            }
            stats
        })
        .collect()
}
