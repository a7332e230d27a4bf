//! Schedule data models: matches, rounds, and partnership tracking.

use crate::results::models::MatchScore;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Player display name, unique within a tournament
pub type Player = String;

/// Two teammates
pub type Team = (Player, Player);

/// Match lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::Pending => write!(f, "pending"),
            MatchStatus::InProgress => write!(f, "in_progress"),
            MatchStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Side of the net
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Team1,
    Team2,
}

/// One 2-vs-2 match on a court.
///
/// Matches are immutable once scheduled; recording a score yields a new
/// match via [`Match::with_score`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Court number (1-indexed)
    pub court: u32,
    pub team1: Team,
    pub team2: Team,
    /// Round number (1-indexed)
    pub round: u32,
    /// Sequential game number across the whole schedule (1-indexed)
    pub game_number: u32,
    pub status: MatchStatus,
    pub score: Option<MatchScore>,
}

impl Match {
    /// Create a pending match
    pub fn new(round: u32, court: u32, game_number: u32, team1: Team, team2: Team) -> Self {
        Self {
            court,
            team1,
            team2,
            round,
            game_number,
            status: MatchStatus::Pending,
            score: None,
        }
    }

    /// The four players, team 1 first
    pub fn players(&self) -> [&Player; 4] {
        [&self.team1.0, &self.team1.1, &self.team2.0, &self.team2.1]
    }

    /// Which side a player is on, if they play in this match
    pub fn side_of(&self, player: &str) -> Option<Side> {
        if self.team1.0 == player || self.team1.1 == player {
            Some(Side::Team1)
        } else if self.team2.0 == player || self.team2.1 == player {
            Some(Side::Team2)
        } else {
            None
        }
    }

    /// Whether the match carries a valid score
    pub fn is_completed(&self) -> bool {
        self.valid_score().is_some()
    }

    /// The score, only if it passed validation
    pub fn valid_score(&self) -> Option<&MatchScore> {
        self.score.as_ref().filter(|score| score.points().is_some())
    }

    /// A copy of this match marked as being played
    #[must_use]
    pub fn started(&self) -> Self {
        Self {
            status: MatchStatus::InProgress,
            ..self.clone()
        }
    }

    /// A copy of this match completed with `score`
    #[must_use]
    pub fn with_score(&self, score: MatchScore) -> Self {
        Self {
            status: MatchStatus::Completed,
            score: Some(score),
            ..self.clone()
        }
    }
}

/// All matches played simultaneously in one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// Round number (1-indexed)
    pub round: u32,
    pub matches: Vec<Match>,
}

impl Round {
    pub fn new(round: u32, matches: Vec<Match>) -> Self {
        Self { round, matches }
    }

    /// Every player named in the round, in match order
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.matches.iter().flat_map(|m| m.players())
    }
}

/// Everyone a player has partnered with or played against
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPartnerships {
    pub partners: BTreeSet<Player>,
    pub opponents: BTreeSet<Player>,
}

/// Partner and opponent history per player, derived from a schedule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartnershipTracking {
    players: BTreeMap<Player, PlayerPartnerships>,
}

impl PartnershipTracking {
    /// Build the history of a whole schedule
    pub fn from_rounds(rounds: &[Round]) -> Self {
        let mut tracking = Self::default();
        for m in rounds.iter().flat_map(|round| &round.matches) {
            tracking.record_team(&m.team1, &m.team2);
            tracking.record_team(&m.team2, &m.team1);
        }
        tracking
    }

    fn record_team(&mut self, team: &Team, opponents: &Team) {
        for (player, partner) in [(&team.0, &team.1), (&team.1, &team.0)] {
            let entry = self.players.entry(player.clone()).or_default();
            entry.partners.insert(partner.clone());
            entry.opponents.insert(opponents.0.clone());
            entry.opponents.insert(opponents.1.clone());
        }
    }

    /// History of one player
    pub fn get(&self, player: &str) -> Option<&PlayerPartnerships> {
        self.players.get(player)
    }

    /// Whether two players have been teammates
    pub fn have_partnered(&self, a: &str, b: &str) -> bool {
        self.players
            .get(a)
            .is_some_and(|history| history.partners.contains(b))
    }

    /// Whether two players have faced each other
    pub fn have_opposed(&self, a: &str, b: &str) -> bool {
        self.players
            .get(a)
            .is_some_and(|history| history.opponents.contains(b))
    }

    /// Tracked players in name order
    pub fn players(&self) -> impl Iterator<Item = (&Player, &PlayerPartnerships)> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::score::validate_score;

    fn team(a: &str, b: &str) -> Team {
        (a.to_string(), b.to_string())
    }

    fn sample_match() -> Match {
        Match::new(1, 1, 1, team("Ann", "Bob"), team("Cid", "Dee"))
    }

    #[test]
    fn test_new_match_is_pending() {
        let m = sample_match();
        assert_eq!(m.status, MatchStatus::Pending);
        assert!(m.score.is_none());
        assert!(!m.is_completed());
    }

    #[test]
    fn test_with_score_returns_completed_copy() {
        let m = sample_match();
        let scored = m.with_score(validate_score(10.0, 6.0, 16));
        assert_eq!(m.status, MatchStatus::Pending);
        assert_eq!(scored.status, MatchStatus::Completed);
        assert!(scored.is_completed());
        assert_eq!(scored.game_number, m.game_number);
    }

    #[test]
    fn test_started_returns_in_progress_copy() {
        let m = sample_match();
        let playing = m.started();
        assert_eq!(m.status, MatchStatus::Pending);
        assert_eq!(playing.status, MatchStatus::InProgress);
        assert!(!playing.is_completed());
        assert_eq!(playing.players(), m.players());
        assert_eq!(
            serde_json::to_value(&playing.status).unwrap(),
            serde_json::json!("in_progress")
        );
    }

    #[test]
    fn test_invalid_score_does_not_complete() {
        let scored = sample_match().with_score(validate_score(8.0, 6.0, 16));
        assert!(!scored.is_completed());
        assert!(scored.valid_score().is_none());
    }

    #[test]
    fn test_side_of() {
        let m = sample_match();
        assert_eq!(m.side_of("Bob"), Some(Side::Team1));
        assert_eq!(m.side_of("Cid"), Some(Side::Team2));
        assert_eq!(m.side_of("Eve"), None);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&MatchStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        assert_eq!(MatchStatus::InProgress.to_string(), "in_progress");
    }

    #[test]
    fn test_partnership_tracking() {
        let rounds = vec![Round::new(1, vec![sample_match()])];
        let tracking = PartnershipTracking::from_rounds(&rounds);
        assert_eq!(tracking.len(), 4);
        assert!(tracking.have_partnered("Ann", "Bob"));
        assert!(tracking.have_partnered("Dee", "Cid"));
        assert!(!tracking.have_partnered("Ann", "Cid"));
        assert!(tracking.have_opposed("Ann", "Dee"));
        assert!(!tracking.have_opposed("Ann", "Bob"));
        let ann = tracking.get("Ann").unwrap();
        assert_eq!(ann.opponents.len(), 2);
    }
}
