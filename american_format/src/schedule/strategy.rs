//! Pairing strategies.
//!
//! A strategy decides, one round at a time, which four players share each
//! court and how they split into teams. Strategies work on player indices and
//! never own history: the generator threads a [`PairingHistory`] value through
//! every round and hands the strategy a read-only view of it.
//!
//! Two strategies exist:
//! - [`RoundRobinStrategy`]: the circle method. Produces a 1-factorization of
//!   the complete graph, so every pair of players partners exactly once over
//!   `n - 1` rounds.
//! - [`GreedyStrategy`]: penalty-driven search over every quadruple and team
//!   split. Exponential in the player count; fine up to 16 players.

use enum_dispatch::enum_dispatch;
use std::collections::{HashMap, HashSet};

/// Index into the roster
pub type PlayerIndex = usize;

/// Two teammates, by index
pub type IndexTeam = (PlayerIndex, PlayerIndex);

/// Penalty for a split that repeats a partnership
pub const PARTNER_REPEAT_PENALTY: u32 = 100;

/// Penalty per cross-team pair that already faced each other
pub const OPPONENT_REPEAT_PENALTY: u32 = 10;

/// Upper bound on rounds produced by the greedy strategy
pub const GREEDY_MAX_ROUNDS: usize = 12;

/// One court's match, by index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing {
    pub team1: IndexTeam,
    pub team2: IndexTeam,
}

impl Pairing {
    pub fn new(team1: IndexTeam, team2: IndexTeam) -> Self {
        Self { team1, team2 }
    }

    /// The four cross-team pairs
    fn opponent_pairs(&self) -> [IndexTeam; 4] {
        let (a, b) = self.team1;
        let (c, d) = self.team2;
        [(a, c), (a, d), (b, c), (b, d)]
    }
}

fn pair_key(a: PlayerIndex, b: PlayerIndex) -> IndexTeam {
    if a <= b { (a, b) } else { (b, a) }
}

/// Who has partnered and faced whom so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairingHistory {
    partners: HashSet<IndexTeam>,
    opponents: HashMap<IndexTeam, u32>,
}

impl PairingHistory {
    pub fn have_partnered(&self, a: PlayerIndex, b: PlayerIndex) -> bool {
        self.partners.contains(&pair_key(a, b))
    }

    /// How many times two players have been on opposite teams
    pub fn opponent_count(&self, a: PlayerIndex, b: PlayerIndex) -> u32 {
        self.opponents.get(&pair_key(a, b)).copied().unwrap_or(0)
    }

    /// History extended with one round's pairings
    #[must_use]
    pub fn record(mut self, pairings: &[Pairing]) -> Self {
        for pairing in pairings {
            self.partners
                .insert(pair_key(pairing.team1.0, pairing.team1.1));
            self.partners
                .insert(pair_key(pairing.team2.0, pairing.team2.1));
            for (a, b) in pairing.opponent_pairs() {
                *self.opponents.entry(pair_key(a, b)).or_insert(0) += 1;
            }
        }
        self
    }

    /// Distinct partnerships seen so far
    pub fn partnership_count(&self) -> usize {
        self.partners.len()
    }
}

/// Round-by-round pairing algorithm
#[enum_dispatch]
pub trait PairingStrategy {
    /// Human-readable name used in logs and results
    fn name(&self) -> &'static str;

    /// Rounds to generate for `players` players
    fn round_count(&self, players: usize) -> usize;

    /// Pair one round (0-indexed). At most `courts` matches are returned.
    fn pair_round(
        &self,
        round: usize,
        players: usize,
        courts: usize,
        history: &PairingHistory,
    ) -> Vec<Pairing>;
}

/// Circle-method 1-factorization.
///
/// Player 0 is the pivot; players `1..n` sit on a circle of `n - 1` seats. In
/// round `r` the pivot partners the player at seat `r`, and the remaining
/// seats pair up symmetrically around seat `r`. The `n / 2` teams are then
/// grouped into matches, choosing the grouping with the fewest repeated
/// opponents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundRobinStrategy;

impl RoundRobinStrategy {
    /// Teams of round `round`, pivot team first
    pub fn teams(round: usize, players: usize) -> Vec<IndexTeam> {
        if players < 2 {
            return Vec::new();
        }
        let seats = players - 1;
        let pivot_seat = round % seats;
        let mut teams = Vec::with_capacity(players / 2);
        teams.push((0, 1 + pivot_seat));
        for offset in 1..players / 2 {
            let left = (pivot_seat + offset) % seats;
            let right = (pivot_seat + seats - offset) % seats;
            teams.push((1 + left, 1 + right));
        }
        teams
    }
}

impl PairingStrategy for RoundRobinStrategy {
    fn name(&self) -> &'static str {
        "round-robin"
    }

    fn round_count(&self, players: usize) -> usize {
        players.saturating_sub(1)
    }

    fn pair_round(
        &self,
        round: usize,
        players: usize,
        courts: usize,
        history: &PairingHistory,
    ) -> Vec<Pairing> {
        let teams = Self::teams(round, players);
        let mut best = None;
        group_teams(&teams, &mut Vec::new(), 0, history, &mut best);
        let mut pairings = best.map(|(_, pairings)| pairings).unwrap_or_default();
        pairings.truncate(courts);
        pairings
    }
}

fn opponent_penalty(pairing: &Pairing, history: &PairingHistory) -> u32 {
    pairing
        .opponent_pairs()
        .iter()
        .map(|&(a, b)| history.opponent_count(a, b))
        .sum()
}

/// Depth-first search over every way to group `remaining` teams into matches.
/// Keeps the first grouping with the lowest total opponent penalty.
fn group_teams(
    remaining: &[IndexTeam],
    current: &mut Vec<Pairing>,
    penalty: u32,
    history: &PairingHistory,
    best: &mut Option<(u32, Vec<Pairing>)>,
) {
    if best.as_ref().is_some_and(|(lowest, _)| penalty >= *lowest) {
        return;
    }
    let Some((&first, rest)) = remaining.split_first() else {
        *best = Some((penalty, current.clone()));
        return;
    };
    if rest.is_empty() {
        // Odd team out cannot be placed on a court.
        *best = Some((penalty, current.clone()));
        return;
    }
    for (i, &opponent) in rest.iter().enumerate() {
        let pairing = Pairing::new(first, opponent);
        let others: Vec<IndexTeam> = rest
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, &team)| team)
            .collect();
        current.push(pairing);
        group_teams(
            &others,
            current,
            penalty + opponent_penalty(&pairing, history),
            history,
            best,
        );
        current.pop();
    }
}

/// Greedy constrained search.
///
/// For each court, every quadruple of still-available players is scanned in
/// lexicographic order together with its three team splits, and the first
/// split with the lowest penalty wins. Repeated partnerships are only
/// penalized, not excluded, so late rounds can still repeat one; the
/// generator's self-check catches that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    fn split_penalty(pairing: &Pairing, history: &PairingHistory) -> u32 {
        let (a, b) = pairing.team1;
        let (c, d) = pairing.team2;
        let mut penalty = 0;
        if history.have_partnered(a, b) || history.have_partnered(c, d) {
            penalty += PARTNER_REPEAT_PENALTY;
        }
        let repeated = pairing
            .opponent_pairs()
            .iter()
            .filter(|&&(x, y)| history.opponent_count(x, y) > 0)
            .count() as u32;
        penalty + repeated * OPPONENT_REPEAT_PENALTY
    }

    /// Lowest-penalty split among all quadruples of `available`
    fn best_split(available: &[PlayerIndex], history: &PairingHistory) -> Option<Pairing> {
        let n = available.len();
        let mut best: Option<(u32, Pairing)> = None;
        for i in 0..n {
            for j in i + 1..n {
                for k in j + 1..n {
                    for l in k + 1..n {
                        let (a, b, c, d) = (available[i], available[j], available[k], available[l]);
                        let splits = [
                            Pairing::new((a, b), (c, d)),
                            Pairing::new((a, c), (b, d)),
                            Pairing::new((a, d), (b, c)),
                        ];
                        for split in splits {
                            let penalty = Self::split_penalty(&split, history);
                            if best.is_none_or(|(lowest, _)| penalty < lowest) {
                                if penalty == 0 {
                                    return Some(split);
                                }
                                best = Some((penalty, split));
                            }
                        }
                    }
                }
            }
        }
        best.map(|(_, split)| split)
    }
}

impl PairingStrategy for GreedyStrategy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn round_count(&self, players: usize) -> usize {
        players.saturating_sub(1).min(GREEDY_MAX_ROUNDS)
    }

    fn pair_round(
        &self,
        _round: usize,
        players: usize,
        courts: usize,
        history: &PairingHistory,
    ) -> Vec<Pairing> {
        let mut available: Vec<PlayerIndex> = (0..players).collect();
        let mut pairings = Vec::with_capacity(courts);
        while available.len() >= 4 && pairings.len() < courts {
            let Some(split) = Self::best_split(&available, history) else {
                break;
            };
            available.retain(|p| {
                *p != split.team1.0 && *p != split.team1.1 && *p != split.team2.0 && *p != split.team2.1
            });
            pairings.push(split);
        }
        pairings
    }
}

/// The pairing strategies, statically dispatched
#[enum_dispatch(PairingStrategy)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    RoundRobin(RoundRobinStrategy),
    Greedy(GreedyStrategy),
}

impl Strategy {
    /// Round-robin for the tuned 8-player / 2-court format, greedy otherwise
    pub fn for_tournament(players: usize, courts: usize) -> Self {
        if players == 8 && courts == 2 {
            Strategy::RoundRobin(RoundRobinStrategy)
        } else {
            Strategy::Greedy(GreedyStrategy)
        }
    }
}
