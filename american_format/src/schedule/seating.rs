//! Random seeding of the roster before generation.
//!
//! Schedules are deterministic for a given roster order, so sign-up order
//! would otherwise decide who partners whom in round one. Shuffling the
//! roster first removes that bias while keeping generation reproducible for
//! a fixed seed.

use super::models::Player;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Roster shuffler
pub struct PlayerShuffler {
    rng: StdRng,
}

impl PlayerShuffler {
    /// Shuffler seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible shuffler
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A shuffled copy of `players`
    pub fn shuffle<S: AsRef<str>>(&mut self, players: &[S]) -> Vec<Player> {
        let mut roster: Vec<Player> = players.iter().map(|p| p.as_ref().to_string()).collect();
        roster.shuffle(&mut self.rng);
        roster
    }
}

impl Default for PlayerShuffler {
    fn default() -> Self {
        Self::new()
    }
}
