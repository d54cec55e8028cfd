//! Per-agent random streams.
//!
//! Every agent draws from its own ChaCha8 generator whose seed is derived
//! from the run seed and the agent id, so results do not depend on the order
//! in which agents are ticked or spawned.

use std::collections::HashMap;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::animal::AgentId;

pub struct RngManager {
    master_seed: u64,
    streams: HashMap<AgentId, ChaCha8Rng>,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self {
            master_seed: seed,
            streams: HashMap::new(),
        }
    }

    /// The agent's stream, created on first use and continued afterwards.
    pub fn stream(&mut self, id: AgentId) -> AgentRng<'_> {
        let seed = derive_seed(self.master_seed, id.raw());
        let entry = self
            .streams
            .entry(id)
            .or_insert_with(|| ChaCha8Rng::seed_from_u64(seed));
        AgentRng { inner: entry }
    }

    /// Drops the stream of an agent that left the simulation.
    pub fn release(&mut self, id: AgentId) {
        self.streams.remove(&id);
    }
}

impl Default for RngManager {
    fn default() -> Self {
        Self::new(42)
    }
}

fn derive_seed(master_seed: u64, agent_id: u64) -> u64 {
    let mut seed = master_seed;
    seed = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    seed ^= agent_id.wrapping_mul(48271);
    seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}

pub struct AgentRng<'a> {
    inner: &'a mut ChaCha8Rng,
}

impl<'a> RngCore for AgentRng<'a> {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
