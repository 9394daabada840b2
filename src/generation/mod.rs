pub mod carver;

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};

/// Seedable generator used for every reproducible maze
pub type MazeRng = Xoshiro256PlusPlus;

/// Generation phases that draw from their own random stream.
/// Keeping them apart means spawn placement never perturbs the wall layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Carve,
    Spawn,
}

impl Phase {
    fn id(&self) -> u32 {
        match self {
            Phase::Carve => 0,
            Phase::Spawn => 1,
        }
    }
}

/// Root seed of a maze - the only input needed to reproduce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeSeed {
    pub seed: u64,
}

impl MazeSeed {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Draw a fresh seed from the OS-seeded thread generator
    pub fn random() -> Self {
        Self {
            seed: rand::random(),
        }
    }

    /// Use `seed` when given, otherwise draw a fresh one
    pub fn from_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::random, Self::new)
    }

    /// Deterministic per-phase hash from maze seed and phase id
    pub fn phase_hash(&self, phase: Phase) -> u64 {
        let mut hasher = Sha3_256::new();
        hasher.update(self.seed.to_le_bytes());
        hasher.update(phase.id().to_le_bytes());
        let result = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&result[0..8]);
        u64::from_le_bytes(bytes)
    }

    /// Independent generator for one phase
    pub fn rng(&self, phase: Phase) -> MazeRng {
        MazeRng::seed_from_u64(self.phase_hash(phase))
    }
}
