//! Seeded environment for deterministic simulation.
//!
//! Card ids minted through [`SimEnv`] depend only on the seed and the order
//! of calls, so a failing simulation can be replayed exactly.

use std::sync::{Arc, Mutex};

use flashzilla_core::Environment;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Simulation environment with a seeded `ChaCha8` RNG.
///
/// Clones share the RNG stream.
#[derive(Clone)]
pub struct SimEnv {
    rng: Arc<Mutex<ChaCha8Rng>>,
}

impl Default for SimEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl SimEnv {
    /// Environment seeded with zero.
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Environment seeded with `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(seed))) }
    }
}

impl Environment for SimEnv {
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for
    /// simulation code.
    #[allow(clippy::expect_used)]
    fn random_bytes(&self, buffer: &mut [u8]) {
        self.rng.lock().expect("Mutex poisoned").fill_bytes(buffer);
    }
}
