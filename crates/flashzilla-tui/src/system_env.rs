//! Production Environment implementation using OS randomness.
//!
//! `SystemEnv` mints card ids from getrandom. Ids are unpredictable and not
//! reproducible; simulations use the seeded environment from the harness
//! instead.

use flashzilla_core::Environment;

/// Production environment backed by the OS RNG.
///
/// # Panics
///
/// Panics if the OS RNG fails. Without randomness no card id can be minted,
/// and RNG failure indicates an OS-level fault.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a new system environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    #[allow(clippy::expect_used)]
    fn random_bytes(&self, buffer: &mut [u8]) {
        getrandom::fill(buffer).expect("invariant: OS RNG failure is unrecoverable");
    }
}

#[cfg(test)]
mod tests {
    use flashzilla_core::CardId;

    use super::*;

    #[test]
    fn random_bytes_differ() {
        let env = SystemEnv::new();

        let mut bytes1 = [0u8; 32];
        let mut bytes2 = [0u8; 32];
        env.random_bytes(&mut bytes1);
        env.random_bytes(&mut bytes2);

        assert_ne!(bytes1, bytes2);
    }

    #[test]
    fn minted_ids_are_v4() {
        let env = SystemEnv::new();
        let id = CardId::generate(&env);

        assert_eq!(id.as_uuid().get_version_num(), 4);
        assert_ne!(id, CardId::generate(&env));
    }
}
