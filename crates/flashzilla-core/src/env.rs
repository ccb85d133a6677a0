//! Environment abstraction for deterministic testing.
//!
//! Decouples session logic from system resources. The only resource the
//! review engine needs is randomness, used to mint card identities. Production
//! hosts use OS entropy, simulation uses a seeded RNG so a run can be replayed
//! card-for-card.

/// Abstract environment providing randomness.
///
/// # Invariants
///
/// Implementations MUST guarantee:
///
/// - Given the same seed, a simulation environment produces the same sequence
///   of bytes
/// - Draws are not required to differ. Callers that need a fresh value (card
///   ids) must terminate even when every draw returns the same bytes
/// - Methods are infallible except in exceptional circumstances (e.g., OS
///   entropy exhaustion, incorrect simulation setup)
pub trait Environment: Clone + Send + Sync + 'static {
    /// Fills the provided buffer with random bytes.
    fn random_bytes(&self, buffer: &mut [u8]);

    /// Generates a random `u64`.
    fn random_u64(&self) -> u64 {
        let mut bytes = [0u8; 8];
        self.random_bytes(&mut bytes);
        u64::from_be_bytes(bytes)
    }

    /// Generates a random `u128`.
    ///
    /// Useful for UUIDs.
    fn random_u128(&self) -> u128 {
        let mut bytes = [0u8; 16];
        self.random_bytes(&mut bytes);
        u128::from_be_bytes(bytes)
    }
}
