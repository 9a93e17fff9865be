//! Random source with an explicit fallback policy.
//!
//! The primary source is the operating system CSPRNG. When it fails,
//! behavior is decided by [`SourcePolicy`]:
//!
//! - `SecureOnly` surfaces the failure to the caller.
//! - `AllowDegraded` switches to a ChaCha20 generator seeded from the
//!   wall clock and process id. That seed is guessable, so the switch is
//!   logged and reported by [`RandomSource::is_degraded`].

use rand_chacha::ChaCha20Rng;
use rand_core::{OsRng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};

/// Domain separator for the degraded-mode seed digest.
const DEGRADED_SEED_DOMAIN: &[u8] = b"keysmith-degraded-seed-v1";

/// What to do when the primary source fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourcePolicy {
    /// Fail; never downgrade.
    #[default]
    SecureOnly,
    /// Continue with a time-seeded generator.
    AllowDegraded,
}

/// A random source for password generation.
///
/// Implements [`RngCore`], so it can be handed to
/// [`generate`](crate::generation::generate) like any other generator.
/// Only `try_fill_bytes` reports failures; the infallible methods panic
/// if the source is unavailable, as `RngCore` requires.
pub struct RandomSource {
    /// The preferred source (OS CSPRNG unless injected).
    primary: Box<dyn RngCore + Send>,
    /// Fallback policy.
    policy: SourcePolicy,
    /// Set once the primary has failed under `AllowDegraded`.
    fallback: Option<ChaCha20Rng>,
    /// Bytes handed out so far.
    bytes_drawn: u64,
}

impl RandomSource {
    /// Creates a source reading the OS CSPRNG with the given policy.
    pub fn new(policy: SourcePolicy) -> Self {
        Self::from_primary(OsRng, policy)
    }

    /// Creates a source that never downgrades.
    ///
    /// This is the recommended constructor.
    pub fn secure() -> Self {
        Self::new(SourcePolicy::SecureOnly)
    }

    /// Creates a source around a caller-provided primary generator.
    pub fn from_primary(primary: impl RngCore + Send + 'static, policy: SourcePolicy) -> Self {
        Self {
            primary: Box::new(primary),
            policy,
            fallback: None,
            bytes_drawn: 0,
        }
    }

    /// Returns the configured policy.
    pub fn policy(&self) -> SourcePolicy {
        self.policy
    }

    /// Returns true once the source has fallen back to degraded mode.
    pub fn is_degraded(&self) -> bool {
        self.fallback.is_some()
    }

    /// Returns the number of bytes handed out.
    pub fn bytes_drawn(&self) -> u64 {
        self.bytes_drawn
    }

    fn degraded_rng(&self) -> ChaCha20Rng {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();

        let mut hasher = Sha256::new();
        hasher.update(DEGRADED_SEED_DOMAIN);
        hasher.update(nanos.to_le_bytes());
        hasher.update(std::process::id().to_le_bytes());
        hasher.update(self.bytes_drawn.to_le_bytes());

        ChaCha20Rng::from_seed(hasher.finalize().into())
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::secure()
    }
}

impl std::fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomSource")
            .field("policy", &self.policy)
            .field("degraded", &self.is_degraded())
            .field("bytes_drawn", &self.bytes_drawn)
            .finish()
    }
}

impl RngCore for RandomSource {
    fn next_u32(&mut self) -> u32 {
        rand_core::impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(e) = self.try_fill_bytes(dest) {
            panic!("random source unavailable: {}", e);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        if let Some(fallback) = self.fallback.as_mut() {
            fallback.fill_bytes(dest);
            self.bytes_drawn += dest.len() as u64;
            return Ok(());
        }

        match self.primary.try_fill_bytes(dest) {
            Ok(()) => {
                self.bytes_drawn += dest.len() as u64;
                Ok(())
            }
            Err(e) => match self.policy {
                SourcePolicy::SecureOnly => {
                    tracing::warn!(error = %e, "Secure random source unavailable");
                    Err(e)
                }
                SourcePolicy::AllowDegraded => {
                    tracing::warn!(
                        error = %e,
                        "Secure random source unavailable, continuing in degraded mode"
                    );
                    let mut rng = self.degraded_rng();
                    rng.fill_bytes(dest);
                    self.fallback = Some(rng);
                    self.bytes_drawn += dest.len() as u64;
                    Ok(())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    /// A primary source that always fails.
    struct Unavailable;

    impl RngCore for Unavailable {
        fn next_u32(&mut self) -> u32 {
            unreachable!()
        }

        fn next_u64(&mut self) -> u64 {
            unreachable!()
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!()
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
            Err(NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap().into())
        }
    }

    #[test]
    fn test_os_source_fills() {
        let mut source = RandomSource::secure();
        let mut buf = [0u8; 64];
        source.try_fill_bytes(&mut buf).unwrap();

        assert!(!source.is_degraded());
        assert_eq!(source.bytes_drawn(), 64);
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_secure_only_propagates_failure() {
        let mut source = RandomSource::from_primary(Unavailable, SourcePolicy::SecureOnly);
        let mut buf = [0u8; 8];

        assert!(source.try_fill_bytes(&mut buf).is_err());
        assert!(!source.is_degraded());
        assert_eq!(source.bytes_drawn(), 0);
    }

    #[test]
    fn test_allow_degraded_switches_to_fallback() {
        let mut source = RandomSource::from_primary(Unavailable, SourcePolicy::AllowDegraded);
        let mut buf = [0u8; 32];

        source.try_fill_bytes(&mut buf).unwrap();
        assert!(source.is_degraded());

        // Stays on the fallback afterwards.
        source.try_fill_bytes(&mut buf).unwrap();
        assert_eq!(source.bytes_drawn(), 64);
    }

    #[test]
    fn test_injected_primary_is_used() {
        let mut a = RandomSource::from_primary(
            ChaCha20Rng::seed_from_u64(9),
            SourcePolicy::SecureOnly,
        );
        let mut b = ChaCha20Rng::seed_from_u64(9);

        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    #[should_panic(expected = "random source unavailable")]
    fn test_fill_bytes_panics_when_unavailable() {
        let mut source = RandomSource::from_primary(Unavailable, SourcePolicy::SecureOnly);
        let mut buf = [0u8; 4];
        source.fill_bytes(&mut buf);
    }
}
