use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};

/// Bytes of OS-seeded randomness drawn per unseeded draw.
pub const FRESH_SEED_LEN: usize = 16;

/// Seeds shorter than this are easy to guess when shared.
pub const RECOMMENDED_SEED_LEN: usize = 16;

/// Where the randomness of each draw comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    /// The same string seeds every draw of an invocation.
    Fixed(String),
    /// Fresh random bytes for every draw.
    Fresh,
}

impl Seed {
    /// An absent or empty seed string means fresh randomness.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(s) if !s.is_empty() => Seed::Fixed(s.to_string()),
            _ => Seed::Fresh,
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Seed::Fixed(_))
    }

    /// A fixed seed below [`RECOMMENDED_SEED_LEN`] characters.
    pub fn is_weak(&self) -> bool {
        match self {
            Seed::Fixed(s) => s.chars().count() < RECOMMENDED_SEED_LEN,
            Seed::Fresh => false,
        }
    }

    /// A newly seeded generator for a single draw.
    ///
    /// The seed material is hashed with SHA-256 into the ChaCha20 key, so a
    /// fixed seed string always produces the same stream.
    pub fn rng(&self) -> ChaCha20Rng {
        let digest = match self {
            Seed::Fixed(s) => Sha256::digest(s.as_bytes()),
            Seed::Fresh => Sha256::digest(rand::random::<[u8; FRESH_SEED_LEN]>()),
        };
        let mut key = [0u8; 32];
        key.copy_from_slice(&digest);
        ChaCha20Rng::from_seed(key)
    }
}
