#![doc = include_str!("../README.md")]

pub mod codex;
pub mod entry;
pub mod error;
pub mod generate;
pub mod seed;

pub use codex::{Category, Codex};
pub use entry::Entry;
pub use error::{CodexError, Result};
pub use generate::Generator;
pub use seed::{RECOMMENDED_SEED_LEN, Seed};

/// Reference file used when no other is configured.
pub const DEFAULT_CODEX_FILE: &str = "codex.txt";
