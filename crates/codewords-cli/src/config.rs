use codewords::{DEFAULT_CODEX_FILE, Seed};
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the reference file when `-f` is absent.
pub const FILE_ENV: &str = "CODEWORDS_FILE";

/// Settings resolved once from flags and environment, then handed to each step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub file: PathBuf,
    pub seed: Seed,
    pub json: bool,
}

impl Config {
    pub fn from_env(
        file: Option<Option<PathBuf>>,
        seed: Option<Option<String>>,
        json: bool,
    ) -> Self {
        Self::resolve(file, seed, json, std::env::var_os(FILE_ENV))
    }

    /// Flag value, then `CODEWORDS_FILE`, then `codex.txt`. Empty values fall through.
    pub fn resolve(
        file: Option<Option<PathBuf>>,
        seed: Option<Option<String>>,
        json: bool,
        env_file: Option<OsString>,
    ) -> Self {
        let file = file
            .flatten()
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| env_file.filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CODEX_FILE));

        Self {
            file,
            seed: Seed::from_arg(seed.flatten().as_deref()),
            json,
        }
    }
}
