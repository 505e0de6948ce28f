use std::fmt;

/// Set to any value to print debug diagnostics on stderr.
pub const DEBUG_ENV: &str = "CODEWORDS_DEBUG";

pub fn debug_enabled() -> bool {
    std::env::var_os(DEBUG_ENV).is_some()
}

pub fn debug(args: fmt::Arguments<'_>) {
    if debug_enabled() {
        eprintln!("debug: {}", args);
    }
}
