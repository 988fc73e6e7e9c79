//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract; scripts rely on them.
//!
//! | Code | Description                                        |
//! |------|----------------------------------------------------|
//! | 0    | Success                                            |
//! | 1    | General error (unspecified)                        |
//! | 2    | CLI usage error (bad args, reported by clap)       |
//! | 3    | Input error (missing, unreadable or malformed sheet) |
//! | 4    | Output error (export or .env could not be written) |
//! | 5    | Config error (leetsheet.toml unreadable or invalid) |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments. clap exits with this code itself.
#[allow(dead_code)]
pub const EXIT_USAGE: u8 = 2;

/// Source sheet missing, unreadable, or lacking a required column.
pub const EXIT_INPUT: u8 = 3;

/// Export or env file could not be written.
pub const EXIT_OUTPUT: u8 = 4;

/// Settings file unreadable, unparseable, or invalid.
pub const EXIT_CONFIG: u8 = 5;
