//! Front-end configuration.
//!
//! Constants for the browser shell. Shell semantics (home directory, ping
//! timing, navigation targets) live in [`fauxsh_core::config`].

use fauxsh_core::config::HOME_DIR;

// =============================================================================
// Site Content (loaded at compile time)
// =============================================================================

/// Filesystem manifest mounted at boot.
pub const FILESYSTEM_MANIFEST: &str = include_str!("../assets/filesystem.json");

/// Line printed once the filesystem is mounted.
pub const WELCOME_MESSAGE: &str = "Welcome! Type 'help' to see available commands.";

// =============================================================================
// Prompt
// =============================================================================

pub const USER_NAME: &str = "autumn";

pub const HOST_NAME: &str = "mck.is";

// =============================================================================
// Terminal Limits
// =============================================================================

/// Maximum number of lines kept in the terminal output.
pub const MAX_TERMINAL_HISTORY: usize = 1000;

/// Maximum number of submitted lines recalled with ArrowUp.
pub const MAX_COMMAND_HISTORY: usize = 100;

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment the session starts with.
pub fn default_env() -> Vec<(String, String)> {
    [
        ("PATH", "/bin:/usr/bin"),
        ("HOME", HOME_DIR),
        ("USER", USER_NAME),
        ("SHELL", "/bin/fauxsh"),
        ("TERM", "xterm-256color"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
