//! Shell configuration.
//!
//! Centralizes the constants the command handlers depend on.
//! Markup assets are loaded at compile time using `include_str!`.

// =============================================================================
// Markup Assets (loaded at compile time)
// =============================================================================

/// Profile card appended by `whoami`.
pub const WHOAMI_MARKUP: &str = include_str!("../assets/text/whoami.html");

/// Now-playing widget appended by `fetch-music`.
pub const MUSIC_MARKUP: &str = include_str!("../assets/text/music.html");

// =============================================================================
// Filesystem Configuration
// =============================================================================

/// Directory `cd` switches to when called without an operand.
pub const HOME_DIR: &str = "/home/autumn";

/// Search path used when the initial environment does not define `PATH`.
pub const DEFAULT_PATH: &str = "/bin:/usr/bin";

/// Upper bound on normalization passes in [`resolve_path`](crate::resolve_path).
pub const MAX_RESOLVE_PASSES: usize = 64;

/// Directories whose `cd` also navigates the hosting site to a page.
pub const NAVIGATION_TARGETS: &[(&str, &str)] = &[
    ("/home/autumn/projects", "/projects"),
    ("/home/autumn/blog", "/blog"),
    ("/home/autumn/uses", "/uses"),
];

// =============================================================================
// Rendering Policy
// =============================================================================

/// How `cat` presents a text payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Print the content as text.
    Text,
    /// Treat the content as an image source.
    Image,
}

/// File extensions rendered as images. Matched case-sensitively.
pub const RENDER_MODES: &[(&str, RenderMode)] = &[
    ("jpg", RenderMode::Image),
    ("jpeg", RenderMode::Image),
    ("png", RenderMode::Image),
    ("gif", RenderMode::Image),
    ("webp", RenderMode::Image),
];

/// Pick the render mode for a requested file name.
///
/// Only the suffix after the last `.` of the name as typed is consulted.
pub fn render_mode_for(name: &str) -> RenderMode {
    let extension = name.rsplit('.').next().unwrap_or_default();
    RENDER_MODES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mode)| *mode)
        .unwrap_or(RenderMode::Text)
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Ping probe settings.
pub mod ping {
    /// Number of probes sent by `ping`.
    pub const COUNT: usize = 5;
    /// Delay between consecutive probes in milliseconds.
    pub const INTERVAL_MS: u32 = 1000;
    /// Probe timeout in milliseconds.
    pub const TIMEOUT_MS: u32 = 5000;
}

// =============================================================================
// Presentation Commands
// =============================================================================

/// Steam community profile opened by `steam`.
pub const STEAM_PROFILE_URL: &str = "https://steamcommunity.com/id/_weird_autumn_";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_mode_for() {
        assert_eq!(render_mode_for("cat.png"), RenderMode::Image);
        assert_eq!(render_mode_for("images/photo.jpeg"), RenderMode::Image);
        assert_eq!(render_mode_for("photo.tar.webp"), RenderMode::Image);
        assert_eq!(render_mode_for("notes.txt"), RenderMode::Text);
        assert_eq!(render_mode_for("README"), RenderMode::Text);
    }

    #[test]
    fn test_render_mode_is_case_sensitive() {
        assert_eq!(render_mode_for("photo.PNG"), RenderMode::Text);
    }
}
