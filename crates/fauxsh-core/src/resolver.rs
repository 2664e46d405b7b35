//! Path normalization.
//!
//! Normalization is textual: the rewrite rules below are applied to the path
//! string until it stops changing. `/<segment>/..` removes the nearest
//! preceding segment whatever it is, so a `..` that follows another `..` is
//! not treated like a real path stack (`/a/../../b` becomes `/../b`).

use std::sync::LazyLock;

use regex::Regex;

use crate::config::MAX_RESOLVE_PASSES;

/// `/<segment>/..` → ``
static PARENT_SEGMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/[^/]+/\.\.").unwrap());

/// `/./` → `/`
static CURRENT_SEGMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/\./").unwrap());

/// `//...` → `/`
static REPEATED_SLASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/+").unwrap());

/// Resolve a user-typed path against the current directory.
///
/// - `None` or an empty input yields `cwd` unchanged.
/// - Relative input is prefixed with `cwd + "/"`.
/// - The result always starts with `/`; a trailing slash is kept.
///
/// Never fails: malformed input gives a best-effort string.
pub fn resolve_path(input: Option<&str>, cwd: &str) -> String {
    let input = match input {
        Some(p) if !p.is_empty() => p,
        _ => return cwd.to_string(),
    };

    let mut path = if input.starts_with('/') {
        input.to_string()
    } else {
        format!("{}/{}", cwd, input)
    };

    for _ in 0..MAX_RESOLVE_PASSES {
        let next = normalize_once(&path);
        if next == path {
            break;
        }
        path = next;
    }

    if path.starts_with('/') {
        path
    } else {
        format!("/{}", path)
    }
}

/// Apply each rewrite rule once, in order.
fn normalize_once(path: &str) -> String {
    let path = PARENT_SEGMENT.replace_all(path, "");
    let path = CURRENT_SEGMENT.replace_all(&path, "/");
    REPEATED_SLASHES.replace_all(&path, "/").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_cwd() {
        assert_eq!(resolve_path(None, "/home/autumn"), "/home/autumn");
        assert_eq!(resolve_path(Some(""), "/home/autumn"), "/home/autumn");
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(resolve_path(Some("blog"), "/home/autumn"), "/home/autumn/blog");
        assert_eq!(resolve_path(Some("a"), "/"), "/a");
        assert_eq!(resolve_path(Some("./a"), "/home"), "/home/a");
    }

    #[test]
    fn test_absolute_path_ignores_cwd() {
        assert_eq!(resolve_path(Some("/bin"), "/home/autumn"), "/bin");
    }

    #[test]
    fn test_parent_removes_one_segment() {
        assert_eq!(resolve_path(Some("/home/autumn/../root"), "/"), "/home/root");
        assert_eq!(resolve_path(Some(".."), "/home/autumn"), "/home");
        assert_eq!(resolve_path(Some("../.."), "/home/autumn"), "/");
        assert_eq!(resolve_path(Some("a/b/c/../../d"), "/"), "/a/d");
    }

    #[test]
    fn test_parent_of_top_level_is_root() {
        assert_eq!(resolve_path(Some(".."), "/a"), "/");
    }

    #[test]
    fn test_collapses_current_and_slashes() {
        assert_eq!(resolve_path(Some("/home/./autumn"), "/"), "/home/autumn");
        assert_eq!(resolve_path(Some("/home/././autumn"), "/"), "/home/autumn");
        assert_eq!(resolve_path(Some("//home///autumn"), "/"), "/home/autumn");
        assert_eq!(resolve_path(Some("a"), "/home/"), "/home/a");
    }

    #[test]
    fn test_trailing_slash_is_kept() {
        assert_eq!(resolve_path(Some("/home/autumn/"), "/"), "/home/autumn/");
    }

    // Textual collapse: the second `..` has no real segment left to remove.
    #[test]
    fn test_parent_after_parent_is_textual() {
        assert_eq!(resolve_path(Some("/a/../../b"), "/"), "/../b");
        assert_eq!(resolve_path(Some("/.."), "/"), "/..");
    }

    #[test]
    fn test_idempotent() {
        for input in ["/home/autumn/../root", "a/./b//c/..", "/a/../../b", "../x/", "."] {
            let once = resolve_path(Some(input), "/home/autumn");
            assert_eq!(resolve_path(Some(&once), "/home/autumn"), once, "input {input}");
        }
    }
}
