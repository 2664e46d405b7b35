//! Tab completion for command names and paths.
//!
//! - Command names come from the [`Registry`]
//! - `cd`, `ls` and `tree` complete directories only
//! - `cat` completes any entry
//!
//! A single match completes in place; several matches yield their common
//! prefix plus the candidates to show.

use crate::commands::Registry;
use crate::filesystem::{DirEntry, VirtualFs};
use crate::resolver::resolve_path;

// ============================================================================
// Public Types
// ============================================================================

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AutocompleteResult {
    /// Single match: replace the input with this value.
    Single(String),
    /// Multiple matches: (input completed to the common prefix, candidates).
    Multiple(String, Vec<String>),
    /// No matches found.
    None,
}

// ============================================================================
// Configuration
// ============================================================================

/// Commands whose operand is a directory.
const DIR_COMMANDS: &[&str] = &["cd", "ls", "tree"];

/// Commands whose operand is any entry.
const FILE_COMMANDS: &[&str] = &["cat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompletionMode {
    Command,
    DirectoryPath,
    FilePath,
    None,
}

impl CompletionMode {
    /// Split `input` into command and operand and pick a mode.
    fn from_input(input: &str) -> (Self, &str, &str) {
        let Some((cmd, rest)) = input.split_once(' ') else {
            return (Self::Command, input, "");
        };

        let mode = if DIR_COMMANDS.contains(&cmd) {
            Self::DirectoryPath
        } else if FILE_COMMANDS.contains(&cmd) {
            Self::FilePath
        } else {
            Self::None
        };

        (mode, cmd, rest.trim_start())
    }
}

// ============================================================================
// Path Parsing
// ============================================================================

/// A partial operand split at its last `/`.
struct ParsedPath<'a> {
    /// Directory prefix as typed (e.g. "projects/" or "").
    dir_part: &'a str,
    /// Name being completed.
    name_part: &'a str,
    /// Absolute directory to search.
    search_dir: String,
}

impl<'a> ParsedPath<'a> {
    fn parse(partial: &'a str, cwd: &str) -> Self {
        let (dir_part, name_part) = match partial.rfind('/') {
            Some(idx) => (&partial[..=idx], &partial[idx + 1..]),
            None => ("", partial),
        };

        let search_dir = if dir_part.is_empty() {
            cwd.to_string()
        } else {
            resolve_path(Some(dir_part), cwd)
        };

        Self {
            dir_part,
            name_part,
            search_dir,
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Complete `input` against the registry and the filesystem seen from `cwd`.
pub fn autocomplete(
    input: &str,
    cwd: &str,
    fs: &VirtualFs,
    registry: &Registry,
) -> AutocompleteResult {
    let input = input.trim_start();
    if input.is_empty() {
        return AutocompleteResult::None;
    }

    match CompletionMode::from_input(input) {
        (CompletionMode::Command, cmd, _) => complete_command(cmd, registry),
        (mode @ (CompletionMode::DirectoryPath | CompletionMode::FilePath), cmd, partial) => {
            complete_path(cmd, partial, cwd, fs, mode == CompletionMode::DirectoryPath)
        }
        (CompletionMode::None, _, _) => AutocompleteResult::None,
    }
}

// ============================================================================
// Command Completion
// ============================================================================

fn complete_command(partial: &str, registry: &Registry) -> AutocompleteResult {
    let matches: Vec<String> = registry
        .names()
        .filter(|name| name.starts_with(partial))
        .map(str::to_string)
        .collect();

    match matches.as_slice() {
        [] => AutocompleteResult::None,
        [only] => AutocompleteResult::Single(format!("{} ", only)),
        _ => AutocompleteResult::Multiple(find_common_prefix(&matches), matches),
    }
}

// ============================================================================
// Path Completion
// ============================================================================

fn complete_path(
    cmd: &str,
    partial: &str,
    cwd: &str,
    fs: &VirtualFs,
    dirs_only: bool,
) -> AutocompleteResult {
    let parsed = ParsedPath::parse(partial, cwd);
    let Some(entries) = fs.list_dir(&parsed.search_dir) else {
        return AutocompleteResult::None;
    };

    let matches: Vec<&DirEntry> = entries
        .iter()
        .filter(|e| (e.is_dir || !dirs_only) && e.name.starts_with(parsed.name_part))
        .collect();

    match matches.as_slice() {
        [] => AutocompleteResult::None,
        [only] => {
            let suffix = if only.is_dir { "/" } else { " " };
            AutocompleteResult::Single(format!(
                "{} {}{}{}",
                cmd, parsed.dir_part, only.name, suffix
            ))
        }
        _ => {
            let names: Vec<String> = matches.iter().map(|e| e.name.clone()).collect();
            let common = find_common_prefix(&names);
            let display = matches
                .iter()
                .map(|e| {
                    if e.is_dir {
                        format!("{}/", e.name)
                    } else {
                        e.name.clone()
                    }
                })
                .collect();
            AutocompleteResult::Multiple(
                format!("{} {}{}", cmd, parsed.dir_part, common),
                display,
            )
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Longest common prefix of `strings`, on char boundaries.
fn find_common_prefix(strings: &[String]) -> String {
    let Some((first, rest)) = strings.split_first() else {
        return String::new();
    };

    let mut prefix_len = first.len();
    for s in rest {
        prefix_len = first
            .char_indices()
            .zip(s.chars())
            .take_while(|((idx, a), b)| *idx < prefix_len && a == b)
            .map(|((idx, a), _)| idx + a.len_utf8())
            .last()
            .unwrap_or(0);
    }

    first[..prefix_len].to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_fs() -> VirtualFs {
        VirtualFs::from_manifest_json(
            r#"{
                "bin": { "ls": { "@exec": "ls" } },
                "home": {
                    "autumn": {
                        "about.txt": "hi",
                        "avatar.png": "/a.png",
                        "projects": { "site": {}, "notes.md": "" },
                        "blog": {},
                        "books": {}
                    }
                }
            }"#,
        )
        .unwrap()
    }

    fn complete(input: &str) -> AutocompleteResult {
        autocomplete(input, "/home/autumn", &test_fs(), &Registry::builtin())
    }

    #[test]
    fn test_command_completion_single() {
        assert_eq!(complete("cle"), AutocompleteResult::Single("clear ".to_string()));
        assert_eq!(
            complete("fetch"),
            AutocompleteResult::Single("fetch-music ".to_string())
        );
    }

    #[test]
    fn test_command_completion_multiple() {
        match complete("c") {
            AutocompleteResult::Multiple(common, matches) => {
                assert_eq!(common, "c");
                assert_eq!(matches, vec!["cat", "cd", "clear"]);
            }
            other => panic!("Expected multiple matches, got {:?}", other),
        }
    }

    #[test]
    fn test_command_completion_is_case_sensitive() {
        assert_eq!(complete("CL"), AutocompleteResult::None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(complete("   "), AutocompleteResult::None);
    }

    #[test]
    fn test_cd_completes_directories_only() {
        assert_eq!(complete("cd a"), AutocompleteResult::None);
        assert_eq!(
            complete("cd p"),
            AutocompleteResult::Single("cd projects/".to_string())
        );
    }

    #[test]
    fn test_multiple_directories() {
        assert_eq!(
            complete("ls b"),
            AutocompleteResult::Multiple(
                "ls b".to_string(),
                vec!["blog/".to_string(), "books/".to_string()]
            )
        );
    }

    #[test]
    fn test_cat_completes_files() {
        assert_eq!(
            complete("cat ab"),
            AutocompleteResult::Single("cat about.txt ".to_string())
        );
        assert_eq!(
            complete("cat a"),
            AutocompleteResult::Multiple(
                "cat a".to_string(),
                vec!["about.txt".to_string(), "avatar.png".to_string()]
            )
        );
    }

    #[test]
    fn test_nested_path() {
        assert_eq!(
            complete("cat projects/n"),
            AutocompleteResult::Single("cat projects/notes.md ".to_string())
        );
        assert_eq!(
            complete("tree projects/"),
            AutocompleteResult::Single("tree projects/site/".to_string())
        );
    }

    #[test]
    fn test_absolute_and_parent_paths() {
        assert_eq!(
            complete("ls /b"),
            AutocompleteResult::Single("ls /bin/".to_string())
        );
        assert_eq!(
            complete("cd ../a"),
            AutocompleteResult::Single("cd ../autumn/".to_string())
        );
    }

    #[test]
    fn test_unknown_directory() {
        assert_eq!(complete("cd nowhere/x"), AutocompleteResult::None);
    }

    #[test]
    fn test_other_commands_do_not_complete_paths() {
        assert_eq!(complete("echo ab"), AutocompleteResult::None);
    }

    #[test]
    fn test_common_prefix() {
        let strings = vec![
            "hello".to_string(),
            "help".to_string(),
            "helicopter".to_string(),
        ];
        assert_eq!(find_common_prefix(&strings), "hel");
        assert_eq!(find_common_prefix(&["blog".to_string(), "books".to_string()]), "b");
        assert_eq!(find_common_prefix(&["x".to_string(), "y".to_string()]), "");
        assert_eq!(find_common_prefix(&[]), "");
    }

    #[test]
    fn test_completion_mode() {
        assert_eq!(CompletionMode::from_input("cd").0, CompletionMode::Command);
        assert_eq!(
            CompletionMode::from_input("cd some/path").0,
            CompletionMode::DirectoryPath
        );
        assert_eq!(
            CompletionMode::from_input("tree x").0,
            CompletionMode::DirectoryPath
        );
        assert_eq!(CompletionMode::from_input("cat f").0, CompletionMode::FilePath);
        assert_eq!(CompletionMode::from_input("whoami arg").0, CompletionMode::None);
    }
}
