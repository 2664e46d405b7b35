//! Built-in commands.
//!
//! This module provides:
//! - [`Builtin`] naming every command handler
//! - [`Registry`], the fixed name → (handler, description) table behind
//!   dispatch, `help` and autocompletion
//! - [`CommandResult`] for command execution results
//! - [`Network`], the I/O seam used by `ping`
//!
//! # Architecture
//!
//! The interpreter resolves a command name to a [`Builtin`], either through
//! the registry or through an executable found on `PATH`, then runs it with
//! `execute_builtin`. Handlers write to a [`Renderer`](crate::Renderer) and
//! never fail outward: errors are printed and turned into an exit status.

mod execute;
mod ping;
mod result;
mod tree;

pub(crate) use execute::{CommandContext, execute_builtin, find_in_path};
pub use ping::Network;
pub use result::{CommandResult, ExitStatus, NavigationIntent};

// =============================================================================
// Builtin Enum
// =============================================================================

/// A built-in command handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Ls,
    Echo,
    Cat,
    Cd,
    Pwd,
    Help,
    Clear,
    Ping,
    Whoami,
    Steam,
    Tree,
    Env,
    Which,
    FetchMusic,
}

impl Builtin {
    /// Every builtin, in registry order.
    pub const ALL: [Builtin; 14] = [
        Self::Ls,
        Self::Echo,
        Self::Cat,
        Self::Cd,
        Self::Pwd,
        Self::Help,
        Self::Clear,
        Self::Ping,
        Self::Whoami,
        Self::Steam,
        Self::Tree,
        Self::Env,
        Self::Which,
        Self::FetchMusic,
    ];

    /// Name the command is invoked by.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ls => "ls",
            Self::Echo => "echo",
            Self::Cat => "cat",
            Self::Cd => "cd",
            Self::Pwd => "pwd",
            Self::Help => "help",
            Self::Clear => "clear",
            Self::Ping => "ping",
            Self::Whoami => "whoami",
            Self::Steam => "steam",
            Self::Tree => "tree",
            Self::Env => "env",
            Self::Which => "which",
            Self::FetchMusic => "fetch-music",
        }
    }

    /// One-line description shown by `help`.
    pub fn description(self) -> &'static str {
        match self {
            Self::Ls => "list available directories",
            Self::Echo => "print text",
            Self::Cat => "print file contents",
            Self::Cd => "change directory",
            Self::Pwd => "print working directory",
            Self::Help => "display this message",
            Self::Clear => "clear the terminal",
            Self::Ping => "ping a server",
            Self::Whoami => "about me",
            Self::Steam => "steam",
            Self::Tree => "list directory tree",
            Self::Env => "print environment variables",
            Self::Which => "locate a command",
            Self::FetchMusic => "what I'm listening to",
        }
    }

    /// Find a builtin by its command name (case-sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }
}

// =============================================================================
// Registry
// =============================================================================

/// One registered command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistryEntry {
    pub name: &'static str,
    pub builtin: Builtin,
    pub description: &'static str,
}

impl From<Builtin> for RegistryEntry {
    fn from(builtin: Builtin) -> Self {
        Self {
            name: builtin.name(),
            builtin,
            description: builtin.description(),
        }
    }
}

/// Command table, fixed after construction. Keeps insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    /// Build a registry from entries. Later duplicates of a name are dropped.
    pub fn new(entries: impl IntoIterator<Item = RegistryEntry>) -> Self {
        let mut unique: Vec<RegistryEntry> = Vec::new();
        for entry in entries {
            if !unique.iter().any(|e| e.name == entry.name) {
                unique.push(entry);
            }
        }
        Self { entries: unique }
    }

    /// Registry holding every builtin.
    pub fn builtin() -> Self {
        Self::new(Builtin::ALL.into_iter().map(RegistryEntry::from))
    }

    /// Look up a command by name.
    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    /// Command names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for builtin in Builtin::ALL {
            assert_eq!(Builtin::from_name(builtin.name()), Some(builtin));
        }
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(Builtin::from_name("LS"), None);
        assert_eq!(Builtin::from_name("rm"), None);
    }

    #[test]
    fn test_registry_order() {
        let registry = Registry::builtin();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names.first(), Some(&"ls"));
        assert_eq!(names.last(), Some(&"fetch-music"));
        assert_eq!(names.len(), Builtin::ALL.len());
    }

    #[test]
    fn test_registry_lookup() {
        let registry = Registry::builtin();
        let entry = registry.get("cat").expect("cat is registered");
        assert_eq!(entry.builtin, Builtin::Cat);
        assert_eq!(entry.description, "print file contents");
        assert!(registry.get("cowsay").is_none());
    }

    #[test]
    fn test_registry_drops_duplicates() {
        let registry = Registry::new([
            RegistryEntry::from(Builtin::Ls),
            RegistryEntry {
                name: "ls",
                builtin: Builtin::Tree,
                description: "shadow",
            },
        ]);
        assert_eq!(registry.iter().count(), 1);
        assert_eq!(registry.get("ls").map(|e| e.builtin), Some(Builtin::Ls));
    }
}
