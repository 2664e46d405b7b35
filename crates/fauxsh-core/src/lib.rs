//! Core of the faux-UNIX site terminal.
//!
//! This crate provides:
//! - [`VirtualFs`] - the static in-memory filesystem and its manifest loader
//! - [`resolve_path`] - textual path normalization against a working directory
//! - [`SessionState`] - working directory and environment carried between commands
//! - [`Registry`] and [`Builtin`] - the built-in command table
//! - [`Interpreter`] - line parsing, dispatch and `PATH` lookup
//! - [`Renderer`] and [`OutputLine`] - the output contract towards the host
//! - [`autocomplete`] - tab completion for command names and paths
//!
//! Nothing in here touches the DOM; the browser front-end plugs in through
//! the [`Renderer`] and [`Network`] traits.

mod autocomplete;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
mod filesystem;
mod interpreter;
mod output;
mod resolver;
mod ring_buffer;
mod session;

pub use autocomplete::{AutocompleteResult, autocomplete};
pub use commands::{
    Builtin, CommandResult, ExitStatus, NavigationIntent, Network, Registry, RegistryEntry,
};
pub use error::{ManifestError, ProbeError, ShellError};
pub use filesystem::{DirEntry, FileContent, FsEntry, VirtualFs};
pub use interpreter::Interpreter;
pub use output::{OutputLine, OutputLineData, Renderer};
pub use resolver::resolve_path;
pub use ring_buffer::RingBuffer;
pub use session::SessionState;
