//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - focus handling and page navigation
//! - [`BrowserNetwork`] - the `ping` probe backed by the Fetch API

pub mod dom;
mod net;

pub use net::BrowserNetwork;
