//! Root application module.
//!
//! Contains the main App component, AppContext definition and TerminalState.

use std::sync::Arc;

use fauxsh_core::config::HOME_DIR;
use fauxsh_core::{Interpreter, OutputLine, Renderer, RingBuffer, SessionState, VirtualFs, console};
use leptos::prelude::*;

use crate::components::terminal::Terminal;
use crate::config::{
    FILESYSTEM_MANIFEST, HOST_NAME, MAX_COMMAND_HISTORY, MAX_TERMINAL_HISTORY, USER_NAME,
    WELCOME_MESSAGE, default_env,
};

// ============================================================================
// TerminalState
// ============================================================================

/// Terminal state managed with Leptos signals.
///
/// Output uses a [`RingBuffer`] bounded by `MAX_TERMINAL_HISTORY`. The struct
/// is `Copy` since every field is a signal.
#[derive(Clone, Copy)]
pub struct TerminalState {
    /// Rendered output.
    pub history: RwSignal<RingBuffer<OutputLine>>,
    /// Working directory and environment.
    pub session: RwSignal<SessionState>,
    /// Submitted lines for up/down recall.
    pub command_history: RwSignal<Vec<String>>,
    /// Current position in command history while recalling.
    pub history_index: RwSignal<Option<usize>>,
    /// True while a command is in flight; the input is hidden meanwhile.
    pub running: RwSignal<bool>,
}

impl TerminalState {
    pub fn new() -> Self {
        Self {
            history: RwSignal::new(RingBuffer::new(MAX_TERMINAL_HISTORY)),
            session: RwSignal::new(SessionState::new(HOME_DIR, default_env())),
            command_history: RwSignal::new(Vec::new()),
            history_index: RwSignal::new(None),
            running: RwSignal::new(false),
        }
    }

    /// Appends a single output line.
    pub fn push_output(&self, line: OutputLine) {
        self.history.update(|h| h.push(line));
    }

    /// Prompt for the current directory, with the home directory shown as `~`.
    ///
    /// Format: `{user}@{host}:{path}`
    pub fn get_prompt(&self) -> String {
        self.session.with(|s| {
            let cwd = s.current_dir();
            let display = match cwd.strip_prefix(HOME_DIR) {
                Some(rest) if rest.is_empty() || rest.starts_with('/') => format!("~{}", rest),
                _ => cwd.to_string(),
            };
            format!("{}@{}:{}", USER_NAME, HOST_NAME, display)
        })
    }

    pub fn add_to_command_history(&self, cmd: &str) {
        if !cmd.trim().is_empty() {
            self.command_history.update(|h| {
                if h.last().map(|s| s.as_str()) != Some(cmd) {
                    h.push(cmd.to_string());
                    if h.len() > MAX_COMMAND_HISTORY {
                        h.remove(0);
                    }
                }
            });
        }
        self.history_index.set(None);
    }

    /// Step through command history. Negative `direction` goes back.
    pub fn navigate_history(&self, direction: i32) -> Option<String> {
        let history = self.command_history.get();
        if history.is_empty() {
            return None;
        }

        let current_index = self.history_index.get();
        let new_index = match current_index {
            None if direction < 0 => Some(history.len() - 1),
            Some(i) if direction < 0 && i > 0 => Some(i - 1),
            Some(i) if direction > 0 && i < history.len() - 1 => Some(i + 1),
            Some(_) if direction > 0 => None,
            _ => current_index,
        };

        self.history_index.set(new_index);
        new_index.map(|i| history[i].clone())
    }
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new()
    }
}

/// Commands write straight into the history signal, so output of a running
/// command (e.g. `ping`) shows up as it is produced.
impl Renderer for TerminalState {
    fn append_line(&mut self, text: &str) {
        self.push_output(OutputLine::text(text));
    }

    fn append_error(&mut self, text: &str) {
        self.push_output(OutputLine::error(text));
    }

    fn append_markup(&mut self, html: &str) {
        self.push_output(OutputLine::markup(html));
    }

    fn append_image(&mut self, src: &str) {
        self.push_output(OutputLine::image(src));
    }

    fn clear_all(&mut self) {
        self.history.update(|h| h.clear());
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context, provided at the root.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub terminal: TerminalState,

    /// Interpreter over the mounted filesystem.
    pub interpreter: StoredValue<Arc<Interpreter>>,
}

impl AppContext {
    /// Creates the context and mounts the site filesystem.
    pub fn new() -> Self {
        let terminal = TerminalState::new();
        let fs = match VirtualFs::from_manifest_json(FILESYSTEM_MANIFEST) {
            Ok(fs) => {
                terminal.push_output(OutputLine::text(WELCOME_MESSAGE));
                fs
            }
            Err(e) => {
                console::error(&format!("Failed to load filesystem: {}", e));
                terminal.push_output(OutputLine::error(format!("Failed to load filesystem: {}", e)));
                VirtualFs::empty()
            }
        };

        Self {
            terminal,
            interpreter: StoredValue::new(Arc::new(Interpreter::new(fs))),
        }
    }

    pub fn get_prompt(&self) -> String {
        self.terminal.get_prompt()
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #1e1e2e;
                    color: #cdd6f4;
                    font-family: monospace;
                ">
                    <h1 style="color: #f38ba8; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #f38ba8; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #89b4fa;
                            color: #1e1e2e;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 4px;
                            cursor: pointer;
                            font-family: monospace;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Terminal />
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_loads() {
        let fs = VirtualFs::from_manifest_json(FILESYSTEM_MANIFEST).expect("bundled manifest");
        assert!(fs.is_directory(HOME_DIR));
        assert!(fs.lookup("/bin/ls").is_some());
    }

    #[test]
    fn test_default_env_has_path() {
        let session = SessionState::new(HOME_DIR, default_env());
        assert_eq!(session.var("PATH"), Some("/bin:/usr/bin"));
        assert_eq!(session.var("HOME"), Some(HOME_DIR));
    }
}
