//! Custom hooks for terminal components.

use leptos::prelude::*;

/// State for cycling through Tab completions.
///
/// When a completion has several candidates, repeated Tab presses walk
/// through them.
#[derive(Clone, Copy)]
pub struct TabCycleState {
    /// Candidates shown below the input.
    pub matches: RwSignal<Vec<String>>,
    /// Index of the selected candidate.
    pub index: RwSignal<usize>,
    /// Input completed to the common prefix.
    pub base: RwSignal<String>,
}

impl TabCycleState {
    pub fn new() -> Self {
        Self {
            matches: RwSignal::new(vec![]),
            index: RwSignal::new(0),
            base: RwSignal::new(String::new()),
        }
    }

    /// Check if currently in Tab cycling mode (has matches).
    pub fn is_active(&self) -> bool {
        self.matches.with(|m| !m.is_empty())
    }

    pub fn clear(&self) {
        self.matches.set(vec![]);
        self.index.set(0);
        self.base.set(String::new());
    }

    /// Select the next candidate, wrapping around.
    pub fn advance(&self) {
        let len = self.matches.with(Vec::len);
        if len > 0 {
            self.index.update(|i| *i = (*i + 1) % len);
        }
    }

    pub fn start(&self, base: String, matches: Vec<String>) {
        self.base.set(base);
        self.matches.set(matches);
        self.index.set(0);
    }

    /// Input with the selected candidate in place of the word being completed.
    ///
    /// The word starts after the last space or `/` of the base.
    pub fn build_completion(&self) -> Option<String> {
        let selected = self.matches.with(|m| m.get(self.index.get()).cloned())?;
        Some(self.base.with(|base| match base.rfind([' ', '/']) {
            Some(idx) => format!("{}{}", &base[..=idx], selected),
            None => selected,
        }))
    }
}

impl Default for TabCycleState {
    fn default() -> Self {
        Self::new()
    }
}
