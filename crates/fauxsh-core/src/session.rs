//! Per-session shell state.
//!
//! Holds the working directory and the environment. Created when the session
//! starts and discarded with it; only `cd` changes the working directory.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::DEFAULT_PATH;

/// `$UPPER_SNAKE` references substituted by `echo`.
static VARIABLE_REF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$([A-Z_]+)").unwrap());

/// Working directory and environment of one terminal session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    current_dir: String,
    environment: BTreeMap<String, String>,
}

impl SessionState {
    /// Start a session in `current_dir`.
    ///
    /// `PATH` is set to [`DEFAULT_PATH`] when `environment` does not define it.
    pub fn new(
        current_dir: impl Into<String>,
        environment: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        let mut environment: BTreeMap<String, String> = environment.into_iter().collect();
        environment
            .entry("PATH".to_string())
            .or_insert_with(|| DEFAULT_PATH.to_string());

        Self {
            current_dir: current_dir.into(),
            environment,
        }
    }

    /// Current working directory.
    pub fn current_dir(&self) -> &str {
        &self.current_dir
    }

    /// Change the working directory. The caller validates the target.
    pub fn set_current_dir(&mut self, path: impl Into<String>) {
        self.current_dir = path.into();
    }

    /// Look up an environment variable.
    pub fn var(&self, key: &str) -> Option<&str> {
        self.environment.get(key).map(String::as_str)
    }

    /// All environment variables in key order.
    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.environment
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Directories listed in `PATH`, in search order.
    pub fn path_entries(&self) -> impl Iterator<Item = &str> {
        self.var("PATH").unwrap_or_default().split(':')
    }

    /// Substitute `$UPPER_SNAKE` references; unset variables become empty.
    pub fn expand_vars(&self, text: &str) -> String {
        VARIABLE_REF
            .replace_all(text, |caps: &Captures| {
                self.var(&caps[1]).unwrap_or_default().to_string()
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_path_inserted() {
        let session = SessionState::new("/", vars(&[]));
        assert_eq!(session.var("PATH"), Some(DEFAULT_PATH));
    }

    #[test]
    fn test_existing_path_kept() {
        let session = SessionState::new("/", vars(&[("PATH", "/opt/bin")]));
        assert_eq!(session.var("PATH"), Some("/opt/bin"));
        assert_eq!(session.path_entries().collect::<Vec<_>>(), vec!["/opt/bin"]);
    }

    #[test]
    fn test_path_entries_order() {
        let session = SessionState::new("/", vars(&[("PATH", "/usr/bin:/bin")]));
        assert_eq!(
            session.path_entries().collect::<Vec<_>>(),
            vec!["/usr/bin", "/bin"]
        );
    }

    #[test]
    fn test_expand_vars() {
        let session = SessionState::new("/", vars(&[("USER", "autumn"), ("MY_VAR", "x")]));
        assert_eq!(session.expand_vars("hi $USER"), "hi autumn");
        assert_eq!(session.expand_vars("$MY_VAR-$MY_VAR"), "x-x");
        assert_eq!(session.expand_vars("home is $HOME"), "home is ");
    }

    #[test]
    fn test_expand_vars_only_upper_snake() {
        let session = SessionState::new("/", vars(&[("USER", "autumn")]));
        assert_eq!(session.expand_vars("$user"), "$user");
        assert_eq!(session.expand_vars("$USER1"), "autumn1");
        assert_eq!(session.expand_vars("cost: $"), "cost: $");
    }

    #[test]
    fn test_set_current_dir() {
        let mut session = SessionState::new("/", vars(&[]));
        session.set_current_dir("/home");
        assert_eq!(session.current_dir(), "/home");
    }
}
