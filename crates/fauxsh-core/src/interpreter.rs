//! Line interpreter: tokenizing, dispatch and `PATH` lookup.

use crate::commands::{
    Builtin, CommandContext, CommandResult, Network, Registry, execute_builtin, find_in_path,
};
use crate::error::ShellError;
use crate::filesystem::VirtualFs;
use crate::output::Renderer;
use crate::session::SessionState;

/// Runs submitted lines against a filesystem and a command registry.
///
/// The interpreter itself is immutable; everything a line changes lives in
/// the [`SessionState`] and the [`Renderer`] passed to [`execute`](Self::execute).
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    fs: VirtualFs,
    registry: Registry,
}

impl Interpreter {
    /// Interpreter over `fs` with every builtin registered.
    pub fn new(fs: VirtualFs) -> Self {
        Self::with_registry(fs, Registry::builtin())
    }

    pub fn with_registry(fs: VirtualFs, registry: Registry) -> Self {
        Self { fs, registry }
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Resolve a command name: the registry first, then executables on `PATH`.
    pub fn resolve_command(&self, name: &str, session: &SessionState) -> Option<Builtin> {
        self.registry
            .get(name)
            .map(|entry| entry.builtin)
            .or_else(|| find_in_path(&self.fs, session, name).map(|(_, builtin)| builtin))
    }

    /// Execute one input line.
    ///
    /// A blank line does nothing and succeeds. An unknown command prints
    /// `<name>: command not found` and exits with 1.
    pub async fn execute<R: Renderer, N: Network>(
        &self,
        line: &str,
        session: &mut SessionState,
        out: &mut R,
        net: &N,
    ) -> CommandResult {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return CommandResult::success();
        };
        let args: Vec<String> = tokens.map(String::from).collect();

        let Some(builtin) = self.resolve_command(name, session) else {
            let err = ShellError::CommandNotFound(name.to_string());
            out.append_error(&err.to_string());
            return CommandResult::from(&err);
        };

        let mut ctx = CommandContext {
            fs: &self.fs,
            registry: &self.registry,
            session,
            out,
        };
        execute_builtin(builtin, &args, &mut ctx, net).await
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::commands::{ExitStatus, RegistryEntry};
    use crate::error::ProbeError;
    use crate::output::{OutputLine, OutputLineData};
    use crate::ring_buffer::RingBuffer;

    struct InstantNetwork;

    impl Network for InstantNetwork {
        async fn probe(&self, _address: &str) -> Result<Duration, ProbeError> {
            Ok(Duration::from_millis(3))
        }

        async fn sleep(&self, _duration: Duration) {}
    }

    fn interpreter() -> Interpreter {
        let fs = VirtualFs::from_manifest_json(
            r#"{
                "usr": { "bin": { "list": { "@exec": "ls" }, "folder": {} } },
                "home": { "autumn": { "note.txt": "remember" } }
            }"#,
        )
        .unwrap();
        Interpreter::new(fs)
    }

    fn session() -> SessionState {
        SessionState::new(
            "/home/autumn",
            [("PATH".to_string(), "/bin:/usr/bin".to_string())],
        )
    }

    async fn run(
        interp: &Interpreter,
        session: &mut SessionState,
        line: &str,
    ) -> (CommandResult, Vec<OutputLineData>) {
        let mut out: RingBuffer<OutputLine> = RingBuffer::new(64);
        let result = interp.execute(line, session, &mut out, &InstantNetwork).await;
        (result, out.iter().map(|l| l.data.clone()).collect())
    }

    #[tokio::test]
    async fn test_blank_line_is_noop() {
        let interp = interpreter();
        let mut s = session();
        for line in ["", "   ", "\t"] {
            let (result, out) = run(&interp, &mut s, line).await;
            assert_eq!(result, CommandResult::success());
            assert!(out.is_empty());
        }
    }

    #[tokio::test]
    async fn test_registry_dispatch_with_extra_whitespace() {
        let interp = interpreter();
        let mut s = session();
        let (result, out) = run(&interp, &mut s, "  echo   a    b ").await;
        assert!(result.exit_status.is_success());
        assert_eq!(out, vec![OutputLineData::Text("a b".to_string())]);
    }

    #[tokio::test]
    async fn test_command_not_found() {
        let interp = interpreter();
        let mut s = session();
        let (result, out) = run(&interp, &mut s, "rm -rf /").await;
        assert_eq!(result.exit_status, ExitStatus::FAILURE);
        assert_eq!(
            out,
            vec![OutputLineData::Error("rm: command not found".to_string())]
        );
    }

    #[tokio::test]
    async fn test_path_fallback_runs_bound_builtin() {
        let interp = interpreter();
        let mut s = session();
        let (result, out) = run(&interp, &mut s, "list").await;
        assert!(result.exit_status.is_success());
        assert_eq!(out, vec![OutputLineData::Text("note.txt".to_string())]);
    }

    #[tokio::test]
    async fn test_path_directory_is_not_a_command() {
        let interp = interpreter();
        let mut s = session();
        let (result, _) = run(&interp, &mut s, "folder").await;
        assert_eq!(result.exit_status, ExitStatus::FAILURE);
    }

    #[tokio::test]
    async fn test_path_fallback_respects_session_path() {
        let interp = interpreter();
        let mut s = SessionState::new("/", [("PATH".to_string(), "/bin".to_string())]);
        let (result, _) = run(&interp, &mut s, "list").await;
        assert_eq!(result.exit_status, ExitStatus::FAILURE);
    }

    #[tokio::test]
    async fn test_ping_through_interpreter() {
        let interp = interpreter();
        let mut s = session();
        let (result, out) = run(&interp, &mut s, "ping example.com").await;
        assert!(result.exit_status.is_success());
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn test_resolve_command_prefers_registry() {
        let interp = interpreter();
        let s = session();
        assert_eq!(interp.resolve_command("ls", &s), Some(Builtin::Ls));
        assert_eq!(interp.resolve_command("list", &s), Some(Builtin::Ls));
        assert_eq!(interp.resolve_command("LS", &s), None);
    }

    #[tokio::test]
    async fn test_custom_registry_limits_commands() {
        let interp = Interpreter::with_registry(
            interpreter().fs().clone(),
            Registry::new([RegistryEntry::from(Builtin::Pwd)]),
        );
        let mut s = session();
        let (result, out) = run(&interp, &mut s, "pwd").await;
        assert!(result.exit_status.is_success());
        assert_eq!(out, vec![OutputLineData::Text("/home/autumn".to_string())]);

        let (result, _) = run(&interp, &mut s, "echo hi").await;
        assert_eq!(result.exit_status, ExitStatus::FAILURE);
    }
}
