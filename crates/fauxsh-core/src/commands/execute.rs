//! Command execution logic.
//!
//! Contains `execute_builtin`, which runs one built-in against the virtual
//! filesystem and session, writing its output to the renderer.

use crate::config::{
    self, HOME_DIR, MUSIC_MARKUP, NAVIGATION_TARGETS, RenderMode, STEAM_PROFILE_URL,
    WHOAMI_MARKUP,
};
use crate::error::ShellError;
use crate::filesystem::{FileContent, FsEntry, VirtualFs};
use crate::output::Renderer;
use crate::resolver::resolve_path;
use crate::session::SessionState;

use super::ping::{Network, ping};
use super::tree::render_tree;
use super::{Builtin, CommandResult, Registry};

/// Everything a handler may read or change.
pub(crate) struct CommandContext<'a, R> {
    pub fs: &'a VirtualFs,
    pub registry: &'a Registry,
    pub session: &'a mut SessionState,
    pub out: &'a mut R,
}

/// Execute a builtin and return its result.
///
/// Errors are printed through the renderer and folded into the exit status.
pub(crate) async fn execute_builtin<R: Renderer, N: Network>(
    builtin: Builtin,
    args: &[String],
    ctx: &mut CommandContext<'_, R>,
    net: &N,
) -> CommandResult {
    let result = match builtin {
        Builtin::Ls => execute_ls(args, ctx),
        Builtin::Echo => execute_echo(args, ctx),
        Builtin::Cat => execute_cat(args, ctx),
        Builtin::Cd => execute_cd(args, ctx),
        Builtin::Pwd => {
            ctx.out.append_line(ctx.session.current_dir());
            Ok(CommandResult::success())
        }
        Builtin::Help => execute_help(ctx),
        Builtin::Clear => {
            ctx.out.clear_all();
            Ok(CommandResult::success())
        }
        Builtin::Ping => ping(args, &mut *ctx.out, net).await,
        Builtin::Whoami => {
            ctx.out.append_markup(WHOAMI_MARKUP);
            Ok(CommandResult::success())
        }
        Builtin::Steam => execute_steam(ctx),
        Builtin::Tree => execute_tree(args, ctx),
        Builtin::Env => {
            for (key, value) in ctx.session.vars() {
                ctx.out.append_line(&format!("{}={}", key, value));
            }
            Ok(CommandResult::success())
        }
        Builtin::Which => execute_which(args, ctx),
        Builtin::FetchMusic => {
            ctx.out.append_markup(MUSIC_MARKUP);
            Ok(CommandResult::success())
        }
    };

    result.unwrap_or_else(|err| {
        ctx.out.append_error(&err.to_string());
        CommandResult::from(&err)
    })
}

/// Search `PATH` for an executable named `name`.
///
/// Returns the full path and the bound builtin of the first match.
/// Directories and plain files never match.
pub(crate) fn find_in_path(
    fs: &VirtualFs,
    session: &SessionState,
    name: &str,
) -> Option<(String, Builtin)> {
    session.path_entries().find_map(|dir| {
        let candidate = format!("{}/{}", dir, name);
        match fs.lookup(&candidate) {
            Some(FsEntry::Executable(builtin)) => Some((candidate, *builtin)),
            _ => None,
        }
    })
}

/// Execute `ls` command.
///
/// Directories come first with a `/` suffix, everything on one line.
fn execute_ls<R: Renderer>(
    args: &[String],
    ctx: &mut CommandContext<'_, R>,
) -> Result<CommandResult, ShellError> {
    let operand = args.first().map(String::as_str);
    let path = resolve_path(operand, ctx.session.current_dir());

    match ctx.fs.lookup(&path) {
        Some(FsEntry::Directory(children)) => {
            let (dirs, files): (Vec<_>, Vec<_>) =
                children.iter().partition(|(_, entry)| entry.is_directory());
            let listing: Vec<String> = dirs
                .into_iter()
                .map(|(name, _)| format!("{}/", name))
                .chain(files.into_iter().map(|(name, _)| name.clone()))
                .collect();
            ctx.out.append_line(&listing.join(" "));
            Ok(CommandResult::success())
        }
        Some(FsEntry::File(_) | FsEntry::Executable(_)) => {
            ctx.out.append_line(operand.unwrap_or(&path));
            Ok(CommandResult::success())
        }
        None => Err(ShellError::CannotAccess(
            operand.unwrap_or(&path).to_string(),
        )),
    }
}

/// Execute `echo` command.
fn execute_echo<R: Renderer>(
    args: &[String],
    ctx: &mut CommandContext<'_, R>,
) -> Result<CommandResult, ShellError> {
    let text = ctx.session.expand_vars(&args.join(" "));
    ctx.out.append_line(&text);
    Ok(CommandResult::success())
}

/// Execute `cat` command.
fn execute_cat<R: Renderer>(
    args: &[String],
    ctx: &mut CommandContext<'_, R>,
) -> Result<CommandResult, ShellError> {
    let file = args.first().ok_or(ShellError::MissingOperand("cat"))?;
    let path = resolve_path(Some(file), ctx.session.current_dir());

    match ctx.fs.lookup(&path) {
        None => Err(ShellError::NotFound {
            command: "cat",
            operand: file.clone(),
        }),
        Some(FsEntry::Directory(_)) => Err(ShellError::IsADirectory {
            command: "cat",
            operand: file.clone(),
        }),
        Some(FsEntry::Executable(builtin)) => {
            ctx.out.append_line(&describe_executable(*builtin));
            Ok(CommandResult::success())
        }
        Some(FsEntry::File(FileContent::Text(content))) => {
            match config::render_mode_for(file) {
                RenderMode::Image => ctx.out.append_image(content),
                RenderMode::Text => ctx.out.append_line(content),
            }
            Ok(CommandResult::success())
        }
        Some(FsEntry::File(FileContent::Binary(_))) => Err(ShellError::UnsupportedType),
    }
}

/// Text shown when `cat` is pointed at an executable.
fn describe_executable(builtin: Builtin) -> String {
    format!(
        "{}: shell builtin - {}",
        builtin.name(),
        builtin.description()
    )
}

/// Execute `cd` command.
///
/// Without an operand, changes to [`HOME_DIR`].
fn execute_cd<R: Renderer>(
    args: &[String],
    ctx: &mut CommandContext<'_, R>,
) -> Result<CommandResult, ShellError> {
    let target = args.first().map(String::as_str).unwrap_or(HOME_DIR);
    let path = resolve_path(Some(target), ctx.session.current_dir());

    match ctx.fs.lookup(&path) {
        None => Err(ShellError::DirectoryNotFound(path)),
        Some(FsEntry::File(_) | FsEntry::Executable(_)) => Err(ShellError::NotADirectory {
            command: "cd",
            operand: path,
        }),
        Some(FsEntry::Directory(_)) => {
            let page = NAVIGATION_TARGETS
                .iter()
                .find(|(dir, _)| *dir == path)
                .map(|(_, page)| *page);
            ctx.session.set_current_dir(path);

            Ok(page.map_or_else(CommandResult::success, |page| CommandResult::navigate(page)))
        }
    }
}

/// Execute `help` command.
fn execute_help<R: Renderer>(ctx: &mut CommandContext<'_, R>) -> Result<CommandResult, ShellError> {
    ctx.out.append_line("Available commands:");
    for entry in ctx.registry.iter() {
        ctx.out
            .append_line(&format!("{} - {}", entry.name, entry.description));
    }
    Ok(CommandResult::success())
}

/// Execute `steam` command.
fn execute_steam<R: Renderer>(
    ctx: &mut CommandContext<'_, R>,
) -> Result<CommandResult, ShellError> {
    ctx.out.append_markup(&format!(
        r#"Opening <a href="{}" target="_blank">Steam profile</a>"#,
        STEAM_PROFILE_URL
    ));
    Ok(CommandResult::navigate(format!(
        "steam://openurl/{}",
        STEAM_PROFILE_URL
    )))
}

/// Execute `tree` command.
fn execute_tree<R: Renderer>(
    args: &[String],
    ctx: &mut CommandContext<'_, R>,
) -> Result<CommandResult, ShellError> {
    let operand = args.first().map(String::as_str);
    let path = resolve_path(operand, ctx.session.current_dir());
    let entry = ctx.fs.lookup(&path).ok_or_else(|| ShellError::NotFound {
        command: "tree",
        operand: operand.unwrap_or(&path).to_string(),
    })?;

    ctx.out.append_line(".");
    if let Some(children) = entry.children() {
        for line in render_tree(children) {
            ctx.out.append_line(&line);
        }
    }
    Ok(CommandResult::success())
}

/// Execute `which` command.
///
/// Only `PATH` is searched; registered names without an executable on
/// `PATH` are reported as not found.
fn execute_which<R: Renderer>(
    args: &[String],
    ctx: &mut CommandContext<'_, R>,
) -> Result<CommandResult, ShellError> {
    let name = args.first().ok_or(ShellError::MissingOperand("which"))?;
    let (path, _) = find_in_path(ctx.fs, ctx.session, name)
        .ok_or_else(|| ShellError::WhichNotFound(name.clone()))?;
    ctx.out.append_line(&path);
    Ok(CommandResult::success())
}

// =============================================================================
// Tests
// =============================================================================
