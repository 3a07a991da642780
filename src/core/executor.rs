//! Command construction and execution — the thin layer between the CLI and
//! the OS utilities (`tree`, `powershell`) that do the real listing work.
//!
//! Everything here is fail-soft: execution problems come back as text in the
//! stderr slot of [`CommandOutput`], never as an `Err` or a panic.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Captured output of a finished shell command.
///
/// Both fields are always present.  When the command could not be run at all,
/// `stdout` is empty and `stderr` holds the failure description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: message.into(),
        }
    }
}

/// Builds and runs shell commands anchored at a root directory.
///
/// The root path is stored verbatim — no existence check, no normalisation —
/// and is immutable for the executor's lifetime.
pub struct CommandExecutor {
    root_path: PathBuf,
}

impl CommandExecutor {
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
        }
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Run `command` through the host shell and wait for it to finish.
    ///
    /// Blocks the calling thread until the spawned shell exits; there is no
    /// timeout, so a hung command hangs the caller.  Spawn failures are
    /// flattened into `("", <message>)` — callers always get a pair back.
    pub fn execute_command(&self, command: &str) -> CommandOutput {
        tracing::debug!(command, "running shell command");

        let output = host_shell(command).output();
        match output {
            Ok(out) => CommandOutput {
                stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
            },
            Err(err) => {
                tracing::debug!(command, error = %err, "shell spawn failed");
                CommandOutput::failure(err.to_string())
            }
        }
    }

    /// List the tree under the root with the OS-bundled `tree` utility.
    pub fn tree_native(&self) -> CommandOutput {
        self.execute_command(&self.native_tree_command())
    }

    /// List every path under the root, recursively, via the scripting shell.
    pub fn tree_script(&self) -> CommandOutput {
        self.execute_command(&self.script_tree_command())
    }

    /// Like [`tree_script`](Self::tree_script), restricted to the given
    /// extensions (e.g. `".txt"`).  An empty filter lists everything.
    pub fn tree_script_filtered(&self, extensions: &[String]) -> CommandOutput {
        match self.script_tree_filtered_command(extensions) {
            Some(command) => self.execute_command(&command),
            None => self.tree_script(),
        }
    }

    // ── command builders ────────────────────────────────────────

    /// `tree "<root>" /F` — the root is quoted to survive embedded spaces.
    fn native_tree_command(&self) -> String {
        format!("tree \"{}\" /F", self.root_path.display())
    }

    fn script_tree_command(&self) -> String {
        format!(
            "powershell \"Get-ChildItem -Path '{}' -Recurse | Select-Object FullName\"",
            self.root_path.display()
        )
    }

    /// `None` when the filter is empty (caller falls back to the unfiltered
    /// form, so the two produce byte-identical commands).
    fn script_tree_filtered_command(&self, extensions: &[String]) -> Option<String> {
        if extensions.is_empty() {
            return None;
        }
        let filter = extensions
            .iter()
            .map(|ext| format!("*{ext}"))
            .collect::<Vec<_>>()
            .join(",");
        Some(format!(
            "powershell \"Get-ChildItem -Path '{}' -Recurse -Include {} | Select-Object FullName\"",
            self.root_path.display(),
            filter
        ))
    }
}

/// The host's basic command interpreter, primed to run one command string.
fn host_shell(command: &str) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    }
    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_command_quotes_roots_with_spaces() {
        let exec = CommandExecutor::new("/data/my project");
        assert_eq!(
            exec.native_tree_command(),
            "tree \"/data/my project\" /F"
        );
    }

    #[test]
    fn script_command_projects_full_names() {
        let exec = CommandExecutor::new("/data/project");
        let cmd = exec.script_tree_command();
        assert!(cmd.contains("Get-ChildItem"));
        assert!(cmd.contains("-Path '/data/project' -Recurse"));
        assert!(cmd.contains("FullName"));
    }

    #[test]
    fn empty_filter_matches_unfiltered_command() {
        let exec = CommandExecutor::new("/data/project");
        assert_eq!(exec.script_tree_filtered_command(&[]), None);
    }

    #[test]
    fn filter_joins_extensions_as_glob_list() {
        let exec = CommandExecutor::new("/data/project");
        let cmd = exec
            .script_tree_filtered_command(&[".txt".into(), ".md".into()])
            .unwrap();
        assert!(cmd.contains("-Include *.txt,*.md"));
    }

    #[test]
    fn root_path_is_stored_verbatim() {
        // No normalisation — trailing separators and `..` survive as given.
        let exec = CommandExecutor::new("relative/../odd/");
        assert_eq!(exec.root_path(), Path::new("relative/../odd/"));
    }

    #[test]
    fn execute_captures_stdout() {
        let exec = CommandExecutor::new(".");
        let out = exec.execute_command("echo hello");
        assert_eq!(out.stdout.trim(), "hello");
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn failing_command_reports_via_stderr_only() {
        let exec = CommandExecutor::new(".");
        let out = exec.execute_command("definitely-not-a-real-command-9f3a");
        assert!(out.stdout.is_empty());
        assert!(!out.stderr.is_empty());
    }
}
