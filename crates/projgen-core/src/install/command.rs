//! Running a declared command string inside the project directory

use super::cancel::{Cancellation, Interrupt};
use crate::error::InstallError;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, instrument};

/// Split a command on whitespace into program and arguments.
///
/// There is no quoting or shell interpretation: `npm install "a b"` yields
/// the arguments `"a` and `b"`.
pub fn split_command(command: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = command.split_whitespace();
    let program = parts.next()?;
    Some((program, parts.collect()))
}

fn interrupt_error(interrupt: Interrupt, command: &str) -> InstallError {
    let command = command.to_string();
    match interrupt {
        Interrupt::Cancelled => InstallError::Cancelled { command },
        Interrupt::DeadlineExceeded => InstallError::DeadlineExceeded { command },
    }
}

/// Run `command` with `dir` as working directory and inherited stdio.
///
/// Firing `cancel` (or passing its deadline) kills the child.
#[instrument(skip(dir, cancel), fields(dir = %dir.display()))]
pub async fn run_in_dir(
    command: &str,
    dir: &Path,
    cancel: &Cancellation,
) -> Result<(), InstallError> {
    let (program, args) = split_command(command).ok_or(InstallError::EmptyCommand)?;

    if let Some(interrupt) = cancel.interrupted() {
        return Err(interrupt_error(interrupt, command));
    }

    let mut child = Command::new(program)
        .args(&args)
        .current_dir(dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| InstallError::Launch {
            program: program.to_string(),
            source,
        })?;

    tokio::select! {
        status = child.wait() => {
            let status = status.map_err(|source| InstallError::Wait {
                command: command.to_string(),
                source,
            })?;
            debug!(%status, "command finished");
            if status.success() {
                Ok(())
            } else {
                Err(InstallError::Failed {
                    command: command.to_string(),
                    code: status.code(),
                })
            }
        }
        interrupt = cancel.cancelled() => {
            let _ = child.kill().await;
            Err(interrupt_error(interrupt, command))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command() {
        assert_eq!(
            split_command("npm install -D  tailwindcss"),
            Some(("npm", vec!["install", "-D", "tailwindcss"]))
        );
        assert_eq!(split_command("go"), Some(("go", vec![])));
        assert_eq!(split_command("   "), None);
        assert_eq!(split_command(""), None);
    }

    #[test]
    fn test_split_command_has_no_quoting() {
        let (_, args) = split_command(r#"echo "a b""#).unwrap();
        assert_eq!(args, vec!["\"a", "b\""]);
    }

    #[tokio::test]
    async fn test_empty_command() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_in_dir("  ", dir.path(), &Cancellation::never())
            .await
            .unwrap_err();
        assert!(matches!(err, InstallError::EmptyCommand));
    }

    #[tokio::test]
    async fn test_missing_program_fails_to_launch() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_in_dir(
            "projgen-surely-missing-binary --flag",
            dir.path(),
            &Cancellation::never(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, InstallError::Launch { ref program, .. } if program == "projgen-surely-missing-binary"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_runs_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        run_in_dir("touch marker", dir.path(), &Cancellation::never())
            .await
            .unwrap();
        assert!(dir.path().join("marker").exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_in_dir("false", dir.path(), &Cancellation::never())
            .await
            .unwrap_err();
        assert!(matches!(err, InstallError::Failed { code: Some(1), .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_cancel_kills_child() {
        let dir = tempfile::tempdir().unwrap();
        let (handle, cancel) = Cancellation::pair();

        let started = std::time::Instant::now();
        let run = tokio::spawn({
            let dir = dir.path().to_path_buf();
            async move { run_in_dir("sleep 5", &dir, &cancel).await }
        });
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        handle.cancel();

        let err = run.await.unwrap().unwrap_err();
        assert!(matches!(err, InstallError::Cancelled { .. }));
        assert!(started.elapsed() < std::time::Duration::from_secs(4));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_deadline_kills_child() {
        let dir = tempfile::tempdir().unwrap();
        let cancel = Cancellation::never().with_timeout(std::time::Duration::from_millis(100));
        let err = run_in_dir("sleep 5", dir.path(), &cancel).await.unwrap_err();
        assert!(matches!(err, InstallError::DeadlineExceeded { .. }));
    }

    #[tokio::test]
    async fn test_already_cancelled_does_not_spawn() {
        let dir = tempfile::tempdir().unwrap();
        let (handle, cancel) = Cancellation::pair();
        handle.cancel();
        let err = run_in_dir("projgen-surely-missing-binary", dir.path(), &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, InstallError::Cancelled { .. }));
    }
}
