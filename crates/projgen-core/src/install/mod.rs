//! Dependency installation after generation
//!
//! Up to three independent steps run in order: the framework's own install
//! command, then the selected CSS framework, then the selected UI library.
//! A failing step is reported as a warning and never stops the others; only
//! cancellation skips the remaining steps.

pub mod cancel;
pub mod command;

pub use cancel::{CancelHandle, Cancellation, Interrupt};
pub use command::{run_in_dir, split_command};

use crate::error::InstallError;
use crate::options::ProjectOptions;
use crate::report::Reporter;
use std::fmt;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Which install step ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStep {
    Dependencies,
    CssFramework,
    UiLibrary,
}

impl fmt::Display for InstallStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InstallStep::Dependencies => "dependencies",
            InstallStep::CssFramework => "CSS framework",
            InstallStep::UiLibrary => "UI library",
        };
        f.write_str(label)
    }
}

/// How a planned step ended
#[derive(Debug)]
pub enum StepStatus {
    Succeeded,
    Failed(InstallError),
    /// Not started because an earlier step was cancelled
    Skipped,
}

#[derive(Debug)]
pub struct InstallOutcome {
    pub step: InstallStep,
    pub command: String,
    pub status: StepStatus,
}

/// Result of the whole install stage. Never an error by itself.
#[derive(Debug, Default)]
pub struct InstallReport {
    pub outcomes: Vec<InstallOutcome>,
}

impl InstallReport {
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn failures(&self) -> impl Iterator<Item = &InstallOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, StepStatus::Failed(_)))
    }

    pub fn all_succeeded(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| matches!(o.status, StepStatus::Succeeded))
    }
}

/// Steps that apply to `options`, with their commands
pub fn planned_steps(options: &ProjectOptions) -> Vec<(InstallStep, String)> {
    let mut steps = Vec::new();

    if options.auto_install && !options.framework.install_cmd.trim().is_empty() {
        steps.push((InstallStep::Dependencies, options.framework.install_cmd.clone()));
    }
    if let Some(css) = options.css_framework.as_ref() {
        if !css.install_cmd.trim().is_empty() {
            steps.push((InstallStep::CssFramework, css.install_cmd.clone()));
        }
    }
    if let Some(ui) = options.ui_library.as_ref() {
        if !ui.install_cmd.trim().is_empty() {
            steps.push((InstallStep::UiLibrary, ui.install_cmd.clone()));
        }
    }

    steps
}

/// Run every applicable install step inside `dir`
#[instrument(skip_all, fields(dir = %dir.display()))]
pub async fn install_all(
    dir: &Path,
    options: &ProjectOptions,
    cancel: &Cancellation,
    reporter: &dyn Reporter,
) -> InstallReport {
    let mut report = InstallReport::default();
    let mut interrupted = false;

    for (step, command) in planned_steps(options) {
        if interrupted {
            report.outcomes.push(InstallOutcome {
                step,
                command,
                status: StepStatus::Skipped,
            });
            continue;
        }

        reporter.step(&format!("Installing {step}: {command}"));
        let status = match run_in_dir(&command, dir, cancel).await {
            Ok(()) => {
                info!(%step, "install step succeeded");
                reporter.success(&format!("Installed {step}"));
                StepStatus::Succeeded
            }
            Err(err) => {
                warn!(%step, error = %err, "install step failed");
                reporter.warning(
                    &format!("Could not install {step}: {err}"),
                    Some(&command),
                );
                if matches!(
                    err,
                    InstallError::Cancelled { .. } | InstallError::DeadlineExceeded { .. }
                ) {
                    interrupted = true;
                }
                StepStatus::Failed(err)
            }
        };

        report.outcomes.push(InstallOutcome {
            step,
            command,
            status,
        });
    }

    report
}
