//! User-facing progress reporting
//!
//! The pipeline announces each stage through a [`Reporter`] so the same engine
//! can drive plain console output, the interactive wizard, or nothing but log
//! events. Diagnostics go through `tracing` independently of this seam.

use colored::Colorize;
use tracing::{info, warn};

/// Receives stage notifications from the scaffolding pipeline
pub trait Reporter: Send + Sync {
    /// A stage is starting
    fn step(&self, message: &str);

    /// A stage finished successfully
    fn success(&self, message: &str);

    /// A non-fatal problem, with an optional manual remedy
    fn warning(&self, message: &str, hint: Option<&str>);
}

/// Colored lines on stdout/stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn step(&self, message: &str) {
        println!("{} {}", "→".cyan(), message);
    }

    fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    fn warning(&self, message: &str, hint: Option<&str>) {
        eprintln!("{} {}", "!".yellow().bold(), message.yellow());
        if let Some(hint) = hint {
            eprintln!("  {} {}", "Run manually:".dimmed(), hint.cyan());
        }
    }
}

/// Forwards everything to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn step(&self, message: &str) {
        info!("{message}");
    }

    fn success(&self, message: &str) {
        info!("{message}");
    }

    fn warning(&self, message: &str, hint: Option<&str>) {
        match hint {
            Some(hint) => warn!(hint, "{message}"),
            None => warn!("{message}"),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Reporter;
    use std::sync::Mutex;

    /// Records every notification for assertions
    #[derive(Debug, Default)]
    pub struct RecordingReporter {
        pub events: Mutex<Vec<String>>,
    }

    impl RecordingReporter {
        pub fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }

        pub fn warnings(&self) -> Vec<String> {
            self.events()
                .into_iter()
                .filter(|e| e.starts_with("warning:"))
                .collect()
        }
    }

    impl Reporter for RecordingReporter {
        fn step(&self, message: &str) {
            self.events.lock().unwrap().push(format!("step: {message}"));
        }

        fn success(&self, message: &str) {
            self.events.lock().unwrap().push(format!("success: {message}"));
        }

        fn warning(&self, message: &str, hint: Option<&str>) {
            self.events
                .lock()
                .unwrap()
                .push(format!("warning: {message} [{}]", hint.unwrap_or("")));
        }
    }
}
