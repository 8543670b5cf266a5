//! Pipeline progress rendered as cliclack log lines

use crate::report::Reporter;

/// Reports each stage inside the wizard's cliclack frame
#[derive(Debug, Default, Clone, Copy)]
pub struct ClackReporter;

// Output failures are not worth aborting a scaffold for
impl Reporter for ClackReporter {
    fn step(&self, message: &str) {
        let _ = cliclack::log::step(message);
    }

    fn success(&self, message: &str) {
        let _ = cliclack::log::success(message);
    }

    fn warning(&self, message: &str, hint: Option<&str>) {
        let text = match hint {
            Some(hint) => format!("{message}\nRun manually: {hint}"),
            None => message.to_string(),
        };
        let _ = cliclack::log::warning(text);
    }
}
