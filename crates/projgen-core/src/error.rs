//! Error types for the scaffolding pipeline
//!
//! Validation, rendering, fallback and extras failures are fatal and surface as
//! [`ScaffoldError`]. Install failures are [`InstallError`]s and are turned into
//! warnings by the install orchestrator instead of being propagated.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while scaffolding a project
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Project name is required")]
    EmptyProjectName,

    #[error("Project name '{name}' must be a single directory name")]
    InvalidProjectName { name: String },

    #[error("Destination conflicts with an existing file: {}", .path.display())]
    DestinationIsFile { path: PathBuf },

    #[error("Destination directory is not empty: {}", .path.display())]
    DestinationNotEmpty { path: PathBuf },

    #[error("Failed to prepare destination {}", .path.display())]
    Destination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Template rendering failed")]
    Render(#[from] RenderError),

    #[error("Failed to generate fallback skeleton at {}", .path.display())]
    Fallback {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write extra file {}", .path.display())]
    Extras {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Scaffolding was cancelled")]
    Cancelled,
}

/// Errors raised while walking and rendering a template tree
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to walk template tree")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to read template file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to render template {}", .path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors raised by a single dependency-installation command
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Command is empty")]
    EmptyCommand,

    #[error("Failed to launch '{program}'")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to wait for '{command}'")]
    Wait {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("'{command}' exited with {}", exit_code_label(.code))]
    Failed { command: String, code: Option<i32> },

    #[error("'{command}' was cancelled")]
    Cancelled { command: String },

    #[error("'{command}' exceeded the install deadline")]
    DeadlineExceeded { command: String },
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "a signal".to_string(),
    }
}

/// Errors raised while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse catalog {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// A name given on the command line that the catalog cannot satisfy
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Unknown framework '{name}'. Available: {available}")]
    UnknownFramework { name: String, available: String },

    #[error("Unknown {kind} '{name}'")]
    UnknownAddon { kind: &'static str, name: String },

    #[error("{framework} does not support {addon}")]
    UnsupportedAddon { framework: String, addon: String },

    #[error("A {0} is required when prompts are disabled")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_message_includes_exit_code() {
        let err = InstallError::Failed {
            command: "npm install".to_string(),
            code: Some(1),
        };
        assert_eq!(err.to_string(), "'npm install' exited with exit code 1");
    }

    #[test]
    fn test_failed_message_without_code() {
        let err = InstallError::Failed {
            command: "npm install".to_string(),
            code: None,
        };
        assert!(err.to_string().ends_with("a signal"));
    }

    #[test]
    fn test_render_error_is_wrapped() {
        let err: ScaffoldError = RenderError::Read {
            path: PathBuf::from("a.tmpl"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        }
        .into();
        assert_eq!(err.to_string(), "Template rendering failed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
