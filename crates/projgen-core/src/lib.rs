//! Projgen Core - project scaffolding engine
//!
//! Turns a [`ProjectOptions`] record (collected by the wizard or the command
//! line) into a project directory: a rendered template tree or a minimal
//! fallback skeleton, opt-in extras, and optional dependency installation.
//!
//! # Architecture
//!
//! - **Data**: [`catalog`] describes every selectable framework, addon and
//!   extra. All per-framework behavior is data (command strings).
//! - **Pipeline**: [`scaffold::Scaffolder`] runs the stages in order. Each
//!   stage lives in its own module ([`templates`], [`scaffold::fallback`],
//!   [`scaffold::extras`], [`install`]).
//! - **Interface**: [`report::Reporter`] receives progress; the optional
//!   cliclack wizard lives in `tui` (feature-gated).
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based interactive wizard
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use projgen_core::{Catalog, Cancellation, ProjectOptions, Scaffolder, report::ConsoleReporter};
//!
//! let catalog = Catalog::builtin();
//! let (category, framework) = catalog.find_framework("go-fiber").unwrap();
//! let options = ProjectOptions::new("My App", category, framework.clone());
//!
//! let summary = Scaffolder::new(".")
//!     .generate(&options, &Cancellation::never(), &ConsoleReporter)
//!     .await?;
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod install;
pub mod naming;
pub mod options;
pub mod report;
pub mod runtime;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{Catalog, ProjectCategory};
pub use config::Settings;
pub use error::{CatalogError, InstallError, RenderError, ScaffoldError, SelectionError};
pub use install::{CancelHandle, Cancellation};
pub use options::{Preselection, ProjectOptions};
pub use runtime::{Runtime, RuntimeInfo};
pub use scaffold::{ScaffoldSummary, Scaffolder, Structure};

#[cfg(feature = "tui")]
pub use tui::run;
