//! Runtime detection
//!
//! This module provides:
//! - The [`Runtime`] hint token carried in project options
//! - PATH-based detection of the preferred runtime
//! - A per-tool version report with install tips

pub mod check;

pub use check::{detect, inspect_all, install_tips, parse_version, Runtime, RuntimeInfo};
