//! Template resolution and rendering
//!
//! This module provides:
//! - Template location resolution against a template root
//! - The variable set every template file is rendered with
//! - Recursive rendering of a template tree into a destination directory

pub mod renderer;
pub mod resolver;
pub mod variables;

pub use renderer::{TemplateRenderer, TEMPLATE_SUFFIX};
pub use resolver::resolve_template_dir;
pub use variables::RenderVariables;
