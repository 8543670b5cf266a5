//! Template tree rendering with Handlebars
//!
//! Every file in a template tree is rendered as a Handlebars template against
//! [`RenderVariables`]. Besides plain lookups (`{{Name}}`) three helpers are
//! available: `lower`, `upper` and `kebab` (e.g. `{{kebab Name}}`).
//!
//! Undefined variables render as an empty string so a single missing optional
//! field never fails the whole tree. Malformed template syntax is an error.

use crate::error::RenderError;
use crate::naming;
use crate::templates::variables::RenderVariables;
use handlebars::{Context, Handlebars, Helper, HelperResult, JsonValue, Output, RenderContext};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};
use walkdir::WalkDir;

/// Marker suffix stripped from rendered file names (`package.json.tmpl` -> `package.json`)
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Renders single templates and whole template trees
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        // Output is source code and config, not HTML
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(false);
        registry.register_helper("lower", Box::new(lower_helper));
        registry.register_helper("upper", Box::new(upper_helper));
        registry.register_helper("kebab", Box::new(kebab_helper));
        Self { registry }
    }

    /// Render one template string
    pub fn render_str(
        &self,
        template: &str,
        vars: &RenderVariables,
    ) -> Result<String, handlebars::RenderError> {
        self.registry.render_template(template, vars)
    }

    /// Mirror `template_dir` into `dest`, rendering every file.
    ///
    /// Returns the written file paths relative to `dest`. The first failure
    /// aborts the walk; files already written stay in place.
    #[instrument(skip_all, fields(template = %template_dir.display(), dest = %dest.display()))]
    pub fn render_tree(
        &self,
        template_dir: &Path,
        dest: &Path,
        vars: &RenderVariables,
    ) -> Result<Vec<PathBuf>, RenderError> {
        let mut written = Vec::new();

        for entry in WalkDir::new(template_dir).sort_by_file_name() {
            let entry = entry?;
            let relative = entry.path().strip_prefix(template_dir).unwrap_or(entry.path());

            if entry.file_type().is_dir() {
                let target = dest.join(relative);
                fs::create_dir_all(&target).map_err(|source| RenderError::Write {
                    path: target.clone(),
                    source,
                })?;
                continue;
            }

            let relative = strip_template_suffix(relative);
            let target = dest.join(&relative);

            let bytes = fs::read(entry.path()).map_err(|source| RenderError::Read {
                path: entry.path().to_path_buf(),
                source,
            })?;
            // Binary assets (icons, images) are copied verbatim
            let rendered = match String::from_utf8(bytes) {
                Ok(content) => self
                    .render_str(&content, vars)
                    .map_err(|source| RenderError::Template {
                        path: entry.path().to_path_buf(),
                        source: Box::new(source),
                    })?
                    .into_bytes(),
                Err(not_utf8) => not_utf8.into_bytes(),
            };

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|source| RenderError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::write(&target, rendered).map_err(|source| RenderError::Write {
                path: target.clone(),
                source,
            })?;

            debug!(file = %relative.display(), "rendered");
            written.push(relative);
        }

        Ok(written)
    }
}

/// Drop the template marker from a file name, unless nothing would be left
fn strip_template_suffix(path: &Path) -> PathBuf {
    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) if name.len() > TEMPLATE_SUFFIX.len() && name.ends_with(TEMPLATE_SUFFIX) => {
            path.with_file_name(&name[..name.len() - TEMPLATE_SUFFIX.len()])
        }
        _ => path.to_path_buf(),
    }
}

fn param_text(h: &Helper) -> String {
    match h.param(0).map(|p| p.value()) {
        Some(JsonValue::String(s)) => s.clone(),
        Some(JsonValue::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn lower_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(&param_text(h).to_lowercase())?;
    Ok(())
}

fn upper_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(&param_text(h).to_uppercase())?;
    Ok(())
}

fn kebab_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(&naming::normalize(&param_text(h)))?;
    Ok(())
}
