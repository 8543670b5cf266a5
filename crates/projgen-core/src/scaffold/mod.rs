//! The scaffolding pipeline
//!
//! One invocation runs strictly in order:
//!
//! 1. name validation and the target directory guard
//! 2. template rendering, or the fallback skeleton when no template exists
//! 3. extras
//! 4. dependency installation (failures are warnings)
//! 5. next-step suggestions
//!
//! Cancellation is checked between stages and passed to every install command.

pub mod extras;
pub mod fallback;
pub mod next_steps;
pub mod target;

pub use extras::{generate_extras, ExtrasOutcome};
pub use fallback::generate_fallback;
pub use next_steps::next_steps;
pub use target::ensure_target_dir;

use crate::catalog::Catalog;
use crate::error::ScaffoldError;
use crate::install::{install_all, Cancellation, InstallReport};
use crate::naming;
use crate::options::ProjectOptions;
use crate::report::Reporter;
use crate::templates::{resolve_template_dir, RenderVariables, TemplateRenderer};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, instrument};

/// How the project structure was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Structure {
    /// Rendered from this template tree
    Template(PathBuf),
    /// No template tree was found
    Fallback,
}

/// Everything a finished scaffold produced
#[derive(Debug)]
pub struct ScaffoldSummary {
    pub project_dir: PathBuf,
    pub structure: Structure,
    /// Structure files, relative to `project_dir`
    pub files: Vec<PathBuf>,
    pub extras: ExtrasOutcome,
    pub install: InstallReport,
    pub next_steps: Vec<String>,
}

/// Scaffolding engine bound to a catalog, a template root and a base directory
pub struct Scaffolder {
    catalog: Catalog,
    template_root: PathBuf,
    base_dir: PathBuf,
    install_timeout: Option<Duration>,
    renderer: TemplateRenderer,
}

impl Scaffolder {
    /// Projects are created under `base_dir`; relative template locations
    /// resolve against `base_dir` too until [`Self::with_template_root`].
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            catalog: Catalog::builtin(),
            template_root: base_dir.clone(),
            base_dir,
            install_timeout: None,
            renderer: TemplateRenderer::new(),
        }
    }

    pub fn with_template_root(mut self, template_root: impl Into<PathBuf>) -> Self {
        self.template_root = template_root.into();
        self
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Deadline for the install stage, measured from when it starts
    pub fn with_install_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.install_timeout = timeout;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn template_root(&self) -> &Path {
        &self.template_root
    }

    /// Where `options` would be generated, always directly under the base directory
    pub fn project_dir(&self, options: &ProjectOptions) -> Result<PathBuf, ScaffoldError> {
        let dir_name = options.kebab_name();
        if options.name.trim().is_empty() || dir_name.is_empty() {
            return Err(ScaffoldError::EmptyProjectName);
        }
        if !naming::is_single_dir_name(&dir_name) {
            return Err(ScaffoldError::InvalidProjectName {
                name: options.name.clone(),
            });
        }
        Ok(self.base_dir.join(dir_name))
    }

    /// Run the full pipeline for `options`
    #[instrument(skip_all, fields(project = %options.name, framework = %options.framework.name))]
    pub async fn generate(
        &self,
        options: &ProjectOptions,
        cancel: &Cancellation,
        reporter: &dyn Reporter,
    ) -> Result<ScaffoldSummary, ScaffoldError> {
        let project_dir = self.project_dir(options)?;
        let dir_name = options.kebab_name();
        ensure_not_cancelled(cancel)?;

        ensure_target_dir(&project_dir)?;
        info!(dir = %project_dir.display(), "target directory ready");

        let (structure, files) = self.generate_structure(&project_dir, options, reporter)?;

        ensure_not_cancelled(cancel)?;
        reporter.step("Adding extras");
        let extras = generate_extras(&project_dir, options, &self.catalog)?;
        if !extras.written.is_empty() {
            reporter.success(&format!("Wrote {}", join_paths(&extras.written)));
        }

        let install_cancel = match self.install_timeout {
            Some(timeout) => cancel.clone().with_timeout(timeout),
            None => cancel.clone(),
        };
        let install = install_all(&project_dir, options, &install_cancel, reporter).await;

        let next_steps = next_steps(&dir_name, options, &extras.deferred_commands);

        Ok(ScaffoldSummary {
            project_dir,
            structure,
            files,
            extras,
            install,
            next_steps,
        })
    }

    fn generate_structure(
        &self,
        project_dir: &Path,
        options: &ProjectOptions,
        reporter: &dyn Reporter,
    ) -> Result<(Structure, Vec<PathBuf>), ScaffoldError> {
        match resolve_template_dir(&self.template_root, &options.framework.template_path) {
            Some(template_dir) => {
                reporter.step(&format!("Rendering template {}", template_dir.display()));
                let vars = RenderVariables::from_options(options);
                let files = self.renderer.render_tree(&template_dir, project_dir, &vars)?;
                reporter.success(&format!("Rendered {} files", files.len()));
                Ok((Structure::Template(template_dir), files))
            }
            None => {
                info!(
                    template = %options.framework.template_path,
                    "no template found, generating basic structure"
                );
                reporter.step("No template found, generating basic structure");
                let files = generate_fallback(project_dir, options)?;
                reporter.success("Created basic structure");
                Ok((Structure::Fallback, files))
            }
        }
    }
}

fn ensure_not_cancelled(cancel: &Cancellation) -> Result<(), ScaffoldError> {
    if cancel.is_cancelled() {
        return Err(ScaffoldError::Cancelled);
    }
    Ok(())
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
