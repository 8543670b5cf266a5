//! Scaffolding input collected by the wizard or the command line

use crate::catalog::{AddonDescriptor, Catalog, FrameworkDescriptor, ProjectCategory};
use crate::error::SelectionError;
use crate::naming;
use crate::runtime::{self, Runtime};

/// Everything the engine needs to scaffold one project
#[derive(Debug, Clone)]
pub struct ProjectOptions {
    /// Raw project name, may contain spaces and mixed case
    pub name: String,

    pub category: ProjectCategory,

    pub framework: FrameworkDescriptor,

    pub css_framework: Option<AddonDescriptor>,

    pub ui_library: Option<AddonDescriptor>,

    /// Detected runtime hint
    pub runtime: Runtime,

    /// Selected extras, by name, display name or file path
    pub extras: Vec<String>,

    /// Run the framework's install command after generation
    pub auto_install: bool,
}

impl ProjectOptions {
    pub fn new(name: impl Into<String>, category: ProjectCategory, framework: FrameworkDescriptor) -> Self {
        Self {
            name: name.into(),
            category,
            framework,
            css_framework: None,
            ui_library: None,
            runtime: Runtime::Unknown,
            extras: Vec::new(),
            auto_install: true,
        }
    }

    /// Options for the framework called `framework` in `catalog`
    pub fn for_framework(
        catalog: &Catalog,
        name: impl Into<String>,
        framework: &str,
    ) -> Result<Self, SelectionError> {
        let (category, descriptor) =
            catalog
                .find_framework(framework)
                .ok_or_else(|| SelectionError::UnknownFramework {
                    name: framework.to_string(),
                    available: framework_names(catalog),
                })?;
        Ok(Self::new(name, category, descriptor.clone()))
    }

    /// Select a CSS framework by name; it must be supported by the framework
    pub fn with_css_framework(mut self, catalog: &Catalog, name: &str) -> Result<Self, SelectionError> {
        let addon = catalog
            .find_css_framework(name)
            .ok_or_else(|| SelectionError::UnknownAddon {
                kind: "CSS framework",
                name: name.to_string(),
            })?;
        self.check_supported(addon)?;
        self.css_framework = Some(addon.clone());
        Ok(self)
    }

    /// Select a UI library by name; it must be supported by the framework
    pub fn with_ui_library(mut self, catalog: &Catalog, name: &str) -> Result<Self, SelectionError> {
        let addon = catalog
            .find_ui_library(name)
            .ok_or_else(|| SelectionError::UnknownAddon {
                kind: "UI library",
                name: name.to_string(),
            })?;
        self.check_supported(addon)?;
        self.ui_library = Some(addon.clone());
        Ok(self)
    }

    fn check_supported(&self, addon: &AddonDescriptor) -> Result<(), SelectionError> {
        if self.framework.supports(&addon.name) {
            Ok(())
        } else {
            Err(SelectionError::UnsupportedAddon {
                framework: self.framework.display_name.clone(),
                addon: addon.display_name.clone(),
            })
        }
    }

    /// Directory-safe form of the project name
    pub fn kebab_name(&self) -> String {
        naming::normalize(&self.name)
    }

    /// Whether the project targets a compiled-binary toolchain
    pub fn is_go(&self) -> bool {
        self.framework.language.eq_ignore_ascii_case("go") || self.runtime == Runtime::Go
    }
}

/// Choices made up front, typically from command-line flags.
///
/// `None` leaves the choice to a prompt, or to a default when resolving
/// without prompts.
#[derive(Debug, Clone, Default)]
pub struct Preselection {
    pub name: Option<String>,
    pub framework: Option<String>,
    pub css_framework: Option<String>,
    pub ui_library: Option<String>,
    pub extras: Option<Vec<String>>,
    pub runtime: Option<String>,
    pub no_install: bool,
}

impl Preselection {
    /// The runtime token if given, otherwise whatever is found on PATH
    pub fn runtime_hint(&self) -> Runtime {
        match &self.runtime {
            Some(token) => Runtime::from_token(token),
            None => runtime::detect(),
        }
    }

    /// Build options without prompting; name and framework are required
    pub fn resolve(&self, catalog: &Catalog) -> Result<ProjectOptions, SelectionError> {
        let name = self
            .name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .ok_or(SelectionError::Missing("project name"))?;
        let framework = self
            .framework
            .as_deref()
            .ok_or(SelectionError::Missing("framework"))?;

        let mut options = ProjectOptions::for_framework(catalog, name, framework)?;
        if let Some(css) = &self.css_framework {
            options = options.with_css_framework(catalog, css)?;
        }
        if let Some(ui) = &self.ui_library {
            options = options.with_ui_library(catalog, ui)?;
        }
        options.extras = self.extras.clone().unwrap_or_default();
        options.runtime = self.runtime_hint();
        options.auto_install = !self.no_install;
        Ok(options)
    }
}

fn framework_names(catalog: &Catalog) -> String {
    ProjectCategory::ALL
        .into_iter()
        .flat_map(|category| catalog.frameworks(category))
        .map(|fw| fw.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Port for Go services
pub const GO_PORT: u16 = 8080;

/// Port for everything else (JS/TS dev servers)
pub const WEB_PORT: u16 = 3000;

/// Default port for a framework language label
pub fn default_port(language: &str) -> u16 {
    if language.eq_ignore_ascii_case("go") {
        GO_PORT
    } else {
        WEB_PORT
    }
}
