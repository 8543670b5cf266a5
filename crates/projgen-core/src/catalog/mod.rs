//! Framework, addon and extras catalog
//!
//! All per-framework behavior is data: a framework differs from another only by
//! its declared template location and command strings. The built-in catalog
//! lives in [`builtin`]; a replacement can be loaded from a YAML file.

mod builtin;

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Top-level project category offered by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Frontend,
    Backend,
    Fullstack,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 3] = [
        ProjectCategory::Frontend,
        ProjectCategory::Backend,
        ProjectCategory::Fullstack,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectCategory::Frontend => "Frontend",
            ProjectCategory::Backend => "Backend",
            ProjectCategory::Fullstack => "Fullstack",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A selectable framework or stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkDescriptor {
    /// Internal name (e.g. `go-fiber`)
    pub name: String,

    pub display_name: String,

    /// Source language label (e.g. `Go`, `TypeScript`)
    pub language: String,

    /// Template tree location, relative paths resolve against the template root
    #[serde(default)]
    pub template_path: String,

    /// Runtime the framework expects (e.g. `node`, `go`)
    #[serde(default)]
    pub runtime: String,

    /// Empty when not applicable
    #[serde(default)]
    pub install_cmd: String,

    #[serde(default)]
    pub start_cmd: String,

    #[serde(default)]
    pub build_cmd: String,

    #[serde(default)]
    pub description: String,

    /// Names of addons this framework can be combined with
    #[serde(default)]
    pub supported_addons: Vec<String>,
}

impl FrameworkDescriptor {
    pub fn supports(&self, addon: &str) -> bool {
        self.supported_addons
            .iter()
            .any(|a| a.eq_ignore_ascii_case(addon))
    }
}

/// A CSS framework or UI library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonDescriptor {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub install_cmd: String,
}

/// What selecting an extra does
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum ExtraAction {
    /// Create a file at the given path relative to the project
    CreateFile(String),
    /// A setup command; never executed automatically
    RunCommand(String),
}

/// An opt-in auxiliary artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraDescriptor {
    pub name: String,
    pub display_name: String,
    pub action: ExtraAction,
}

impl ExtraDescriptor {
    /// Whether `key` selects this extra (name, display name or created file path)
    pub fn matches(&self, key: &str) -> bool {
        let key = key.trim();
        if self.name.eq_ignore_ascii_case(key) || self.display_name.eq_ignore_ascii_case(key) {
            return true;
        }
        matches!(&self.action, ExtraAction::CreateFile(path) if path.eq_ignore_ascii_case(key))
    }
}

/// Read-only lookup data for the wizard and the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub frontend: Vec<FrameworkDescriptor>,

    #[serde(default)]
    pub backend: Vec<FrameworkDescriptor>,

    #[serde(default)]
    pub fullstack: Vec<FrameworkDescriptor>,

    #[serde(default)]
    pub css_frameworks: Vec<AddonDescriptor>,

    #[serde(default)]
    pub ui_libraries: Vec<AddonDescriptor>,

    #[serde(default)]
    pub extras: Vec<ExtraDescriptor>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The catalog compiled into the binary
    pub fn builtin() -> Self {
        Self {
            frontend: builtin::frontend_frameworks(),
            backend: builtin::backend_frameworks(),
            fullstack: builtin::fullstack_frameworks(),
            css_frameworks: builtin::css_frameworks(),
            ui_libraries: builtin::ui_libraries(),
            extras: builtin::extras(),
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load a catalog from a YAML file, replacing the built-in one
    pub fn from_yaml_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn frameworks(&self, category: ProjectCategory) -> &[FrameworkDescriptor] {
        match category {
            ProjectCategory::Frontend => &self.frontend,
            ProjectCategory::Backend => &self.backend,
            ProjectCategory::Fullstack => &self.fullstack,
        }
    }

    /// Find a framework by internal name, along with its category
    pub fn find_framework(&self, name: &str) -> Option<(ProjectCategory, &FrameworkDescriptor)> {
        ProjectCategory::ALL.into_iter().find_map(|category| {
            self.frameworks(category)
                .iter()
                .find(|fw| fw.name.eq_ignore_ascii_case(name))
                .map(|fw| (category, fw))
        })
    }

    pub fn find_css_framework(&self, name: &str) -> Option<&AddonDescriptor> {
        find_addon(&self.css_frameworks, name)
    }

    pub fn find_ui_library(&self, name: &str) -> Option<&AddonDescriptor> {
        find_addon(&self.ui_libraries, name)
    }

    pub fn find_extra(&self, key: &str) -> Option<&ExtraDescriptor> {
        self.extras.iter().find(|extra| extra.matches(key))
    }

    /// CSS frameworks the given framework supports
    pub fn css_frameworks_for<'a>(
        &'a self,
        framework: &'a FrameworkDescriptor,
    ) -> impl Iterator<Item = &'a AddonDescriptor> + 'a {
        self.css_frameworks
            .iter()
            .filter(move |addon| framework.supports(&addon.name))
    }

    /// UI libraries the given framework supports
    pub fn ui_libraries_for<'a>(
        &'a self,
        framework: &'a FrameworkDescriptor,
    ) -> impl Iterator<Item = &'a AddonDescriptor> + 'a {
        self.ui_libraries
            .iter()
            .filter(move |addon| framework.supports(&addon.name))
    }
}

fn find_addon<'a>(addons: &'a [AddonDescriptor], name: &str) -> Option<&'a AddonDescriptor> {
    addons.iter().find(|addon| {
        addon.name.eq_ignore_ascii_case(name) || addon.display_name.eq_ignore_ascii_case(name)
    })
}
