//! Environment-driven settings

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::scaffold::Scaffolder;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// Root against which relative template locations resolve
pub const TEMPLATE_DIR_ENV: &str = "PROJGEN_TEMPLATE_DIR";

/// YAML file replacing the built-in catalog
pub const CATALOG_ENV: &str = "PROJGEN_CATALOG";

/// Install stage deadline, in seconds
pub const INSTALL_TIMEOUT_ENV: &str = "PROJGEN_INSTALL_TIMEOUT";

/// Settings shared by every command. CLI flags override these after loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub template_root: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub install_timeout: Option<Duration>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let install_timeout = value(INSTALL_TIMEOUT_ENV).and_then(|raw| {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    warn!(value = %raw, "ignoring invalid {INSTALL_TIMEOUT_ENV}");
                    None
                }
            }
        });

        Self {
            template_root: value(TEMPLATE_DIR_ENV).map(PathBuf::from),
            catalog: value(CATALOG_ENV).map(PathBuf::from),
            install_timeout,
        }
    }

    /// The configured catalog file, or the built-in catalog
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog {
            Some(path) => Catalog::from_yaml_file(path),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Engine for projects created under `base_dir`, using `catalog`
    pub fn scaffolder(&self, base_dir: &Path, catalog: Catalog) -> Scaffolder {
        let template_root = self
            .template_root
            .clone()
            .unwrap_or_else(|| base_dir.to_path_buf());
        Scaffolder::new(base_dir)
            .with_template_root(template_root)
            .with_catalog(catalog)
            .with_install_timeout(self.install_timeout)
    }
}
