//! Variables available to template files

use crate::options::{default_port, ProjectOptions};
use serde::Serialize;

/// Flat variable set rendered into every template file.
///
/// Field names are the template-facing keys, e.g. `{{Name}}` or
/// `{{kebab FrameworkName}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RenderVariables {
    /// Project name as typed
    pub name: String,
    /// Alias of `Name`
    pub project: String,
    pub kebab_name: String,
    pub language: String,
    /// Framework display name
    pub framework: String,
    /// Framework internal name
    pub framework_name: String,
    pub runtime: String,
    pub extras: Vec<String>,
    pub port: u16,
}

impl RenderVariables {
    pub fn from_options(options: &ProjectOptions) -> Self {
        Self {
            name: options.name.clone(),
            project: options.name.clone(),
            kebab_name: options.kebab_name(),
            language: options.framework.language.clone(),
            framework: options.framework.display_name.clone(),
            framework_name: options.framework.name.clone(),
            runtime: options.runtime.to_string(),
            extras: options.extras.clone(),
            port: default_port(&options.framework.language),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::runtime::Runtime;

    #[test]
    fn test_variables_from_options() {
        let catalog = Catalog::builtin();
        let (category, fw) = catalog.find_framework("go-fiber").unwrap();
        let mut options = ProjectOptions::new("My App", category, fw.clone());
        options.runtime = Runtime::Go;
        options.extras = vec![".env".to_string()];

        let vars = RenderVariables::from_options(&options);
        assert_eq!(vars.name, "My App");
        assert_eq!(vars.project, "My App");
        assert_eq!(vars.kebab_name, "my-app");
        assert_eq!(vars.framework, "Go + Fiber");
        assert_eq!(vars.framework_name, "go-fiber");
        assert_eq!(vars.runtime, "go");
        assert_eq!(vars.port, 8080);
    }
}
