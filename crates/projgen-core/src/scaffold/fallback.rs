//! Minimal skeleton used when no template tree is available

use crate::error::ScaffoldError;
use crate::options::ProjectOptions;
use chrono::{DateTime, Local, SecondsFormat};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the placeholder source file
pub const SOURCE_DIR: &str = "src";

/// Placeholder file written inside [`SOURCE_DIR`]
pub const PLACEHOLDER_FILE: &str = "main.txt";

/// Write `README.md` and `src/main.txt` into `dest`
pub fn generate_fallback(dest: &Path, options: &ProjectOptions) -> Result<Vec<PathBuf>, ScaffoldError> {
    generate_fallback_at(dest, options, Local::now())
}

fn generate_fallback_at(
    dest: &Path,
    options: &ProjectOptions,
    now: DateTime<Local>,
) -> Result<Vec<PathBuf>, ScaffoldError> {
    let readme = format!(
        "# {}\n\nProject generated by projgen (basic mode)\n\nLanguage: {}\nFramework: {}\nRuntime: {}\n",
        options.name, options.framework.language, options.framework.display_name, options.runtime
    );
    write(&dest.join("README.md"), &readme)?;

    let src = dest.join(SOURCE_DIR);
    fs::create_dir_all(&src).map_err(|source| ScaffoldError::Fallback {
        path: src.clone(),
        source,
    })?;

    let placeholder = format!(
        "Project {} created at {}\n",
        options.name,
        now.to_rfc3339_opts(SecondsFormat::Secs, false)
    );
    write(&src.join(PLACEHOLDER_FILE), &placeholder)?;

    Ok(vec![
        PathBuf::from("README.md"),
        Path::new(SOURCE_DIR).join(PLACEHOLDER_FILE),
    ])
}

fn write(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    fs::write(path, content).map_err(|source| ScaffoldError::Fallback {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::runtime::Runtime;
    use chrono::TimeZone;

    fn go_options() -> ProjectOptions {
        let catalog = Catalog::builtin();
        let (category, fw) = catalog.find_framework("go-fiber").unwrap();
        let mut options = ProjectOptions::new("My App", category, fw.clone());
        options.runtime = Runtime::Go;
        options
    }

    #[test]
    fn test_fallback_writes_readme_and_placeholder() {
        let dest = tempfile::tempdir().unwrap();
        let now = Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        let written = generate_fallback_at(dest.path(), &go_options(), now).unwrap();
        assert_eq!(written.len(), 2);

        let readme = fs::read_to_string(dest.path().join("README.md")).unwrap();
        assert!(readme.starts_with("# My App\n"));
        assert!(readme.contains("Language: Go"));
        assert!(readme.contains("Framework: Go + Fiber"));
        assert!(readme.contains("Runtime: go"));

        let main = fs::read_to_string(dest.path().join("src/main.txt")).unwrap();
        assert!(main.starts_with("Project My App created at 2024-05-01T12:00:00"));
    }

    #[test]
    fn test_fallback_fails_when_destination_missing() {
        let root = tempfile::tempdir().unwrap();
        let err = generate_fallback(&root.path().join("missing"), &go_options()).unwrap_err();
        assert!(matches!(err, ScaffoldError::Fallback { .. }));
    }
}
