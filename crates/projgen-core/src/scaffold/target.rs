//! Destination directory guard

use crate::error::ScaffoldError;
use std::fs;
use std::io;
use std::path::Path;

/// Make sure `dir` exists and is empty before anything is written into it.
///
/// A missing directory is created along with its parents. An existing empty
/// directory is accepted untouched. A non-directory or a non-empty directory
/// is rejected.
pub fn ensure_target_dir(dir: &Path) -> Result<(), ScaffoldError> {
    let io_err = |source: io::Error| ScaffoldError::Destination {
        path: dir.to_path_buf(),
        source,
    };

    match fs::metadata(dir) {
        Ok(meta) if !meta.is_dir() => Err(ScaffoldError::DestinationIsFile {
            path: dir.to_path_buf(),
        }),
        Ok(_) => {
            let mut entries = fs::read_dir(dir).map_err(io_err)?;
            if entries.next().is_some() {
                Err(ScaffoldError::DestinationNotEmpty {
                    path: dir.to_path_buf(),
                })
            } else {
                Ok(())
            }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => fs::create_dir_all(dir).map_err(io_err),
        Err(err) => Err(io_err(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_missing_directory_with_parents() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("a/b/my-app");

        ensure_target_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_empty_directory_passes_twice() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("my-app");

        ensure_target_dir(&dir).unwrap();
        ensure_target_dir(&dir).unwrap();
    }

    #[test]
    fn test_fails_once_something_is_written() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("my-app");

        ensure_target_dir(&dir).unwrap();
        fs::write(dir.join("README.md"), "# hi").unwrap();

        let err = ensure_target_dir(&dir).unwrap_err();
        assert!(matches!(err, ScaffoldError::DestinationNotEmpty { .. }));
    }

    #[test]
    fn test_hidden_entries_count_as_content() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join(".git")).unwrap();

        let err = ensure_target_dir(root.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::DestinationNotEmpty { .. }));
    }

    #[test]
    fn test_rejects_existing_file() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("my-app");
        fs::write(&file, "not a dir").unwrap();

        let err = ensure_target_dir(&file).unwrap_err();
        assert!(matches!(err, ScaffoldError::DestinationIsFile { .. }));
        assert_eq!(fs::read_to_string(&file).unwrap(), "not a dir");
    }
}
