//! Template location resolution

use std::path::{Path, PathBuf};

/// Resolve a framework's declared template location.
///
/// Relative locations are joined onto `template_root`. Returns `None` when the
/// location is empty or nothing exists there; the tree's contents are not
/// inspected.
pub fn resolve_template_dir(template_root: &Path, declared: &str) -> Option<PathBuf> {
    if declared.trim().is_empty() {
        return None;
    }
    let declared = Path::new(declared);
    let path = if declared.is_absolute() {
        declared.to_path_buf()
    } else {
        template_root.join(declared)
    };
    path.exists().then_some(path)
}
