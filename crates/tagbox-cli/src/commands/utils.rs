//! Shared path helpers for command implementations.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Resolve a path relative to a working directory.
///
/// Absolute paths are returned unchanged. `.` segments are dropped so that
/// the result can be shortened again with [`display_path`].
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    joined.components().collect()
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    Ok(std::env::current_dir()?)
}

/// Path as shown in diagnostics: relative to `cwd` when below it
pub fn display_path(path: &Path, cwd: &Path) -> String {
    path.strip_prefix(cwd)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path() {
        let cwd = Path::new("/project");
        assert_eq!(
            resolve_path(Path::new("./src"), cwd),
            PathBuf::from("/project/src")
        );
        assert_eq!(resolve_path(Path::new("."), cwd), PathBuf::from("/project"));
    }

    #[test]
    fn test_resolve_absolute_path() {
        let cwd = Path::new("/project");
        assert_eq!(
            resolve_path(Path::new("/other/App.tsx"), cwd),
            PathBuf::from("/other/App.tsx")
        );
    }

    #[test]
    fn test_display_path() {
        let cwd = Path::new("/project");
        assert_eq!(
            display_path(Path::new("/project/src/App.tsx"), cwd),
            "src/App.tsx"
        );
        assert_eq!(
            display_path(Path::new("/elsewhere/App.tsx"), cwd),
            "/elsewhere/App.tsx"
        );
    }
}
