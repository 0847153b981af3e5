use crate::error::{ConversionError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Project root used for relative paths: the parent of the directory that
/// holds the running executable.
pub fn default_project_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| ConversionError::ProjectRootUnavailable(e.to_string()))?;
    let tool_dir = exe.parent().ok_or_else(|| {
        ConversionError::ProjectRootUnavailable(format!("{} has no parent", exe.display()))
    })?;
    Ok(tool_dir.parent().unwrap_or(tool_dir).to_path_buf())
}

/// Absolute paths pass through; relative ones are joined onto `root`.
pub fn resolve_against_root(path: &Path, root: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// The source must exist and be a directory (symlinks are followed).
pub fn validate_source_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ConversionError::SourceNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(ConversionError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Create the destination and any missing parents.
pub fn prepare_destination(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| ConversionError::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source,
    })
}
