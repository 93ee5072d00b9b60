use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Base name of the runtime binary expected in the launcher's directory.
pub const TARGET_BIN: &str = "deno";

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("could not resolve the launcher's own path: {0}")]
    SelfPath(io::Error),
    #[error("launcher path {} has no parent directory", .0.display())]
    NoParentDir(PathBuf),
    #[error("no deno executable at {}", .0.display())]
    TargetMissing(PathBuf),
}

/// Absolute, symlink-resolved path of the running launcher binary.
pub fn resolve_self_path() -> Result<PathBuf, LocateError> {
    let exe = std::env::current_exe().map_err(LocateError::SelfPath)?;
    exe.canonicalize().map_err(LocateError::SelfPath)
}

/// Candidate path of the runtime binary: same directory as the launcher,
/// fixed base name, platform executable suffix (`.exe` on Windows, nothing
/// elsewhere). Pure path arithmetic; existence is checked by
/// [`validate_target`].
pub fn derive_target_path(self_path: &Path) -> Result<PathBuf, LocateError> {
    let dir = self_path
        .parent()
        .ok_or_else(|| LocateError::NoParentDir(self_path.to_path_buf()))?;
    Ok(dir.join(format!("{}{}", TARGET_BIN, std::env::consts::EXE_SUFFIX)))
}

/// Existence gate for the derived runtime path. A missing runtime is fatal
/// before any process creation is attempted; there is no fallback search.
pub fn validate_target(path: &Path) -> Result<(), LocateError> {
    if path.exists() {
        Ok(())
    } else {
        Err(LocateError::TargetMissing(path.to_path_buf()))
    }
}
