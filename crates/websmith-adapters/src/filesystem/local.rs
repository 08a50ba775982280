//! Disk-backed [`Filesystem`] used by the `websmith` binary.
//!
//! Thin wrapper over `std::fs`; the only logic here is translating
//! `io::Error` into the core error type with the failing path attached.

use std::io;
use std::path::Path;

use websmith_core::application::ApplicationError;
use websmith_core::error::{WebsmithError, WebsmithResult};
use websmith_core::application::ports::Filesystem;

/// Writes generated projects to the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> WebsmithResult<()> {
        std::fs::create_dir_all(path).map_err(|e| fs_error(path, "create directory", e))
    }

    fn write_file(&self, path: &Path, content: &str) -> WebsmithResult<()> {
        tracing::debug!(path = %path.display(), bytes = content.len(), "writing file");
        std::fs::write(path, content).map_err(|e| fs_error(path, "write file", e))
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> WebsmithResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if executable {
                let metadata =
                    std::fs::metadata(path).map_err(|e| fs_error(path, "read metadata", e))?;
                let mut perms = metadata.permissions();
                perms.set_mode(perms.mode() | 0o111);
                std::fs::set_permissions(path, perms)
                    .map_err(|e| fs_error(path, "set permissions", e))?;
            }
        }
        #[cfg(windows)]
        {
            // No executable bit on Windows.
            let _ = executable;
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> WebsmithResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| fs_error(path, "remove directory", e))
    }
}

fn fs_error(path: &Path, operation: &str, e: io::Error) -> WebsmithError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}
