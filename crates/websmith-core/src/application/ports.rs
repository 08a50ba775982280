//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `websmith-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ProjectStructure, RenderContext, Skeleton};
use crate::error::WebsmithResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `websmith_adapters::filesystem::LocalFilesystem` (production)
/// - `websmith_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> WebsmithResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> WebsmithResult<()>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> WebsmithResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> WebsmithResult<()>;
}

/// Port for skeleton rendering.
///
/// Implemented by `websmith_adapters::renderer::SimpleRenderer` (variable
/// substitution).
pub trait SkeletonRenderer: Send + Sync {
    /// Render a skeleton into a concrete project structure rooted at
    /// `output_root`.
    fn render(
        &self,
        skeleton: &Skeleton,
        context: &RenderContext,
        output_root: &Path,
    ) -> WebsmithResult<ProjectStructure>;
}
