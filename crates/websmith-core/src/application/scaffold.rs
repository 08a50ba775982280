//! Scaffold Service - main application orchestrator.
//!
//! Coordinates the scaffolding workflow:
//! 1. Validate the skeleton and project name
//! 2. Render the skeleton with the context
//! 3. Write to filesystem, rolling back the project root on failure

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, SkeletonRenderer},
    },
    domain::{
        DomainValidator as validator, FsEntry, ProjectStructure, RenderContext, Skeleton,
        validate_project_name,
    },
    error::{WebsmithError, WebsmithResult},
};

/// Options controlling one scaffold run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaffoldOptions {
    /// Remove a pre-existing project directory before writing.
    pub force: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    renderer: Box<dyn SkeletonRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(renderer: Box<dyn SkeletonRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Scaffold a new project.
    ///
    /// This is the main use case: render `skeleton` with `context` and
    /// materialize it under `output_path`.
    #[instrument(
        skip_all,
        fields(
            skeleton = skeleton.name,
            project = context.project_name(),
            output_path = %output_path.as_ref().display()
        )
    )]
    pub fn scaffold(
        &self,
        skeleton: &Skeleton,
        context: &RenderContext,
        output_path: impl AsRef<Path>,
        options: ScaffoldOptions,
    ) -> WebsmithResult<ProjectStructure> {
        let output_path = output_path.as_ref();

        info!("Scaffolding '{}'", context.project_name());

        // 1. Validate inputs
        validate_project_name(context.project_name()).map_err(WebsmithError::Domain)?;
        validator::validate_skeleton(skeleton).map_err(WebsmithError::Domain)?;

        // 2. Render
        let structure = self.renderer.render(skeleton, context, output_path)?;
        info!(entries = structure.entry_count(), "Skeleton rendered");

        // 3. Write
        self.write_structure(&structure, options)?;

        info!("Scaffold completed successfully");
        Ok(structure)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write project structure to filesystem with rollback on failure.
    fn write_structure(
        &self,
        structure: &ProjectStructure,
        options: ScaffoldOptions,
    ) -> WebsmithResult<()> {
        if self.filesystem.exists(structure.root()) {
            if !options.force {
                return Err(ApplicationError::ProjectExists {
                    path: structure.root().to_path_buf(),
                }
                .into());
            }
            warn!(path = %structure.root().display(), "Removing existing directory (--force)");
            self.filesystem.remove_dir_all(structure.root())?;
        }

        match self.write_all(structure) {
            Ok(()) => {
                info!("Successfully wrote all files");
                Ok(())
            }
            Err(e) => {
                warn!("Write failed, attempting rollback");
                self.rollback(structure.root());
                Err(e)
            }
        }
    }

    /// Write all entries in the structure.
    fn write_all(&self, structure: &ProjectStructure) -> WebsmithResult<()> {
        self.filesystem.create_dir_all(structure.root())?;

        for entry in &structure.entries {
            match entry {
                FsEntry::Directory(dir) => {
                    let path = structure.root().join(&dir.path);
                    self.filesystem.create_dir_all(&path)?;
                }
                FsEntry::File(file) => {
                    let path = structure.root().join(&file.path);

                    // Ensure parent exists
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    self.filesystem.write_file(&path, &file.content)?;

                    if file.permissions.executable_flag() {
                        self.filesystem.set_permissions(&path, true)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}
