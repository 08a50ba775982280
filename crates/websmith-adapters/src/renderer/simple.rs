//! Simple variable substitution renderer.

use std::path::Path;

use tracing::instrument;
use websmith_core::{
    application::ports::SkeletonRenderer,
    domain::{
        DomainValidator as validator, ProjectStructure, RenderContext, Skeleton, SkeletonContent,
        SkeletonNode,
    },
    error::{WebsmithError, WebsmithResult},
};

/// Renderer using basic `{{VAR}}` substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl SkeletonRenderer for SimpleRenderer {
    #[instrument(skip_all)]
    fn render(
        &self,
        skeleton: &Skeleton,
        context: &RenderContext,
        output_root: &Path,
    ) -> WebsmithResult<ProjectStructure> {
        // Validate skeleton first
        validator::validate_skeleton(skeleton).map_err(WebsmithError::Domain)?;

        let mut structure = ProjectStructure::new(output_root);

        for node in &skeleton.nodes {
            match node {
                SkeletonNode::File(spec) => {
                    let content = match &spec.content {
                        SkeletonContent::Literal(source) => (*source).to_string(),
                        SkeletonContent::Parameterized(source) => context.render(source),
                    };
                    structure.add_file(spec.path, content, spec.permissions);
                }
                SkeletonNode::Directory(spec) => {
                    structure.add_directory(spec.path, spec.permissions);
                }
            }
        }

        // Validate final structure
        validator::validate_project_structure(&structure).map_err(WebsmithError::Domain)?;

        Ok(structure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use websmith_core::domain::{DirectorySpec, FileSpec};

    fn skeleton() -> Skeleton {
        Skeleton::new("test", "1.0.0", "test")
            .with_node(SkeletonNode::Directory(DirectorySpec::new("src")))
            .with_node(SkeletonNode::File(FileSpec::new(
                "src/main.rs",
                SkeletonContent::Parameterized("// {{PROJECT_NAME}}\n"),
            )))
            .with_node(SkeletonNode::File(FileSpec::new(
                "README.md",
                SkeletonContent::Literal("# static {{NOT_A_VAR}}\n"),
            )))
    }

    #[test]
    fn parameterized_content_is_substituted() {
        let structure = SimpleRenderer::new()
            .render(&skeleton(), &RenderContext::new("demo"), Path::new("out"))
            .unwrap();

        let main = structure
            .files()
            .find(|f| f.path.ends_with("main.rs"))
            .unwrap();
        assert_eq!(main.content, "// demo\n");
    }

    #[test]
    fn literal_content_is_untouched() {
        let structure = SimpleRenderer::new()
            .render(&skeleton(), &RenderContext::new("demo"), Path::new("out"))
            .unwrap();

        let readme = structure
            .files()
            .find(|f| f.path.ends_with("README.md"))
            .unwrap();
        assert_eq!(readme.content, "# static {{NOT_A_VAR}}\n");
    }

    #[test]
    fn empty_skeleton_is_rejected() {
        let empty = Skeleton::new("empty", "1.0.0", "");
        let result =
            SimpleRenderer::new().render(&empty, &RenderContext::new("demo"), Path::new("out"));
        assert!(result.is_err());
    }
}
