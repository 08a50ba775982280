//! Skeleton: the declarative description of a project to generate.
//!
//! A [`Skeleton`] is a named, versioned list of nodes (files and
//! directories). File content is either `Literal` (copied as-is) or
//! `Parameterized` (subject to `{{VAR}}` substitution with a
//! [`RenderContext`](super::RenderContext)).
//!
//! Literal content skips the rendering pass entirely - for a long license
//! file or a lock file that matters. Both variants reference `&'static str`
//! because the bundled skeleton is compiled into the binary.

use std::collections::HashSet;

use crate::domain::{common::Permissions, error::DomainError};

/// A project skeleton: the aggregate root of the domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Skeleton {
    /// Stable identifier, e.g. `web-service`.
    pub name: &'static str,
    /// Skeleton revision, bumped when the generated file set changes.
    pub version: &'static str,
    /// Human-readable description shown in `--dry-run` output.
    pub description: &'static str,
    /// Files and directories to generate, in emission order.
    pub nodes: Vec<SkeletonNode>,
}

impl Skeleton {
    pub fn new(name: &'static str, version: &'static str, description: &'static str) -> Self {
        Self {
            name,
            version,
            description,
            nodes: Vec::new(),
        }
    }

    /// Append a node, preserving emission order.
    pub fn with_node(mut self, node: SkeletonNode) -> Self {
        self.nodes.push(node);
        self
    }

    /// Validate structural invariants: non-empty, no duplicate paths, no
    /// absolute paths.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.nodes.is_empty() {
            return Err(DomainError::EmptySkeleton {
                name: self.name.to_string(),
            });
        }

        let mut seen = HashSet::new();
        for node in &self.nodes {
            let path = node.path();
            if path.starts_with('/') {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.to_string(),
                });
            }
            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &FileSpec> {
        self.nodes.iter().filter_map(|n| match n {
            SkeletonNode::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectorySpec> {
        self.nodes.iter().filter_map(|n| match n {
            SkeletonNode::Directory(d) => Some(d),
            _ => None,
        })
    }
}

/// A single entry in a skeleton tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SkeletonNode {
    File(FileSpec),
    Directory(DirectorySpec),
}

impl SkeletonNode {
    pub fn path(&self) -> &'static str {
        match self {
            Self::File(f) => f.path,
            Self::Directory(d) => d.path,
        }
    }
}

/// A file to generate.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSpec {
    pub path: &'static str,
    pub content: SkeletonContent,
    pub permissions: Permissions,
}

impl FileSpec {
    pub fn new(path: &'static str, content: SkeletonContent) -> Self {
        Self {
            path,
            content,
            permissions: Permissions::read_write(),
        }
    }
}

/// A directory to create.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectorySpec {
    pub path: &'static str,
    pub permissions: Permissions,
}

impl DirectorySpec {
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            permissions: Permissions::read_write(),
        }
    }
}

/// File content with explicit rendering intent.
#[derive(Debug, Clone, PartialEq)]
pub enum SkeletonContent {
    /// Copied verbatim; never scanned for placeholders.
    Literal(&'static str),
    /// Rendered through the `RenderContext` variable map.
    Parameterized(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> Skeleton {
        Skeleton::new("test", "1.0.0", "test skeleton")
            .with_node(SkeletonNode::Directory(DirectorySpec::new("src")))
            .with_node(SkeletonNode::File(FileSpec::new(
                "src/main.rs",
                SkeletonContent::Parameterized("// {{PROJECT_NAME}}\n"),
            )))
    }

    #[test]
    fn valid_skeleton_passes() {
        assert!(minimal().validate().is_ok());
    }

    #[test]
    fn empty_skeleton_rejected() {
        let s = Skeleton::new("empty", "1.0.0", "");
        assert!(matches!(
            s.validate(),
            Err(DomainError::EmptySkeleton { .. })
        ));
    }

    #[test]
    fn duplicate_path_rejected() {
        let s = minimal().with_node(SkeletonNode::Directory(DirectorySpec::new("src")));
        assert!(matches!(s.validate(), Err(DomainError::DuplicatePath { .. })));
    }

    #[test]
    fn absolute_path_rejected() {
        let s = Skeleton::new("abs", "1.0.0", "")
            .with_node(SkeletonNode::Directory(DirectorySpec::new("/etc")));
        assert!(matches!(
            s.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn files_and_directories_iterators() {
        let s = minimal();
        assert_eq!(s.files().count(), 1);
        assert_eq!(s.directories().count(), 1);
    }
}
