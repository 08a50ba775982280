//! Core domain layer for Websmith.
//!
//! Pure business logic: skeleton templates, render contexts, and project
//! structures. All I/O and rendering concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! - No async: domain logic is synchronous
//! - No I/O: no filesystem, network, or external calls
//! - Immutable entities: all domain objects are Clone + PartialEq where
//!   comparison makes sense

pub mod common;
pub mod context;
pub mod error;
pub mod skeleton;
pub mod structure;

mod validation;

pub use common::Permissions;
pub use context::{DEFAULT_SERVER_MODE, DEFAULT_SERVER_PORT, RenderContext, fresh_secret_token};
pub use error::{DomainError, ErrorCategory};
pub use skeleton::{DirectorySpec, FileSpec, Skeleton, SkeletonContent, SkeletonNode};
pub use structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure};
pub use validation::{DomainValidator, validate_project_name};
