//! Infrastructure adapters for Websmith.
//!
//! Implements the driven ports defined in `websmith_core::application::ports`
//! and carries the built-in web-service skeleton.

pub mod filesystem;
pub mod renderer;
pub mod skeleton;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
pub use skeleton::web_service_skeleton;
