//! Websmith Core - domain and application layers.
//!
//! This crate provides the pure logic behind the `websmith` scaffolding tool,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         websmith-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ScaffoldService)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │    (Driven: Filesystem, Renderer)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    websmith-adapters (Infrastructure)   │
//! │  (LocalFilesystem, SimpleRenderer, …)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Skeleton, RenderContext, Structure)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The [`record`] module is independent of the scaffolding pipeline: it is the
//! generic field-copy utility that websmith also embeds into generated
//! services.

// Domain layer (skeleton templates, render context, project structure)
pub mod domain;

// Application layer (orchestration + ports)
pub mod application;

// Generic record field-copier
pub mod record;

// Unified error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService,
        ports::{Filesystem, SkeletonRenderer},
    };
    pub use crate::domain::{
        DirectorySpec, FileSpec, ProjectStructure, RenderContext, Skeleton, SkeletonNode,
    };
    pub use crate::error::{WebsmithError, WebsmithResult};
    pub use crate::record::{CopyMode, CopyReport, copy_fields};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
