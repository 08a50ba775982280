//! Application layer: use-case orchestration over domain objects.
//!
//! Defines the driven ports (what the application needs from
//! infrastructure) and the [`ScaffoldService`] that coordinates a scaffold
//! run end to end.

pub mod error;
pub mod ports;
pub mod scaffold;

pub use error::ApplicationError;
pub use scaffold::{ScaffoldOptions, ScaffoldService};
