//! Command handlers.
//!
//! Each submodule implements one subcommand's `execute` function.  Handlers
//! translate CLI arguments into core types, call the core services, and
//! display results — no business logic lives here.

pub mod completions;
pub mod new;
