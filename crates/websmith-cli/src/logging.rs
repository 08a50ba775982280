//! Tracing setup for the websmith binary.
//!
//! The subscriber is built and installed here, once, at startup. The core
//! and adapter crates emit events but never construct subscribers, and the
//! generated services follow the same rule in their own `logging.rs`.
//!
//! Verbosity flags translate to a filter level (no flag: warn, `-v`: info,
//! `-vv`: debug, `-vvv`: trace, `--quiet`: error). A `RUST_LOG` environment
//! variable overrides the whole mapping.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Build and install the global tracing subscriber.
///
/// Call once before any tracing macro fires; a second installation attempt
/// in the same process is an error.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    // Without RUST_LOG, apply the derived level to all three websmith crates
    // and leave dependencies at their defaults.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "websmith={level},websmith_core={level},websmith_adapters={level}",
        ))
    });

    // Events go to stderr so they never mix with command output on stdout.
    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat};

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn level_default_is_warn() {
        assert_eq!(derive_level(&args_with(0, false)), "warn");
    }

    #[test]
    fn levels_step_with_verbosity() {
        assert_eq!(derive_level(&args_with(1, false)), "info");
        assert_eq!(derive_level(&args_with(2, false)), "debug");
        assert_eq!(derive_level(&args_with(3, false)), "trace");
        assert_eq!(derive_level(&args_with(10, false)), "trace");
    }

    #[test]
    fn quiet_means_errors_only() {
        assert_eq!(derive_level(&args_with(0, true)), "error");
    }

    // quiet takes precedence over verbose
    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(derive_level(&args_with(3, true)), "error");
    }
}
