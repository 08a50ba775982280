//! Flags shared by every websmith subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true` so `websmith -v new x`
//! and `websmith new x -v` both work.

use clap::Args;
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Logging verbosity, counted.
    ///
    /// No flag logs warnings only; `-v` adds progress, `-vv` diagnostics,
    /// `-vvv` everything.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - warnings and errors only
    -v      - progress messages
    -vv     - detailed diagnostics
    -vvv    - everything, including trace spans"
    )]
    pub verbose: u8,

    /// Keep stdout clean; only errors reach the terminal.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Also triggered by the `NO_COLOR` environment variable
    /// (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Tool configuration file. When absent, the platform config directory
    /// is consulted and silently skipped if empty.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Output rendering mode.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How console output is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pick `Human` on a terminal, `Plain` otherwise.
    #[default]
    Auto,
    /// Coloured, for people.
    Human,
    /// No ANSI codes, for pipes and logs.
    Plain,
}
