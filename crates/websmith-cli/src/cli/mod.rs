//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "websmith",
    bin_name = "websmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Instant web-service scaffolding",
    long_about = "Websmith generates a ready-to-run web-service project: \
                  server bootstrap, configuration loader, structured logging, \
                  error taxonomy, and middleware wiring.",
    after_help = "EXAMPLES:\n\
        \x20 websmith new demo\n\
        \x20 websmith new my-api --port 9000 --yes\n\
        \x20 websmith new my-api --dry-run\n\
        \x20 websmith completions bash > /usr/share/bash-completion/completions/websmith",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new web-service project.
    #[command(
        visible_alias = "n",
        about = "Create a new web-service project",
        after_help = "EXAMPLES:\n\
            \x20 websmith new demo\n\
            \x20 websmith new my-api --port 9000\n\
            \x20 websmith new my-api --force --yes"
    )]
    New(NewArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 websmith completions bash > ~/.local/share/bash-completion/completions/websmith\n\
            \x20 websmith completions zsh  > ~/.zfunc/_websmith\n\
            \x20 websmith completions fish > ~/.config/fish/completions/websmith.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `websmith new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name or path.  A plain name creates `./name`; a path like
    /// `../foo` places the project one level up.  When omitted, the name is
    /// read from an interactive prompt.
    #[arg(value_name = "NAME", help = "Project name or path")]
    pub name: Option<String>,

    /// HTTP port written into the generated config file.
    #[arg(
        short = 'p',
        long = "port",
        value_name = "PORT",
        help = "Server port for the generated config (default: 8888)"
    )]
    pub port: Option<u16>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Overwrite an existing directory (destructive).
    #[arg(long = "force", help = "Overwrite existing directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `websmith completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from(["websmith", "new", "my-project"]);
        assert!(matches!(cli.command, Commands::New(_)));
    }

    #[test]
    fn name_is_optional() {
        let cli = Cli::parse_from(["websmith", "new"]);
        if let Commands::New(args) = cli.command {
            assert!(args.name.is_none());
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn port_flag_parses() {
        let cli = Cli::parse_from(["websmith", "new", "demo", "--port", "9000"]);
        if let Commands::New(args) = cli.command {
            assert_eq!(args.port, Some(9000));
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn new_alias_works() {
        let cli = Cli::parse_from(["websmith", "n", "demo", "-y"]);
        if let Commands::New(args) = cli.command {
            assert!(args.yes);
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["websmith", "--quiet", "--verbose", "new", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn completions_parses_shell() {
        let cli = Cli::parse_from(["websmith", "completions", "zsh"]);
        if let Commands::Completions(args) = cli.command {
            assert!(matches!(args.shell, Shell::Zsh));
        } else {
            panic!("expected Completions command");
        }
    }
}
