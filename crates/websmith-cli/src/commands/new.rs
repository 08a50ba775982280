//! Implementation of the `websmith new` command.
//!
//! Responsibility: resolve the project name and target path, build a
//! `RenderContext`, call the core scaffold service, and display results.
//! No business logic lives here.

use std::io::IsTerminal as _;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use websmith_adapters::{LocalFilesystem, SimpleRenderer, web_service_skeleton};
use websmith_core::{
    application::{ScaffoldOptions, ScaffoldService, ports::SkeletonRenderer},
    domain::{FsEntry, RenderContext, validate_project_name as core_validate_name},
};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `websmith new` command.
///
/// Dispatch sequence:
/// 1. Resolve the project name (argument or interactive prompt)
/// 2. Validate the name and split off the output path
/// 3. Build the render context (port override, fresh secret token)
/// 4. Confirm with user unless `--yes` or `--quiet`
/// 5. Early-exit if `--dry-run` (render and list, write nothing)
/// 6. Execute scaffolding via `ScaffoldService`
/// 7. Print next-steps guidance
#[instrument(skip_all)]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Resolve project name
    let raw_name = match args.name {
        Some(name) => name,
        None => prompt_for_name()?,
    };

    // 2. Resolve project path and validate
    let (project_name, project_path) = resolve_project_path(&raw_name)?;
    core_validate_name(&project_name).map_err(|e| CliError::InvalidProjectName {
        name: project_name.clone(),
        reason: e.to_string(),
    })?;

    // 3. Build the render context
    let port = args.port.unwrap_or(config.defaults.port);
    let mode = config.defaults.mode.as_str();
    let context = RenderContext::new(&project_name)
        .with_port(port)
        .with_mode(mode);
    let skeleton = web_service_skeleton();

    debug!(
        project = %project_name,
        port,
        mode,
        path = %project_path.display(),
        "Scaffold target resolved"
    );

    // 4. Show configuration and confirm
    if !output.is_quiet() && !args.yes && !args.dry_run {
        show_configuration(&project_name, port, mode, &project_path, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 5. Dry run: render and describe, but do not write.
    if args.dry_run {
        let renderer = SimpleRenderer::new();
        let structure = renderer
            .render(&skeleton, &context, &project_path)
            .map_err(CliError::Core)?;

        output.info(&format!(
            "Dry run: would create '{}' at {} ({} entries)",
            project_name,
            project_path.display(),
            structure.entry_count(),
        ))?;
        for entry in &structure.entries {
            match entry {
                FsEntry::Directory(dir) => output.print(&format!("  {}/", dir.path.display()))?,
                FsEntry::File(file) => output.print(&format!("  {}", file.path.display()))?,
            }
        }
        return Ok(());
    }

    // 6. Create adapters and scaffold
    let service = ScaffoldService::new(
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    if args.force && project_path.exists() {
        output.warning(&format!(
            "Overwriting existing directory {}",
            project_path.display()
        ))?;
    }

    output.header(&format!("Creating '{project_name}'..."))?;
    info!(project = %project_name, path = %project_path.display(), "Scaffold started");

    let structure = service
        .scaffold(
            &skeleton,
            &context,
            &project_path,
            ScaffoldOptions { force: args.force },
        )
        .map_err(CliError::Core)?;

    info!(
        project = %project_name,
        entries = structure.entry_count(),
        "Scaffold completed"
    );

    // 7. Success + next steps
    output.success(&format!("Project '{project_name}' created!"))?;

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {project_name}"))?;
        output.print("  cargo run")?;
        output.print(&format!(
            "  curl http://127.0.0.1:{port}/healthz  # in another terminal"
        ))?;
    }

    Ok(())
}

// ── Name resolution ───────────────────────────────────────────────────────────

/// Read the project name from an interactive prompt.
///
/// Fails fast when stdin is not a terminal: a piped invocation without a NAME
/// argument is a usage error, not something to hang on.
fn prompt_for_name() -> CliResult<String> {
    use std::io::{self, Write};

    if !io::stdin().is_terminal() {
        return Err(CliError::InvalidInput {
            message: "no project name given and stdin is not interactive".into(),
            source: None,
        });
    }

    print!("Project name: ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read project name".into(),
            source: e,
        })?;

    let name = input.trim().to_string();
    if name.is_empty() {
        return Err(CliError::InvalidProjectName {
            name,
            reason: "name cannot be empty".into(),
        });
    }
    Ok(name)
}

/// Split a name-or-path argument into the project name and the full target
/// directory.  A plain name creates `./name`; `../foo` places the project one
/// level up.
pub fn resolve_project_path(name: &str) -> CliResult<(String, PathBuf)> {
    let path = Path::new(name);

    let project_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::InvalidProjectName {
            name: name.into(),
            reason: "cannot extract valid project name".into(),
        })?
        .to_string();

    Ok((project_name, path.to_path_buf()))
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    name: &str,
    port: u16,
    mode: &str,
    project_path: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:  {name}"))?;
    out.print(&format!("  Port:     {port}"))?;
    out.print(&format!("  Mode:     {mode}"))?;
    out.print(&format!("  Location: {}", project_path.display()))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
