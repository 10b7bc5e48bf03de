//! Implementation of the `stackgen new` command.
//!
//! Responsibility: merge CLI arguments and config into a
//! `GenerationRequest`, call the core materialize service, and display
//! results. No business logic lives here.

use std::path::Path;

use tracing::{debug, info, instrument};

use stackgen_adapters::{LocalFilesystem, PresetRegistry};
use stackgen_core::prelude::*;

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `stackgen new` command.
///
/// Dispatch sequence:
/// 1. Resolve flag → config → built-in fallbacks into a request
/// 2. Warn when the target directory already exists
/// 3. Early-exit if `--dry-run`
/// 4. Materialize the stack via `MaterializeService`
/// 5. Print next-steps guidance
#[instrument(skip_all, fields(target = %args.path))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve parameters (all validation happens inside the builder)
    let request = build_request(&args, &config)?;

    debug!(
        template = %request.selector(),
        db_port = request.db_port(),
        http_port = request.http_port(),
        admin_ui_port = request.admin_ui_port(),
        "Request resolved"
    );

    // 2. Merging into an existing directory is unsupported; the generator
    //    overwrites files it owns and leaves the rest alone.
    if Path::new(&args.path).exists() {
        output.warning(&format!(
            "Target directory '{}' already exists; generated files will overwrite existing ones",
            args.path
        ))?;
    }

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        output.info(&format!(
            "Dry run: would generate a stack in '{}'",
            args.path
        ))?;
        output.info(&format!("  Template:      {}", request.selector()))?;
        output.info(&format!("  MongoDB port:  {}", request.db_port()))?;
        output.info(&format!("  HTTP port:     {}", request.http_port()))?;
        output.info(&format!("  Admin UI port: {}", request.admin_ui_port()))?;
        for spec in stack_artifacts() {
            output.info(&format!("  + {}", spec.path))?;
        }
        return Ok(());
    }

    // 4. Create adapters and materialize
    let registry = Box::new(PresetRegistry::new());
    let filesystem = Box::new(LocalFilesystem::new());
    let service = MaterializeService::new(registry, filesystem);

    output.header(&format!("Generating stack in '{}'...", args.path))?;
    info!(target = %args.path, "Generation started");

    let report = service
        .materialize(&request)
        .map_err(|e| CliError::Core(e.into()))?;

    info!(artifacts = report.artifacts.len(), "Generation completed");

    // 5. Success + next steps
    output.success(&format!("Stack generated at '{}'", report.root.display()))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", args.path))?;
        output.print("  ./compose.sh up --build")?;
    }

    Ok(())
}

// ── Request construction ──────────────────────────────────────────────────────

/// Merge flags over config over compiled-in defaults into a request.
///
/// Precedence per field: CLI flag, then the config file's `[defaults]`
/// table, then the built-in value (the builder pre-fills those).  The API
/// key additionally must not resolve to an empty string: the generated
/// server rejects every request without one.
fn build_request(args: &NewArgs, config: &AppConfig) -> CliResult<GenerationRequest> {
    let overrides = &config.defaults;

    let mut builder = GenerationRequest::builder()
        .target_dir(args.path.as_str())
        .template(args.template.as_str());

    if let Some(port) = args.db_port.or(overrides.db_port.map(u32::from)) {
        builder = builder.db_port(port);
    }
    if let Some(port) = args.http_port.or(overrides.http_port.map(u32::from)) {
        builder = builder.http_port(port);
    }
    if let Some(port) = args.admin_port.or(overrides.admin_ui_port.map(u32::from)) {
        builder = builder.admin_ui_port(port);
    }
    if let Some(user) = args.db_user.clone().or_else(|| overrides.db_user.clone()) {
        builder = builder.db_user(user);
    }
    if let Some(pass) = args.db_pass.clone().or_else(|| overrides.db_pass.clone()) {
        builder = builder.db_pass(pass);
    }
    if let Some(key) = args.api_key.clone().or_else(|| overrides.api_key.clone()) {
        if key.is_empty() {
            return Err(CliError::MissingApiKey);
        }
        builder = builder.api_key(key);
    }

    builder.build().map_err(|e| CliError::Core(e.into()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
