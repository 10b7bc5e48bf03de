//! `stackgen config` — read and write configuration values.

use std::path::PathBuf;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value:?}"))?;
        }

        ConfigCommands::Set { key, value } => {
            let path = active_config_path(&global);
            let mut updated = config;
            set_config_value(&mut updated, &key, &value)?;
            write_config(&updated, &path)?;
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&active_config_path(&global).display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// The file `get`/`set`/`path` operate on: the `--config` override if one
/// was given, the default location otherwise.
fn active_config_path(global: &GlobalArgs) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(AppConfig::config_path)
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let unset_or = |v: Option<String>| v.unwrap_or_default();
    match key {
        "defaults.db_port" => Ok(unset_or(config.defaults.db_port.map(|p| p.to_string()))),
        "defaults.http_port" => Ok(unset_or(config.defaults.http_port.map(|p| p.to_string()))),
        "defaults.admin_ui_port" => Ok(unset_or(
            config.defaults.admin_ui_port.map(|p| p.to_string()),
        )),
        "defaults.db_user" => Ok(unset_or(config.defaults.db_user.clone())),
        "defaults.db_pass" => Ok(unset_or(config.defaults.db_pass.clone())),
        "defaults.api_key" => Ok(unset_or(config.defaults.api_key.clone())),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(unknown_key(key)),
    }
}

fn set_config_value(config: &mut AppConfig, key: &str, value: &str) -> CliResult<()> {
    match key {
        "defaults.db_port" => config.defaults.db_port = Some(parse_value(key, value)?),
        "defaults.http_port" => config.defaults.http_port = Some(parse_value(key, value)?),
        "defaults.admin_ui_port" => {
            config.defaults.admin_ui_port = Some(parse_value(key, value)?);
        }
        "defaults.db_user" => config.defaults.db_user = Some(value.into()),
        "defaults.db_pass" => config.defaults.db_pass = Some(value.into()),
        "defaults.api_key" => config.defaults.api_key = Some(value.into()),
        "output.no_color" => config.output.no_color = parse_value(key, value)?,
        "output.format" => config.output.format = value.into(),
        _ => return Err(unknown_key(key)),
    }
    Ok(())
}

/// Parse a string value into the key's native type, wrapping parse failures
/// in a `ConfigError` that names the key.
fn parse_value<T>(key: &str, value: &str) -> CliResult<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.parse().map_err(|e: T::Err| CliError::ConfigError {
        message: format!("Invalid value '{value}' for '{key}': {e}"),
        source: Some(Box::new(e)),
    })
}

fn write_config(config: &AppConfig, path: &std::path::Path) -> CliResult<()> {
    let toml = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_cli_context(|| {
                format!("Failed to create config directory '{}'", parent.display())
            })?;
        }
    }
    std::fs::write(path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
