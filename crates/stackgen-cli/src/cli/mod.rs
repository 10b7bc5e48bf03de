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
    name    = "stackgen",
    bin_name = "stackgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Instant docker-compose stack scaffolding",
    long_about = "Stackgen generates ready-to-run docker-compose projects: \
                  a MongoDB container, a mongo-express admin UI, and a Go \
                  HTTP storage server built from a template.",
    after_help = "EXAMPLES:\n\
        \x20 stackgen new my-project --template preset:simple\n\
        \x20 stackgen new my-game    --template preset:multi --db-port 28017\n\
        \x20 stackgen new my-app     --template ./custom/main.go --api-key k3y\n\
        \x20 stackgen list\n\
        \x20 stackgen completions bash > /usr/share/bash-completion/completions/stackgen",
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
    /// Generate a new project stack.
    #[command(
        visible_alias = "n",
        about = "Generate a new project stack",
        after_help = "EXAMPLES:\n\
            \x20 stackgen new my-project --template preset:simple\n\
            \x20 stackgen new my-game    --template preset:multi --db-user svc --db-pass s3cr3t\n\
            \x20 stackgen new ../shared/my-app --template ./templates/main.go --http-port 9090"
    )]
    New(NewArgs),

    /// List the built-in application templates.
    #[command(
        visible_alias = "ls",
        about = "List built-in application templates",
        after_help = "EXAMPLES:\n\
            \x20 stackgen list\n\
            \x20 stackgen list --format json\n\
            \x20 stackgen list --format csv"
    )]
    List(ListArgs),

    /// Initialise a Stackgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stackgen init           # default location\n\
            \x20 stackgen init --global  # global config\n\
            \x20 stackgen init --local   # local config in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stackgen completions bash > ~/.local/share/bash-completion/completions/stackgen\n\
            \x20 stackgen completions zsh  > ~/.zfunc/_stackgen\n\
            \x20 stackgen completions fish > ~/.config/fish/completions/stackgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Stackgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stackgen config get defaults.db_port\n\
            \x20 stackgen config set defaults.db_user svc\n\
            \x20 stackgen config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `stackgen new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Target directory for the generated stack.  A plain name creates
    /// `./name`; a path like `../foo` places the stack one level up.
    #[arg(value_name = "PATH", help = "Target directory for the generated stack")]
    pub path: String,

    /// Application template selector.
    #[arg(
        short = 't',
        long = "template",
        value_name = "SELECTOR",
        help = "Application template: preset:simple, preset:multi, or a file path"
    )]
    pub template: String,

    /// Host port mapped to the MongoDB container.
    #[arg(
        long = "db-port",
        value_name = "PORT",
        help = "Host port for MongoDB (default: 27017)"
    )]
    pub db_port: Option<u32>,

    /// Host port mapped to the HTTP storage server.
    #[arg(
        long = "http-port",
        value_name = "PORT",
        help = "Host port for the HTTP server (default: 8080)"
    )]
    pub http_port: Option<u32>,

    /// Host port mapped to the mongo-express admin UI.
    #[arg(
        long = "admin-port",
        value_name = "PORT",
        help = "Host port for the mongo-express UI (default: 8081)"
    )]
    pub admin_port: Option<u32>,

    /// MongoDB root username.
    #[arg(
        long = "db-user",
        value_name = "USER",
        help = "MongoDB root username (default: admin)"
    )]
    pub db_user: Option<String>,

    /// MongoDB root password.
    #[arg(
        long = "db-pass",
        value_name = "PASS",
        help = "MongoDB root password (default: p455w0rd)"
    )]
    pub db_pass: Option<String>,

    /// API key the HTTP server requires from its clients.
    #[arg(
        long = "api-key",
        value_name = "KEY",
        help = "API key for the HTTP server (default: sample-abcdef)"
    )]
    pub api_key: Option<String>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `stackgen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One selector per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stackgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Write to `.stackgen.toml` in the current directory.
    #[arg(
        long = "local",
        conflicts_with = "global",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stackgen completions`.
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

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stackgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.db_port`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from([
            "stackgen",
            "new",
            "my-project",
            "--template",
            "preset:simple",
        ]);
        assert!(matches!(cli.command, Commands::New(_)));
    }

    #[test]
    fn new_accepts_all_override_flags() {
        let cli = Cli::parse_from([
            "stackgen",
            "new",
            "my-project",
            "-t",
            "preset:multi",
            "--db-port",
            "28017",
            "--http-port",
            "9090",
            "--admin-port",
            "9091",
            "--db-user",
            "svc",
            "--db-pass",
            "s3cr3t",
            "--api-key",
            "k3y",
        ]);
        if let Commands::New(args) = cli.command {
            assert_eq!(args.template, "preset:multi");
            assert_eq!(args.db_port, Some(28_017));
            assert_eq!(args.http_port, Some(9_090));
            assert_eq!(args.admin_port, Some(9_091));
            assert_eq!(args.db_user.as_deref(), Some("svc"));
            assert_eq!(args.db_pass.as_deref(), Some("s3cr3t"));
            assert_eq!(args.api_key.as_deref(), Some("k3y"));
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn new_requires_a_template() {
        let result = Cli::try_parse_from(["stackgen", "new", "my-project"]);
        assert!(result.is_err());
    }

    #[test]
    fn new_alias_n_works() {
        let cli = Cli::parse_from(["stackgen", "n", "proj", "-t", "preset:simple"]);
        assert!(matches!(cli.command, Commands::New(_)));
    }

    #[test]
    fn list_defaults_to_table_format() {
        let cli = Cli::parse_from(["stackgen", "list"]);
        if let Commands::List(args) = cli.command {
            assert!(matches!(args.format, ListFormat::Table));
        } else {
            panic!("expected List command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["stackgen", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn init_local_and_global_conflict() {
        let result = Cli::try_parse_from(["stackgen", "init", "--local", "--global"]);
        assert!(result.is_err());
    }
}
