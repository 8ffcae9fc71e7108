//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No domain logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Running without a subcommand is the same as `projshell demo`.
#[derive(Debug, Parser)]
#[command(
    name    = "projshell",
    bin_name = "projshell",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Project shell with a demonstration record module",
    long_about = "projshell builds demonstration records (id, name, email), \
                  checks email formatting and prints the results.",
    after_help = "EXAMPLES:\n\
        \x20 projshell\n\
        \x20 projshell new \"Jane Doe\" jane@example.com --strict\n\
        \x20 projshell check test@example.com test@ --output-format json\n\
        \x20 projshell completions bash > /usr/share/bash-completion/completions/projshell",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the sample record and print it (the default).
    #[command(about = "Build and print the sample record")]
    Demo,

    /// Create a record from a name and an email.
    #[command(
        visible_alias = "n",
        about = "Create a record",
        after_help = "EXAMPLES:\n\
            \x20 projshell new \"Jane Doe\" jane@example.com\n\
            \x20 projshell new bob bob@example.com --strict\n\
            \x20 projshell new bob bob@example.com --id-strategy sequence"
    )]
    New(NewArgs),

    /// Check email addresses against the format pattern.
    #[command(
        visible_alias = "c",
        about = "Check email format",
        after_help = "EXAMPLES:\n\
            \x20 projshell check test@example.com\n\
            \x20 projshell check a@b.co bad@ --strict"
    )]
    Check(CheckArgs),

    /// Initialise a configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 projshell init\n\
            \x20 projshell init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 projshell completions bash > ~/.local/share/bash-completion/completions/projshell\n\
            \x20 projshell completions zsh  > ~/.zfunc/_projshell\n\
            \x20 projshell completions fish > ~/.config/fish/completions/projshell.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 projshell config get records.id_strategy\n\
            \x20 projshell config list\n\
            \x20 projshell config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `projshell new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Display name; any string is accepted.
    #[arg(value_name = "NAME", help = "Record name")]
    pub name: String,

    /// Email address; only checked when `--strict` is in effect.
    #[arg(value_name = "EMAIL", help = "Record email")]
    pub email: String,

    /// Reject the record if the email is malformed.
    #[arg(
        short = 's',
        long = "strict",
        help = "Validate the email at construction time"
    )]
    pub strict: bool,

    /// Override the configured identifier strategy.
    #[arg(
        long = "id-strategy",
        value_name = "STRATEGY",
        value_enum,
        help = "Identifier strategy"
    )]
    pub id_strategy: Option<IdStrategy>,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `projshell check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Addresses to check.
    #[arg(value_name = "EMAIL", required = true, help = "Email addresses")]
    pub emails: Vec<String>,

    /// Exit with a user error if any address is malformed.
    #[arg(short = 's', long = "strict", help = "Fail when any address is invalid")]
    pub strict: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `projshell init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `projshell completions`.
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

/// Subcommands for `projshell config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `records.id_strategy`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// How record identifiers are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random UUID v4.
    #[default]
    Uuid,
    /// `<prefix>-<n>` counting from 1.
    Sequence,
}

impl std::fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uuid => write!(f, "uuid"),
            Self::Sequence => write!(f, "sequence"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
