//! Flags accepted by every subcommand, flattened into [`super::Cli`].

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log more; repeat for more detail.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more (-v info, -vv debug, -vvv trace)",
        long_help = "Raise the stderr log level. Without the flag only warnings \
                     and errors are shown; -v adds record creation, -vv adds \
                     configuration and output decisions, -vvv adds every generated id."
    )]
    pub verbose: u8,

    /// Only errors reach stderr; stdout stays empty.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print nothing but errors"
    )]
    pub quiet: bool,

    /// Plain output. `NO_COLOR=1` has the same effect; `NO_COLOR=0` or an
    /// empty value does not.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// TOML file read instead of the platform default; it must exist.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read configuration from FILE"
    )]
    pub config: Option<PathBuf>,

    /// `auto` defers to `output.format` in the config, then to the terminal.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How to render records and check results"
    )]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Config value, else human on a terminal and plain otherwise.
    #[default]
    Auto,
    /// Colored labels.
    Human,
    /// Labels without ANSI codes.
    Plain,
    /// One JSON document on stdout.
    Json,
}
