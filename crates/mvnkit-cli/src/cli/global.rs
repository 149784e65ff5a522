//! Flags shared by every `mvnkit` subcommand, flattened into [`super::Cli`].

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// `-v` shows each pipeline command, `-vv` adds parsed descriptors and
    /// config, `-vvv` everything.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Log level on stderr (RUST_LOG takes precedence):
    (none)  - warnings and errors
    -v      - info: every build tool command and report path
    -vv     - debug: resolved descriptors and config
    -vvv    - trace"
    )]
    pub verbose: u8,

    /// Only errors and failed checks are printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Also set by `NO_COLOR` or `output.no_color`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Application config (TOML). Not the project descriptor, which
    /// `generate --project-config` takes.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "mvnkit configuration file (TOML)"
    )]
    pub config: Option<PathBuf>,

    /// `json` makes `test` print the run result as JSON on stdout.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of command output on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `Human` on a terminal, `Plain` otherwise.
    #[default]
    Auto,
    /// Colours and spinners.
    Human,
    Plain,
    /// Command results as JSON.
    Json,
}
