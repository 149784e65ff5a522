//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use mvnkit_core::domain::{ReportFormat, TemplateFlavor};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "mvnkit",
    bin_name = "mvnkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Maven multi-module toolkit: generate, manage local jars, test",
    long_about = "mvnkit generates Maven multi-module projects, installs local \
                  jars into per-module lib directories and runs a fixed \
                  build/dependency/test pipeline with JSON, Markdown or HTML reports.",
    after_help = "EXAMPLES:\n\
        \x20 mvnkit generate shop --group-id com.acme\n\
        \x20 mvnkit generate shop --project-config project.yaml --dir ./work\n\
        \x20 mvnkit libs --manifest jars-config.yaml\n\
        \x20 mvnkit test --project-dir ./shop --format html\n\
        \x20 mvnkit completions bash > /usr/share/bash-completion/completions/mvnkit",
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
    /// Generate a Maven multi-module project.
    #[command(
        visible_alias = "gen",
        about = "Generate a Maven multi-module project",
        after_help = "EXAMPLES:\n\
            \x20 mvnkit generate demo\n\
            \x20 mvnkit generate shop --group-id com.acme --template full\n\
            \x20 mvnkit generate -f project.yaml --dry-run"
    )]
    Generate(GenerateArgs),

    /// Manage jars in per-module lib directories.
    #[command(
        about = "Manage local jar dependencies",
        after_help = "EXAMPLES:\n\
            \x20 mvnkit libs                       # run all steps\n\
            \x20 mvnkit libs --copy --generate\n\
            \x20 mvnkit libs --manifest libs.yaml --output pom-snippets.xml"
    )]
    Libs(LibsArgs),

    /// Run the build/dependency/test pipeline and write a report.
    #[command(
        about = "Run the test pipeline against a project",
        after_help = "EXAMPLES:\n\
            \x20 mvnkit test --project-dir ./demo\n\
            \x20 mvnkit test --format json\n\
            \x20 mvnkit test --build-only"
    )]
    Test(TestArgs),

    /// Generate a throwaway project, build it and test it.
    #[command(
        about = "Generate, build and test a project end to end",
        after_help = "EXAMPLES:\n\
            \x20 mvnkit flow\n\
            \x20 mvnkit flow --name smoke --dir /tmp/mvnkit"
    )]
    Flow(FlowArgs),

    /// Initialise an mvnkit configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 mvnkit init           # platform config location\n\
            \x20 mvnkit init --local   # ./mvnkit.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 mvnkit completions bash > ~/.local/share/bash-completion/completions/mvnkit\n\
            \x20 mvnkit completions zsh  > ~/.zfunc/_mvnkit\n\
            \x20 mvnkit completions fish > ~/.config/fish/completions/mvnkit.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the mvnkit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 mvnkit config get runner.maven\n\
            \x20 mvnkit config list\n\
            \x20 mvnkit config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `mvnkit generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Project name. Overrides `project_name` from `--project-config`.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// YAML project descriptor.
    #[arg(
        short = 'f',
        long = "project-config",
        value_name = "FILE",
        help = "Project descriptor (YAML)"
    )]
    pub project_config: Option<PathBuf>,

    #[arg(short = 'g', long = "group-id", value_name = "GROUP_ID")]
    pub group_id: Option<String>,

    /// Java package; defaults to the group id.
    #[arg(short = 'p', long = "package-name", value_name = "PACKAGE")]
    pub package_name: Option<String>,

    #[arg(long = "java-version", value_name = "VERSION")]
    pub java_version: Option<String>,

    #[arg(long = "spring-boot-version", value_name = "VERSION")]
    pub spring_boot_version: Option<String>,

    #[arg(
        short = 't',
        long = "template",
        value_enum,
        value_name = "TEMPLATE",
        help = "Project template"
    )]
    pub template: Option<TemplateArg>,

    /// Skip Java source stubs.
    #[arg(long = "no-examples", help = "Do not generate example sources")]
    pub no_examples: bool,

    /// Add `lib/` directories and local-jar POM wiring.
    #[arg(long = "with-local-lib", help = "Generate lib/ directories")]
    pub with_local_lib: bool,

    /// Directory the project is created in.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    /// List what would be written without writing it.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

/// Project template flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateArg {
    Minimal,
    Standard,
    Full,
}

impl From<TemplateArg> for TemplateFlavor {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Minimal => Self::Minimal,
            TemplateArg::Standard => Self::Standard,
            TemplateArg::Full => Self::Full,
        }
    }
}

// ── libs ──────────────────────────────────────────────────────────────────────

/// Arguments for `mvnkit libs`. No step flag means every step.
#[derive(Debug, Args)]
pub struct LibsArgs {
    /// Lib manifest (YAML). Defaults to `libs.manifest` from the app config.
    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "FILE",
        help = "Lib manifest (YAML)"
    )]
    pub manifest: Option<PathBuf>,

    #[arg(long = "setup", help = "Create jar source and lib directories")]
    pub setup: bool,

    #[arg(long = "copy", help = "Copy jars into lib directories")]
    pub copy: bool,

    #[arg(long = "generate", help = "Write the POM configuration document")]
    pub generate: bool,

    #[arg(long = "readme", help = "Write a README.md per lib directory")]
    pub readme: bool,

    #[arg(long = "all", help = "Run every step (the default)")]
    pub all: bool,

    /// Where the POM configuration document is written.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "POM configuration output file"
    )]
    pub output: Option<PathBuf>,
}

impl LibsArgs {
    /// `true` when no individual step was requested.
    pub fn runs_all(&self) -> bool {
        self.all || !(self.setup || self.copy || self.generate || self.readme)
    }
}

// ── test ──────────────────────────────────────────────────────────────────────

/// Arguments for `mvnkit test`.
#[derive(Debug, Args)]
pub struct TestArgs {
    #[arg(
        short = 'p',
        long = "project-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Project root (contains the root pom.xml)"
    )]
    pub project_dir: PathBuf,

    /// Report format; defaults to `runner.report_format` from the app config.
    #[arg(long = "format", value_enum, value_name = "FORMAT")]
    pub format: Option<ReportArg>,

    /// Run only the full build.
    #[arg(long = "build-only", help = "Only run the full build")]
    pub build_only: bool,

    /// Build tool command, e.g. `mvn` or `./mvnw`.
    #[arg(long = "mvn", value_name = "COMMAND")]
    pub maven: Option<String>,

    /// Print the report instead of only writing it.
    #[arg(long = "print", help = "Also print the report to stdout")]
    pub print: bool,
}

/// Report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportArg {
    Json,
    #[value(alias = "md")]
    Markdown,
    Html,
}

impl From<ReportArg> for ReportFormat {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::Json => Self::Json,
            ReportArg::Markdown => Self::Markdown,
            ReportArg::Html => Self::Html,
        }
    }
}

// ── flow ──────────────────────────────────────────────────────────────────────

/// Arguments for `mvnkit flow`.
#[derive(Debug, Args)]
pub struct FlowArgs {
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        default_value = "demo-project",
        help = "Name of the generated project"
    )]
    pub name: String,

    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Where the project is generated (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    #[arg(long = "format", value_enum, value_name = "FORMAT", default_value = "html")]
    pub format: ReportArg,

    #[arg(long = "mvn", value_name = "COMMAND")]
    pub maven: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `mvnkit init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `mvnkit.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `mvnkit completions`.
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

/// Subcommands for `mvnkit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `runner.maven`.
        key: String,
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
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "mvnkit",
            "generate",
            "shop",
            "--group-id",
            "com.acme",
            "--template",
            "full",
            "--with-local-lib",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.name.as_deref(), Some("shop"));
        assert_eq!(args.group_id.as_deref(), Some("com.acme"));
        assert_eq!(args.template, Some(TemplateArg::Full));
        assert!(args.with_local_lib);
        assert!(!args.no_examples);
    }

    #[test]
    fn generate_name_is_optional_with_config() {
        let cli = Cli::parse_from(["mvnkit", "gen", "--project-config", "p.yaml"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert!(args.name.is_none());
        assert_eq!(args.project_config, Some(PathBuf::from("p.yaml")));
    }

    #[test]
    fn libs_without_steps_runs_all() {
        let cli = Cli::parse_from(["mvnkit", "libs"]);
        let Commands::Libs(args) = cli.command else {
            panic!("expected Libs command");
        };
        assert!(args.runs_all());
    }

    #[test]
    fn libs_with_one_step_runs_only_that() {
        let cli = Cli::parse_from(["mvnkit", "libs", "--copy"]);
        let Commands::Libs(args) = cli.command else {
            panic!("expected Libs command");
        };
        assert!(!args.runs_all());
        assert!(args.copy);
    }

    #[test]
    fn test_format_accepts_md_alias() {
        let cli = Cli::parse_from(["mvnkit", "test", "--format", "md"]);
        let Commands::Test(args) = cli.command else {
            panic!("expected Test command");
        };
        assert_eq!(args.format.map(ReportFormat::from), Some(ReportFormat::Markdown));
        assert_eq!(args.project_dir, PathBuf::from("."));
    }

    #[test]
    fn flow_defaults() {
        let cli = Cli::parse_from(["mvnkit", "flow"]);
        let Commands::Flow(args) = cli.command else {
            panic!("expected Flow command");
        };
        assert_eq!(args.name, "demo-project");
        assert_eq!(args.format, ReportArg::Html);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["mvnkit", "--quiet", "--verbose", "libs"]);
        assert!(result.is_err());
    }
}
