//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `MVNKIT_<SECTION>__<KEY>`, e.g.
//!    `MVNKIT_RUNNER__MAVEN=./mvnw`
//! 3. Config file: `--config FILE`, else `./mvnkit.toml`, else the platform
//!    config path
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use mvnkit_core::{
    application::{DEFAULT_EXPECTED_DEPENDENCY, SuiteConfig},
    domain::{
        DEFAULT_GROUP_ID, DEFAULT_JAVA_VERSION, DEFAULT_SPRING_BOOT_VERSION, ReportFormat,
        TemplateFlavor,
    },
};

/// Name of the config file `init --local` writes and `load` picks up.
pub const LOCAL_CONFIG_FILE: &str = "mvnkit.toml";

const ENV_PREFIX: &str = "MVNKIT";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for `generate` and `flow`.
    pub generator: GeneratorConfig,
    /// Test pipeline settings.
    pub runner: RunnerConfig,
    /// Local-jar manager settings.
    pub libs: LibsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub group_id: String,
    pub java_version: String,
    pub spring_boot_version: String,
    pub template: TemplateFlavor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Build tool command line, split on whitespace (`mvn -B` is fine).
    pub maven: String,
    /// Used when the project carries no `project-config.yaml`.
    pub dependency_modules: Vec<String>,
    /// Used when the project carries no `project-config.yaml`.
    pub test_modules: Vec<String>,
    pub expected_dependency: String,
    pub report_format: ReportFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LibsConfig {
    pub manifest: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            group_id: DEFAULT_GROUP_ID.into(),
            java_version: DEFAULT_JAVA_VERSION.into(),
            spring_boot_version: DEFAULT_SPRING_BOOT_VERSION.into(),
            template: TemplateFlavor::default(),
        }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        let suite = SuiteConfig::default();
        Self {
            maven: suite.maven.join(" "),
            dependency_modules: suite.dependency_modules,
            test_modules: suite.test_modules,
            expected_dependency: DEFAULT_EXPECTED_DEPENDENCY.into(),
            report_format: ReportFormat::default(),
        }
    }
}

impl Default for LibsConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("jars-config.yaml"),
        }
    }
}

impl RunnerConfig {
    /// `maven` as an argv prefix. Blank falls back to `mvn`.
    pub fn maven_argv(&self) -> Vec<String> {
        let argv: Vec<String> = self.maven.split_whitespace().map(str::to_string).collect();
        if argv.is_empty() {
            vec!["mvn".into()]
        } else {
            argv
        }
    }

    /// Suite for a project without a descriptor snapshot.
    pub fn suite(&self, project_dir: &Path) -> SuiteConfig {
        SuiteConfig {
            project_dir: project_dir.to_path_buf(),
            maven: self.maven_argv(),
            dependency_modules: self.dependency_modules.clone(),
            test_modules: self.test_modules.clone(),
            expected_dependency: self.expected_dependency.clone(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then `MVNKIT_*`
    /// environment variables.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("failed to serialise default config")?;

        let mut builder = Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                builder = builder.add_source(File::from(path.as_path()).format(FileFormat::Toml));
            }
            None => {
                if let Some(path) = Self::discover() {
                    builder = builder.add_source(
                        File::from(path.as_path())
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                }
            }
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("runner.dependency_modules")
                    .with_list_parse_key("runner.test_modules"),
            )
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `./mvnkit.toml`.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "mvnkit", "mvnkit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The file `load(None)` reads, if any: `./mvnkit.toml` first, then the
    /// platform path.
    pub fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        let global = Self::config_path();
        global.is_file().then_some(global)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_core_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.generator.group_id, DEFAULT_GROUP_ID);
        assert_eq!(cfg.runner.maven, "mvn");
        assert_eq!(cfg.runner.expected_dependency, "com.example:common");
        assert_eq!(cfg.runner.report_format, ReportFormat::Markdown);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mvnkit.toml");
        fs::write(
            &path,
            r#"
[generator]
group_id = "com.acme"
template = "full"

[runner]
maven = "./mvnw -B"
test_modules = ["core"]
report_format = "html"
"#,
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.generator.group_id, "com.acme");
        assert_eq!(cfg.generator.template, TemplateFlavor::Full);
        assert_eq!(cfg.runner.maven_argv(), vec!["./mvnw", "-B"]);
        assert_eq!(cfg.runner.test_modules, vec!["core"]);
        assert_eq!(cfg.runner.report_format, ReportFormat::Html);
        // untouched keys keep their defaults
        assert_eq!(cfg.generator.java_version, DEFAULT_JAVA_VERSION);
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let missing = PathBuf::from("/definitely/not/here/mvnkit.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn blank_maven_falls_back() {
        let runner = RunnerConfig {
            maven: "  ".into(),
            ..RunnerConfig::default()
        };
        assert_eq!(runner.maven_argv(), vec!["mvn"]);
    }

    #[test]
    fn suite_uses_configured_modules() {
        let suite = RunnerConfig::default().suite(Path::new("/p"));
        assert_eq!(suite.project_dir, PathBuf::from("/p"));
        assert_eq!(suite.dependency_modules, SuiteConfig::default().dependency_modules);
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
