//! `mvnkit config`: inspect the application configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
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
            let path = AppConfig::discover().unwrap_or_else(AppConfig::config_path);
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let value = match key {
        "generator.group_id" => config.generator.group_id.clone(),
        "generator.java_version" => config.generator.java_version.clone(),
        "generator.spring_boot_version" => config.generator.spring_boot_version.clone(),
        "generator.template" => config.generator.template.to_string(),
        "runner.maven" => config.runner.maven.clone(),
        "runner.dependency_modules" => config.runner.dependency_modules.join(","),
        "runner.test_modules" => config.runner.test_modules.join(","),
        "runner.expected_dependency" => config.runner.expected_dependency.clone(),
        "runner.report_format" => config.runner.report_format.to_string(),
        "libs.manifest" => config.libs.manifest.display().to_string(),
        "output.no_color" => config.output.no_color.to_string(),
        _ => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            });
        }
    };
    Ok(value)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "runner.maven").unwrap(), "mvn");
        assert_eq!(get_config_value(&cfg, "generator.template").unwrap(), "standard");
        assert_eq!(get_config_value(&cfg, "runner.report_format").unwrap(), "markdown");
        assert_eq!(get_config_value(&cfg, "libs.manifest").unwrap(), "jars-config.yaml");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn default_config_serialises_to_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("[runner]"));
        assert!(text.contains("maven = \"mvn\""));
    }
}
