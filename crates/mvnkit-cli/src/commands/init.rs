//! `mvnkit init`: write the default configuration as TOML.

use std::path::{Path, PathBuf};

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let config_path = if args.local {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else {
        AppConfig::config_path()
    };

    if config_path.exists() && !args.force {
        match confirm_overwrite(&config_path, &output)? {
            Some(true) => {}
            Some(false) => return Err(CliError::Cancelled),
            None => {
                output.warning(&format!(
                    "Config already exists at {}  (use --force to overwrite)",
                    config_path.display(),
                ))?;
                return Ok(());
            }
        }
    }

    write_default(&config_path)?;
    output.success(&format!("Configuration created at {}", config_path.display()))?;
    Ok(())
}

fn write_default(path: &Path) -> CliResult<()> {
    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

/// Ask before overwriting when a human is at the terminal; `None` when
/// nobody can be asked.
#[cfg(feature = "interactive")]
fn confirm_overwrite(path: &Path, output: &OutputManager) -> CliResult<Option<bool>> {
    use std::io::IsTerminal as _;

    if output.is_quiet() || !std::io::stdin().is_terminal() {
        return Ok(None);
    }
    dialoguer::Confirm::new()
        .with_prompt(format!("{} exists. Overwrite?", path.display()))
        .default(false)
        .interact()
        .map(Some)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm_overwrite(_path: &Path, _output: &OutputManager) -> CliResult<Option<bool>> {
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_loadable_default_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("mvnkit.toml");

        write_default(&path).unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.runner.maven, "mvn");
        assert_eq!(loaded.libs.manifest, PathBuf::from("jars-config.yaml"));
    }
}
