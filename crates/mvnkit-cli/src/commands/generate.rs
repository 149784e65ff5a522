//! Implementation of the `mvnkit generate` command.
//!
//! Responsibility: turn flags (and an optional YAML descriptor) into a
//! `ProjectDescriptor`, call the generator service, and display results.
//! No business logic lives here.

use std::path::Path;

use tracing::{debug, info, instrument};

use mvnkit_adapters::{LocalFilesystem, MavenRenderer, load_descriptor};
use mvnkit_core::{
    application::{GeneratorService, MaterializeReport},
    domain::{FsEntry, ProjectDescriptor},
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `mvnkit generate` command.
///
/// 1. Build the descriptor (file, app-config defaults, then flags)
/// 2. `--dry-run`: list what would be written and stop
/// 3. Write the project via `GeneratorService`
/// 4. Print next-steps guidance
#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("")))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let descriptor = build_descriptor(&args, &config)?;
    debug!(
        project = %descriptor.project_name,
        modules = descriptor.modules.len(),
        template = %descriptor.template,
        "Descriptor resolved"
    );

    let service = generator();

    if args.dry_run {
        let structure = service
            .plan(&descriptor)
            .with_cli_context(|| "planning project")?;
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            descriptor.project_name,
            structure.root().display(),
        ))?;
        for entry in structure.entries() {
            let suffix = if matches!(entry, FsEntry::Directory(_)) { "/" } else { "" };
            output.print(&format!("  {}{suffix}", entry.path().display()))?;
        }
        return Ok(());
    }

    output.header(&format!("Generating '{}'...", descriptor.project_name))?;
    let report = materialize(&service, &descriptor)?;

    output.success(&format!(
        "Project '{}' generated ({} files, {} directories)",
        descriptor.project_name, report.files, report.directories
    ))?;
    print_next_steps(&report.root, &output)?;
    Ok(())
}

/// Descriptor from `--project-config` when given, otherwise from the name
/// and the `[generator]` app-config defaults. Flags win over both.
pub fn build_descriptor(args: &GenerateArgs, config: &AppConfig) -> CliResult<ProjectDescriptor> {
    let mut descriptor = match &args.project_config {
        Some(path) => load_descriptor(path, args.name.as_deref())?,
        None => {
            let name = args.name.as_deref().ok_or_else(|| CliError::InvalidInput {
                message: "a project NAME or --project-config FILE is required".into(),
                source: None,
            })?;
            defaults_descriptor(name, config)
        }
    };

    if let Some(group_id) = &args.group_id {
        descriptor.group_id = group_id.clone();
    }
    if let Some(package_name) = &args.package_name {
        descriptor.package_name = Some(package_name.clone());
    }
    if let Some(java_version) = &args.java_version {
        descriptor.java_version = java_version.clone();
    }
    if let Some(spring_boot_version) = &args.spring_boot_version {
        descriptor.spring_boot_version = spring_boot_version.clone();
    }
    if let Some(template) = args.template {
        descriptor.template = template.into();
    }
    if args.no_examples {
        descriptor.include_examples = false;
    }
    if args.with_local_lib {
        descriptor.include_local_lib = true;
    }
    if let Some(dir) = &args.dir {
        descriptor.base_dir = dir.clone();
    }

    Ok(descriptor)
}

/// A descriptor with the default modules and the `[generator]` defaults.
pub fn defaults_descriptor(name: &str, config: &AppConfig) -> ProjectDescriptor {
    let mut descriptor =
        ProjectDescriptor::new(name).with_group_id(config.generator.group_id.clone());
    descriptor.java_version = config.generator.java_version.clone();
    descriptor.spring_boot_version = config.generator.spring_boot_version.clone();
    descriptor.template = config.generator.template;
    descriptor
}

pub fn generator() -> GeneratorService {
    GeneratorService::new(Box::new(MavenRenderer::new()), Box::new(LocalFilesystem::new()))
}

pub fn materialize(
    service: &GeneratorService,
    descriptor: &ProjectDescriptor,
) -> CliResult<MaterializeReport> {
    info!(project = %descriptor.project_name, "Generation started");
    let report = service
        .materialize(descriptor)
        .with_cli_context(|| "generating project")?;
    info!(root = %report.root.display(), "Generation completed");
    Ok(report)
}

fn print_next_steps(root: &Path, output: &OutputManager) -> CliResult<()> {
    if output.is_quiet() {
        return Ok(());
    }
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", root.display()))?;
    output.print("  ./build.sh            # or build.bat on Windows")?;
    output.print("  mvnkit test           # build, dependency checks, unit tests")?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::TemplateArg;
    use mvnkit_core::domain::TemplateFlavor;
    use std::{fs, path::PathBuf};
    use tempfile::TempDir;

    fn args(name: Option<&str>) -> GenerateArgs {
        GenerateArgs {
            name: name.map(str::to_string),
            project_config: None,
            group_id: None,
            package_name: None,
            java_version: None,
            spring_boot_version: None,
            template: None,
            no_examples: false,
            with_local_lib: false,
            dir: None,
            dry_run: false,
        }
    }

    #[test]
    fn name_without_config_uses_app_defaults() {
        let mut config = AppConfig::default();
        config.generator.group_id = "org.acme".into();
        config.generator.template = TemplateFlavor::Full;

        let d = build_descriptor(&args(Some("shop")), &config).unwrap();
        assert_eq!(d.project_name, "shop");
        assert_eq!(d.group_id, "org.acme");
        assert_eq!(d.template, TemplateFlavor::Full);
    }

    #[test]
    fn missing_name_and_config_is_invalid_input() {
        let err = build_descriptor(&args(None), &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn flags_override_descriptor_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("project.yaml");
        fs::write(&path, "project_name: shop\ngroup_id: com.file\n").unwrap();

        let mut a = args(None);
        a.project_config = Some(path);
        a.group_id = Some("com.flag".into());
        a.template = Some(TemplateArg::Minimal);
        a.no_examples = true;
        a.with_local_lib = true;
        a.dir = Some(PathBuf::from("/out"));

        let d = build_descriptor(&a, &AppConfig::default()).unwrap();
        assert_eq!(d.project_name, "shop");
        assert_eq!(d.group_id, "com.flag");
        assert_eq!(d.template, TemplateFlavor::Minimal);
        assert!(!d.include_examples);
        assert!(d.include_local_lib);
        assert_eq!(d.project_dir(), PathBuf::from("/out/shop"));
    }

    #[test]
    fn missing_descriptor_file_is_configuration_error() {
        let mut a = args(None);
        a.project_config = Some(PathBuf::from("/nope/project.yaml"));

        let err = build_descriptor(&a, &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
