//! `mvnkit libs`: set up lib directories, copy jars, and write the POM
//! fragment document and READMEs.

use tracing::instrument;

use mvnkit_adapters::{LibDocs, LocalFilesystem, load_manifest};
use mvnkit_core::application::{CopyReport, LibService};

use crate::{
    cli::LibsArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Run the requested steps in fixed order: setup, copy, generate, readme.
#[instrument(skip_all)]
pub fn execute(args: LibsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let manifest_path = args.manifest.clone().unwrap_or(config.libs.manifest);
    let manifest = load_manifest(&manifest_path)?;

    output.header(&format!("Local jars from {}", manifest_path.display()))?;
    let service = LibService::new(
        manifest,
        Box::new(LibDocs::new()),
        Box::new(LocalFilesystem::new()),
    )?;

    let all = args.runs_all();

    if all || args.setup {
        let dirs = service
            .setup_directories()
            .with_cli_context(|| "creating lib directories")?;
        output.success(&format!("{} directories ready", dirs.len()))?;
    }

    if all || args.copy {
        let report = service.copy_jars().with_cli_context(|| "copying jars")?;
        print_copy_report(&report, &output)?;
    }

    if all || args.generate {
        let path = service
            .generate_pom_config(args.output.as_deref())
            .with_cli_context(|| "writing POM configuration")?;
        output.success(&format!("POM configuration written to {}", path.display()))?;
    }

    if all || args.readme {
        let readmes = service
            .generate_readmes()
            .with_cli_context(|| "writing READMEs")?;
        output.success(&format!("{} README files written", readmes.len()))?;
    }

    Ok(())
}

fn print_copy_report(report: &CopyReport, output: &OutputManager) -> CliResult<()> {
    for skipped in &report.skipped {
        output.warning(&format!(
            "[{}] {} not found at {}, skipped",
            skipped.module,
            skipped.jar_file,
            skipped.source.display()
        ))?;
    }
    let line = format!(
        "{} jars copied, {} skipped",
        report.copied.len(),
        report.skipped.len()
    );
    if report.skipped.is_empty() {
        output.success(&line)?;
    } else {
        output.warning(&line)?;
    }
    Ok(())
}
