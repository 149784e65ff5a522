//! `mvnkit flow`: generate a project, build it, then run the test pipeline
//! against it. Stops at the first failing step.

use tracing::{info, instrument};

use mvnkit_adapters::ProcessInvoker;
use mvnkit_core::{
    application::{BuildInvoker, SuiteConfig},
    domain::ReportFormat,
};

use crate::{
    cli::FlowArgs,
    commands::{generate, test},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: FlowArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Generate
    let mut descriptor = generate::defaults_descriptor(&args.name, &config);
    if let Some(dir) = &args.dir {
        descriptor.base_dir = dir.clone();
    }
    output.header(&format!("[1/3] Generating '{}'", descriptor.project_name))?;
    let generated = generate::materialize(&generate::generator(), &descriptor)?;
    output.success(&format!("Generated {}", generated.root.display()))?;

    let maven: Vec<String> = match &args.maven {
        Some(m) => m.split_whitespace().map(str::to_string).collect(),
        None => config.runner.maven_argv(),
    };

    // 2. Build without tests
    output.header("[2/3] Building")?;
    let argv: Vec<String> = maven
        .iter()
        .cloned()
        .chain(["clean", "install", "-DskipTests"].map(String::from))
        .collect();
    let spinner = output.spinner(&argv.join(" "));
    let build = ProcessInvoker::new().invoke(&argv, &generated.root);
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    if !build.succeeded {
        output.error("Build failed")?;
        return Err(CliError::StepFailed {
            step: "build".into(),
            output: build.output,
        });
    }
    output.success("Build succeeded")?;
    info!(root = %generated.root.display(), "Flow build passed");

    // 3. Test pipeline
    output.header("[3/3] Testing")?;
    let suite = SuiteConfig::for_descriptor(&descriptor, &generated.root).with_maven(maven);
    let format = ReportFormat::from(args.format);
    let (result, report) =
        test::run_suite(&test::test_service(suite), format, &generated.root, &output)?;
    test::finish(&result, report)
}
