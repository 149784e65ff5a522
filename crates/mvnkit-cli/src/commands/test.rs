//! `mvnkit test`: run the build/dependency/test pipeline against a project
//! and write a report under `<project>/test-reports/`.

use std::io;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use tracing::{debug, instrument};

use mvnkit_adapters::{LocalFilesystem, ProcessInvoker, SystemClock, all_renderers, read_snapshot};
use mvnkit_core::{
    application::{ApplicationError, ReportService, SuiteConfig, TestService},
    domain::{ReportFormat, RunResult, TestRecord},
    error::MvnkitError,
};

use crate::{
    cli::{OutputFormat, TestArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(project = %args.project_dir.display()))]
pub fn execute(args: TestArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let project_dir = args.project_dir.as_path();
    if !project_dir.is_dir() {
        let err = ApplicationError::ProjectNotFound {
            path: project_dir.to_path_buf(),
        };
        return Err(MvnkitError::from(err).into());
    }

    let mut suite = suite_for(project_dir, &config)?;
    if let Some(maven) = &args.maven {
        suite = suite.with_maven(maven.split_whitespace());
    }
    let service = test_service(suite);

    if args.build_only {
        return build_only(&service, &output);
    }

    let format = args
        .format
        .map(ReportFormat::from)
        .unwrap_or(config.runner.report_format);
    let (result, report) = run_suite(&service, format, project_dir, &output)?;

    if args.print {
        let text = report_service().render(&result, format)?;
        output.print(&text)?;
    }
    finish(&result, report)
}

/// The project's own `project-config.yaml` decides which modules are
/// checked; without one the `[runner]` app-config lists apply.
pub fn suite_for(project_dir: &Path, config: &AppConfig) -> CliResult<SuiteConfig> {
    let suite = match read_snapshot(project_dir)? {
        Some(descriptor) => {
            debug!(project = %descriptor.project_name, "Suite derived from project snapshot");
            SuiteConfig::for_descriptor(&descriptor, project_dir)
                .with_maven(config.runner.maven_argv())
        }
        None => config.runner.suite(project_dir),
    };
    Ok(suite)
}

pub fn test_service(suite: SuiteConfig) -> TestService {
    TestService::new(suite, Box::new(ProcessInvoker::new()), Box::new(SystemClock))
}

fn report_service() -> ReportService {
    ReportService::new(
        all_renderers(),
        Box::new(LocalFilesystem::new()),
        Box::new(SystemClock),
    )
}

/// Run the full pipeline with live progress, then write the report.
pub fn run_suite(
    service: &TestService,
    format: ReportFormat,
    project_dir: &Path,
    output: &OutputManager,
) -> CliResult<(RunResult, PathBuf)> {
    output.header(&format!("Testing {}", project_dir.display()))?;

    let spinner = output.spinner("starting");
    let result = run_with_progress(service, spinner.as_ref(), |record| output.record(record));
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    let result = result?;

    let path = report_service().write(&result, format, project_dir)?;

    if output.format() == OutputFormat::Json {
        output.json(&result)?;
    } else {
        output.summary(result.summary())?;
        output.info(&format!("Report written to {}", path.display()))?;
    }
    Ok((result, path))
}

/// Run the pipeline, printing each record as it lands. The pipeline always
/// finishes; the first print failure is returned afterwards.
fn run_with_progress(
    service: &TestService,
    spinner: Option<&ProgressBar>,
    mut print: impl FnMut(&TestRecord) -> io::Result<()>,
) -> io::Result<RunResult> {
    let mut write_error = None;
    let result = service.run_full_suite_with(
        |step| {
            if let Some(bar) = spinner {
                bar.set_message(step.to_string());
            }
        },
        |record| {
            let written = match spinner {
                Some(bar) => bar.suspend(|| print(record)),
                None => print(record),
            };
            if let Err(e) = written {
                debug!(error = %e, record = record.name(), "Could not print record");
                write_error.get_or_insert(e);
            }
        },
    );
    match write_error {
        Some(e) => Err(e),
        None => Ok(result),
    }
}

fn build_only(service: &TestService, output: &OutputManager) -> CliResult<()> {
    let spinner = output.spinner("build");
    let record = service.run_build_only();
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }

    output.record(&record)?;
    if record.passed() {
        Ok(())
    } else {
        Err(CliError::StepFailed {
            step: record.name().to_string(),
            output: record.output().to_string(),
        })
    }
}

/// Exit status follows the run: any failed record is a failure.
pub fn finish(result: &RunResult, report: PathBuf) -> CliResult<()> {
    let summary = result.summary();
    if summary.all_passed() {
        Ok(())
    } else {
        Err(CliError::ChecksFailed {
            failed: summary.failed,
            total: summary.total,
            report: Some(report),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mvnkit_adapters::{FixedClock, ScriptedInvoker};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn suite_without_snapshot_uses_runner_config() {
        let temp = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.runner.maven = "./mvnw -q".into();
        config.runner.test_modules = vec!["core".into()];

        let suite = suite_for(temp.path(), &config).unwrap();
        assert_eq!(suite.maven, vec!["./mvnw", "-q"]);
        assert_eq!(suite.test_modules, vec!["core"]);
        assert_eq!(suite.project_dir, temp.path());
    }

    #[test]
    fn suite_from_snapshot_follows_modules() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("project-config.yaml"),
            "project_name: shop\ngroup_id: com.acme\nmodules:\n  - name: core\n    type: lib\n  - name: api\n    type: service\n",
        )
        .unwrap();

        let suite = suite_for(temp.path(), &AppConfig::default()).unwrap();
        assert_eq!(suite.dependency_modules, vec!["api"]);
        assert_eq!(suite.test_modules, vec!["core", "api"]);
        assert_eq!(suite.expected_dependency, "com.acme:core");
    }

    #[test]
    fn failed_run_maps_to_checks_failed() {
        let result = RunResult::new(
            "t",
            vec![TestRecord::new("build", false, "boom")],
        );
        let err = finish(&result, PathBuf::from("r.md")).unwrap_err();
        assert!(matches!(err, CliError::ChecksFailed { failed: 1, total: 1, .. }));
    }

    #[test]
    fn print_failure_surfaces_after_pipeline_finishes() {
        let service = TestService::new(
            SuiteConfig::default(),
            Box::new(ScriptedInvoker::always(true, "BUILD SUCCESS")),
            Box::new(FixedClock::parse("2026-01-02T03:04:05").unwrap()),
        );
        let mut attempts = Vec::new();

        let err = run_with_progress(&service, None, |record| {
            attempts.push(record.name().to_string());
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
        })
        .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(attempts.first().map(String::as_str), Some("build"));
        assert_eq!(attempts.last().map(String::as_str), Some("module-group/service-b unit tests"));
        assert_eq!(attempts.len(), 8);
    }

    #[test]
    fn successful_prints_return_the_run() {
        let service = TestService::new(
            SuiteConfig::default(),
            Box::new(ScriptedInvoker::always(false, "BUILD FAILURE")),
            Box::new(FixedClock::parse("2026-01-02T03:04:05").unwrap()),
        );
        let mut printed = 0;

        let result = run_with_progress(&service, None, |_| {
            printed += 1;
            Ok(())
        })
        .unwrap();

        assert_eq!(printed, 1);
        assert_eq!(result.summary().success_rate, "0%");
    }
}
