//! Test Service - runs the fixed build/check/test pipeline.
//!
//! 1. Full build at the project root. A failed build ends the run.
//! 2. For each dependency module: `dependency:tree`, then whether the
//!    expected artifact is in that tree.
//! 3. For each test module: `clean test`.
//!
//! Every step appends records in that order. Process failures become
//! failed records; nothing in the pipeline returns an error.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::ports::{BuildInvoker, Clock},
    domain::{Coordinate, DependencyTree, ModuleKind, ProjectDescriptor, RunResult, TestRecord},
};

pub const DEFAULT_EXPECTED_DEPENDENCY: &str = "com.example:common";

/// What the pipeline runs and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    pub project_dir: PathBuf,
    /// Build tool argv prefix, e.g. `["mvn"]` or `["mvn", "-B"]`.
    pub maven: Vec<String>,
    /// Module dirs (relative, `/`-separated) whose dependency tree is checked.
    pub dependency_modules: Vec<String>,
    /// Module dirs whose unit tests are run.
    pub test_modules: Vec<String>,
    /// `group:artifact` every dependency module must depend on.
    pub expected_dependency: String,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            maven: vec!["mvn".into()],
            dependency_modules: vec!["service-a".into(), "module-group/service-b".into()],
            test_modules: vec![
                "common".into(),
                "service-a".into(),
                "module-group/service-b".into(),
            ],
            expected_dependency: DEFAULT_EXPECTED_DEPENDENCY.into(),
        }
    }
}

impl SuiteConfig {
    /// Suite for a project generated from `descriptor`: services are
    /// dependency-checked against the first lib module, and every
    /// non-aggregator module is tested.
    pub fn for_descriptor(descriptor: &ProjectDescriptor, project_dir: impl Into<PathBuf>) -> Self {
        let dir_of = |m: &crate::domain::ModuleDescriptor| match m.path.as_deref() {
            Some(parent) if !parent.is_empty() => {
                format!("{}/{}", parent.trim_end_matches('/'), m.name)
            }
            _ => m.name.clone(),
        };

        let expected_dependency = descriptor
            .first_lib()
            .map(|lib| format!("{}:{}", descriptor.group_id, lib.name))
            .unwrap_or_else(|| DEFAULT_EXPECTED_DEPENDENCY.into());

        Self {
            project_dir: project_dir.into(),
            maven: vec!["mvn".into()],
            dependency_modules: descriptor
                .modules
                .iter()
                .filter(|m| m.kind == ModuleKind::Service)
                .map(dir_of)
                .collect(),
            test_modules: descriptor
                .modules
                .iter()
                .filter(|m| m.has_sources())
                .map(dir_of)
                .collect(),
            expected_dependency,
        }
    }

    pub fn with_project_dir(mut self, project_dir: impl Into<PathBuf>) -> Self {
        self.project_dir = project_dir.into();
        self
    }

    pub fn with_maven<I, S>(mut self, argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.maven = argv.into_iter().map(Into::into).collect();
        self
    }

    fn command(&self, args: &[&str]) -> Vec<String> {
        self.maven
            .iter()
            .cloned()
            .chain(args.iter().map(|a| (*a).to_string()))
            .collect()
    }

    fn module_dir(&self, module: &str) -> PathBuf {
        module
            .split('/')
            .filter(|s| !s.is_empty())
            .fold(self.project_dir.clone(), |dir, seg| dir.join(seg))
    }
}

pub struct TestService {
    config: SuiteConfig,
    invoker: Box<dyn BuildInvoker>,
    clock: Box<dyn Clock>,
}

impl TestService {
    pub fn new(config: SuiteConfig, invoker: Box<dyn BuildInvoker>, clock: Box<dyn Clock>) -> Self {
        Self {
            config,
            invoker,
            clock,
        }
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Run build, dependency checks and unit tests.
    #[instrument(skip_all, fields(project = %self.config.project_dir.display()))]
    pub fn run_full_suite(&self) -> RunResult {
        self.run_full_suite_with(|_| {}, |_| {})
    }

    /// [`Self::run_full_suite`] with hooks around every step, used by the
    /// CLI to drive progress output. `before` receives the step name,
    /// `after` the record(s) the step produced.
    pub fn run_full_suite_with(
        &self,
        mut before: impl FnMut(&str),
        mut after: impl FnMut(&TestRecord),
    ) -> RunResult {
        let timestamp = self.clock.timestamp();
        let mut records = Vec::new();

        before("build");
        let build = self.build_record();
        after(&build);
        let build_passed = build.passed();
        records.push(build);

        if !build_passed {
            warn!("Build failed, skipping remaining steps");
            return RunResult::aborted(timestamp, records);
        }

        let expected = Coordinate::parse(&self.config.expected_dependency);
        for module in &self.config.dependency_modules {
            before(&format!("{module} dependency tree"));
            let (tree_record, tree_output) = self.dependency_tree(module);
            after(&tree_record);
            let tree_passed = tree_record.passed();
            records.push(tree_record);

            if tree_passed {
                let check = self.expected_dependency_record(module, expected.as_ref(), &tree_output);
                after(&check);
                records.push(check);
            }
        }

        for module in &self.config.test_modules {
            before(&format!("{module} unit tests"));
            let record = self.unit_test_record(module);
            after(&record);
            records.push(record);
        }

        let result = RunResult::new(timestamp, records);
        let summary = result.summary();
        info!(
            total = summary.total,
            passed = summary.passed,
            failed = summary.failed,
            "Suite finished"
        );
        result
    }

    /// Run the full build alone.
    #[instrument(skip_all, fields(project = %self.config.project_dir.display()))]
    pub fn run_build_only(&self) -> TestRecord {
        self.build_record()
    }

    // -------------------------------------------------------------------------
    // Steps
    // -------------------------------------------------------------------------

    fn build_record(&self) -> TestRecord {
        let argv = self.config.command(&["clean", "install"]);
        let outcome = self.run(&argv, &self.config.project_dir);
        TestRecord::new("build", outcome.succeeded, outcome.output)
    }

    fn dependency_tree(&self, module: &str) -> (TestRecord, String) {
        let argv = self.config.command(&["dependency:tree"]);
        let outcome = self.run(&argv, &self.config.module_dir(module));
        let record = TestRecord::new(
            format!("{module} dependency tree"),
            outcome.succeeded,
            &outcome.output,
        );
        (record, outcome.output)
    }

    fn expected_dependency_record(
        &self,
        module: &str,
        expected: Option<&Coordinate>,
        tree_output: &str,
    ) -> TestRecord {
        let name = format!("{module} depends on {}", self.config.expected_dependency);
        let Some(expected) = expected else {
            return TestRecord::new(
                name,
                false,
                format!(
                    "'{}' is not a group:artifact coordinate",
                    self.config.expected_dependency
                ),
            );
        };

        let found = DependencyTree::parse(tree_output).contains(expected);
        let output = if found {
            format!("found {expected} in the dependency tree")
        } else {
            format!("{expected} not found in the dependency tree")
        };
        info!(module, found, "Dependency check");
        TestRecord::new(name, found, output)
    }

    fn unit_test_record(&self, module: &str) -> TestRecord {
        let argv = self.config.command(&["clean", "test"]);
        let outcome = self.run(&argv, &self.config.module_dir(module));
        TestRecord::new(format!("{module} unit tests"), outcome.succeeded, outcome.output)
    }

    fn run(&self, argv: &[String], cwd: &Path) -> crate::application::ports::Invocation {
        info!(command = %argv.join(" "), cwd = %cwd.display(), "Running");
        let outcome = self.invoker.invoke(argv, cwd);
        if !outcome.succeeded {
            warn!(command = %argv.join(" "), "Command failed");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{Invocation, MockBuildInvoker};
    use crate::domain::ModuleDescriptor;

    struct FixedClock;

    impl Clock for FixedClock {
        fn timestamp(&self) -> String {
            "2026-01-02T03:04:05".into()
        }

        fn file_stamp(&self) -> String {
            "20260102_030405".into()
        }
    }

    fn service(invoker: MockBuildInvoker) -> TestService {
        TestService::new(
            SuiteConfig::default().with_project_dir("/p"),
            Box::new(invoker),
            Box::new(FixedClock),
        )
    }

    #[test]
    fn failed_build_short_circuits() {
        let mut invoker = MockBuildInvoker::new();
        invoker
            .expect_invoke()
            .times(1)
            .returning(|_, _| Invocation::failure("BUILD FAILURE"));

        let result = service(invoker).run_full_suite();

        assert_eq!(result.records().len(), 1);
        assert_eq!(result.records()[0].name(), "build");
        let s = result.summary();
        assert_eq!((s.total, s.passed, s.failed), (1, 0, 1));
        assert_eq!(s.success_rate, "0%");
    }

    #[test]
    fn full_pass_records_steps_in_order() {
        let mut invoker = MockBuildInvoker::new();
        invoker.expect_invoke().returning(|argv, _| {
            if argv.iter().any(|a| a == "dependency:tree") {
                Invocation::success("[INFO] +- com.example:common:jar:1.0.0-SNAPSHOT:compile")
            } else {
                Invocation::success("BUILD SUCCESS")
            }
        });

        let result = service(invoker).run_full_suite();
        let names: Vec<_> = result.records().iter().map(TestRecord::name).collect();

        assert_eq!(
            names,
            vec![
                "build",
                "service-a dependency tree",
                "service-a depends on com.example:common",
                "module-group/service-b dependency tree",
                "module-group/service-b depends on com.example:common",
                "common unit tests",
                "service-a unit tests",
                "module-group/service-b unit tests",
            ]
        );
        assert_eq!(result.summary().success_rate, "100.0%");
        assert_eq!(result.timestamp(), "2026-01-02T03:04:05");
    }

    #[test]
    fn failed_tree_skips_expected_dependency_record() {
        let mut invoker = MockBuildInvoker::new();
        invoker.expect_invoke().returning(|argv, _| {
            if argv.iter().any(|a| a == "dependency:tree") {
                Invocation::failure("could not resolve")
            } else {
                Invocation::success("ok")
            }
        });

        let result = service(invoker).run_full_suite();

        assert_eq!(result.records().len(), 6);
        assert!(
            !result
                .records()
                .iter()
                .any(|r| r.name().contains("depends on"))
        );
        assert_eq!(result.summary().failed, 2);
    }

    #[test]
    fn modules_run_in_their_directories() {
        let mut invoker = MockBuildInvoker::new();
        invoker
            .expect_invoke()
            .withf(|argv, cwd| {
                argv.join(" ") == "mvn clean test"
                    && cwd.to_path_buf() == PathBuf::from("/p/module-group/service-b")
            })
            .times(1)
            .returning(|_, _| Invocation::success("ok"));
        invoker
            .expect_invoke()
            .returning(|_, _| Invocation::success("[INFO] +- com.example:common:jar:1:compile"));

        let result = service(invoker).run_full_suite();
        assert!(result.summary().all_passed());
    }

    #[test]
    fn build_only_uses_clean_install() {
        let mut invoker = MockBuildInvoker::new();
        invoker
            .expect_invoke()
            .withf(|argv, cwd| {
                argv.join(" ") == "mvn clean install" && cwd.to_path_buf() == PathBuf::from("/p")
            })
            .times(1)
            .returning(|_, _| Invocation::success("BUILD SUCCESS"));

        let record = service(invoker).run_build_only();
        assert!(record.passed());
    }

    #[test]
    fn suite_follows_descriptor_modules() {
        let descriptor = ProjectDescriptor::new("shop")
            .with_group_id("com.acme")
            .with_modules(vec![
                ModuleDescriptor::lib("core"),
                ModuleDescriptor::aggregator("apps", ["web"]),
                ModuleDescriptor::service("web", 8081).with_path("apps"),
            ]);

        let suite = SuiteConfig::for_descriptor(&descriptor, "/out/shop");

        assert_eq!(suite.dependency_modules, vec!["apps/web"]);
        assert_eq!(suite.test_modules, vec!["core", "apps/web"]);
        assert_eq!(suite.expected_dependency, "com.acme:core");
    }
}
