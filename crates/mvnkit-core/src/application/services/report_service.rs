//! Report Service - renders a run result and writes it next to the project.
//!
//! Reports land in `<project>/test-reports/test_report_<stamp>.<ext>`.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Clock, Filesystem, ReportRenderer},
    },
    domain::{ReportFormat, RunResult},
    error::MvnkitResult,
};

pub const REPORT_DIR: &str = "test-reports";

pub struct ReportService {
    renderers: Vec<Box<dyn ReportRenderer>>,
    filesystem: Box<dyn Filesystem>,
    clock: Box<dyn Clock>,
}

impl ReportService {
    pub fn new(
        renderers: Vec<Box<dyn ReportRenderer>>,
        filesystem: Box<dyn Filesystem>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            renderers,
            filesystem,
            clock,
        }
    }

    pub fn render(&self, result: &RunResult, format: ReportFormat) -> MvnkitResult<String> {
        self.renderer(format)?.render(result)
    }

    /// Path the next report of `format` would be written to.
    pub fn report_path(&self, project_dir: &Path, format: ReportFormat) -> PathBuf {
        project_dir.join(REPORT_DIR).join(format!(
            "test_report_{}.{}",
            self.clock.file_stamp(),
            format.extension()
        ))
    }

    /// Render and write; returns the written path.
    #[instrument(skip_all, fields(format = %format, project = %project_dir.display()))]
    pub fn write(
        &self,
        result: &RunResult,
        format: ReportFormat,
        project_dir: &Path,
    ) -> MvnkitResult<PathBuf> {
        let text = self.render(result, format)?;

        let path = self.report_path(project_dir, format);
        self.filesystem
            .create_dir_all(&project_dir.join(REPORT_DIR))?;
        self.filesystem.write_file(&path, &text)?;

        info!(path = %path.display(), "Report written");
        Ok(path)
    }

    fn renderer(&self, format: ReportFormat) -> MvnkitResult<&dyn ReportRenderer> {
        self.renderers
            .iter()
            .find(|r| r.format() == format)
            .map(|r| r.as_ref())
            .ok_or_else(|| {
                ApplicationError::RenderingFailed {
                    reason: format!("no renderer registered for {format}"),
                }
                .into()
            })
    }
}
