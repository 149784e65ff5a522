//! Generator Service - writes a Maven multi-module project.
//!
//! 1. Validate the descriptor
//! 2. Render it into a [`ProjectStructure`] (pure)
//! 3. Write every entry through the [`Filesystem`] port
//!
//! Writing overwrites. There is no "already exists" refusal and no
//! rollback: running again with the same descriptor converges the tree.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, ProjectRenderer},
    domain::{DomainValidator as validator, FsEntry, ProjectDescriptor, ProjectStructure},
    error::MvnkitResult,
};

/// What [`GeneratorService::materialize`] wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeReport {
    pub root: PathBuf,
    pub directories: usize,
    pub files: usize,
}

pub struct GeneratorService {
    renderer: Box<dyn ProjectRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GeneratorService {
    pub fn new(renderer: Box<dyn ProjectRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Validate and render without touching the filesystem.
    #[instrument(skip_all, fields(project = %descriptor.project_name))]
    pub fn plan(&self, descriptor: &ProjectDescriptor) -> MvnkitResult<ProjectStructure> {
        validator::validate_descriptor(descriptor)?;

        let structure = self.renderer.render(descriptor)?;
        validator::validate_project_structure(&structure)?;

        debug!(
            files = structure.file_count(),
            directories = structure.directory_count(),
            "Project rendered"
        );
        Ok(structure)
    }

    /// Render and write the project.
    #[instrument(
        skip_all,
        fields(
            project = %descriptor.project_name,
            root = %descriptor.project_dir().display()
        )
    )]
    pub fn materialize(&self, descriptor: &ProjectDescriptor) -> MvnkitResult<MaterializeReport> {
        let structure = self.plan(descriptor)?;
        info!(
            modules = descriptor.modules.len(),
            template = %descriptor.template,
            "Generating project"
        );

        self.write_structure(&structure)?;

        let report = MaterializeReport {
            root: structure.root().to_path_buf(),
            directories: structure.directory_count(),
            files: structure.file_count(),
        };
        info!(files = report.files, "Project generated");
        Ok(report)
    }

    fn write_structure(&self, structure: &ProjectStructure) -> MvnkitResult<()> {
        let root = structure.root();
        self.filesystem.create_dir_all(root)?;

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem.create_dir_all(&root.join(&dir.path))?;
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    self.filesystem.write_file(&path, &file.content)?;

                    if file.permissions.executable_flag() {
                        self.filesystem.set_permissions(&path, true)?;
                    }
                    debug!(path = %file.path.display(), "Wrote file");
                }
            }
        }

        Ok(())
    }
}
