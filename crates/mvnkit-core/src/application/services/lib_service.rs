//! Lib Service - manages jars that live in per-module `lib/` directories.
//!
//! Four independent operations over one [`LibManifest`]:
//! directory setup, jar copy, POM-fragment generation and README
//! generation. A missing source jar is logged and skipped; generation
//! works from the manifest alone and never depends on a copy succeeding.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, LibDocsRenderer},
    domain::{DomainValidator as validator, LibManifest, LibScope},
    error::MvnkitResult,
};

/// Default file name of the POM-fragment document.
pub const POM_CONFIG_FILE: &str = "generated-pom-configs.xml";

/// A jar that could not be copied because its source is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedJar {
    pub module: String,
    pub jar_file: String,
    pub source: PathBuf,
}

/// Outcome of [`LibService::copy_jars`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub copied: Vec<PathBuf>,
    pub skipped: Vec<SkippedJar>,
}

/// Outcome of [`LibService::run_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibRunReport {
    pub directories: Vec<PathBuf>,
    pub copy: CopyReport,
    pub pom_config: PathBuf,
    pub readmes: Vec<PathBuf>,
}

pub struct LibService {
    manifest: LibManifest,
    renderer: Box<dyn LibDocsRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl LibService {
    /// Validates the manifest up front so every operation can rely on it.
    pub fn new(
        manifest: LibManifest,
        renderer: Box<dyn LibDocsRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> MvnkitResult<Self> {
        validator::validate_manifest(&manifest)?;
        Ok(Self {
            manifest,
            renderer,
            filesystem,
        })
    }

    pub fn manifest(&self) -> &LibManifest {
        &self.manifest
    }

    /// Create the jar source directory and every `lib_dir`.
    #[instrument(skip_all)]
    pub fn setup_directories(&self) -> MvnkitResult<Vec<PathBuf>> {
        let mut created = vec![self.manifest.jar_source_dir()];
        created.extend(
            self.manifest
                .entries()
                .map(|(_, module)| self.manifest.resolve(&module.lib_dir)),
        );

        for dir in &created {
            self.filesystem.create_dir_all(dir)?;
            debug!(path = %dir.display(), "Directory ready");
        }
        info!(count = created.len(), "Directories created");
        Ok(created)
    }

    /// Copy every listed jar from the source directory into its `lib_dir`.
    #[instrument(skip_all)]
    pub fn copy_jars(&self) -> MvnkitResult<CopyReport> {
        let source_dir = self.manifest.jar_source_dir();
        let mut report = CopyReport::default();

        for (_, module) in self.manifest.entries() {
            if module.dependencies.is_empty() {
                debug!(module = module.name(), "No jars listed");
                continue;
            }
            let lib_dir = self.manifest.resolve(&module.lib_dir);

            for dep in &module.dependencies {
                let source = source_dir.join(&dep.jar_file);
                if !self.filesystem.exists(&source) {
                    warn!(
                        module = module.name(),
                        source = %source.display(),
                        "Source jar missing, skipped"
                    );
                    report.skipped.push(SkippedJar {
                        module: module.name().to_string(),
                        jar_file: dep.jar_file.clone(),
                        source,
                    });
                    continue;
                }

                let target = lib_dir.join(&dep.jar_file);
                ensure_parent(self.filesystem.as_ref(), &target)?;
                self.filesystem.copy_file(&source, &target)?;
                info!(module = module.name(), jar = %dep.jar_file, "Copied");
                report.copied.push(target);
            }
        }

        Ok(report)
    }

    /// Write the POM-fragment document; defaults to
    /// `<manifest dir>/generated-pom-configs.xml`.
    #[instrument(skip_all)]
    pub fn generate_pom_config(&self, output: Option<&Path>) -> MvnkitResult<PathBuf> {
        let path = match output {
            Some(p) => p.to_path_buf(),
            None => self.manifest.root.join(POM_CONFIG_FILE),
        };

        let document = self.renderer.pom_config(&self.manifest);
        ensure_parent(self.filesystem.as_ref(), &path)?;
        self.filesystem.write_file(&path, &document)?;

        info!(path = %path.display(), "POM configuration written");
        Ok(path)
    }

    /// One `README.md` per lib directory. The common entry only gets one
    /// when it lists jars.
    #[instrument(skip_all)]
    pub fn generate_readmes(&self) -> MvnkitResult<Vec<PathBuf>> {
        let mut written = Vec::new();

        for (scope, module) in self.manifest.entries() {
            if scope == LibScope::Common && module.dependencies.is_empty() {
                continue;
            }
            let lib_dir = self.manifest.resolve(&module.lib_dir);
            self.filesystem.create_dir_all(&lib_dir)?;

            let path = lib_dir.join("README.md");
            self.filesystem
                .write_file(&path, &self.renderer.readme(module))?;
            debug!(path = %path.display(), "README written");
            written.push(path);
        }

        info!(count = written.len(), "READMEs generated");
        Ok(written)
    }

    /// Setup, copy, generate and readme, in that order.
    pub fn run_all(&self, output: Option<&Path>) -> MvnkitResult<LibRunReport> {
        let directories = self.setup_directories()?;
        let copy = self.copy_jars()?;
        let pom_config = self.generate_pom_config(output)?;
        let readmes = self.generate_readmes()?;

        Ok(LibRunReport {
            directories,
            copy,
            pom_config,
            readmes,
        })
    }
}

fn ensure_parent(filesystem: &dyn Filesystem, path: &Path) -> MvnkitResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => filesystem.create_dir_all(parent),
        _ => Ok(()),
    }
}
