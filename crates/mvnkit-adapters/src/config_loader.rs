//! YAML loading for the two user-authored documents.
//!
//! | Document            | Entry point         | Relative paths resolve against |
//! |---------------------|---------------------|--------------------------------|
//! | project descriptor  | [`load_descriptor`] | the working directory          |
//! | lib manifest        | [`load_manifest`]   | the manifest's own directory   |
//!
//! Error mapping:
//! - file missing: [`ApplicationError::ConfigNotFound`]
//! - unreadable or malformed YAML: [`ApplicationError::ConfigParse`]
//! - parsed but breaks a descriptor rule: [`ApplicationError::ConfigInvalid`]

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use mvnkit_core::{
    application::ApplicationError,
    domain::{DomainError, LibManifest, ProjectDescriptor},
    error::{MvnkitError, MvnkitResult},
};

use crate::renderer::SNAPSHOT_FILE;

/// Load a project descriptor. `name_override` replaces `project_name`
/// before validation, so a file without one is still usable.
#[instrument(skip(name_override), fields(path = %path.display()))]
pub fn load_descriptor(
    path: &Path,
    name_override: Option<&str>,
) -> MvnkitResult<ProjectDescriptor> {
    let mut descriptor: ProjectDescriptor = read_yaml(path)?;
    if let Some(name) = name_override {
        descriptor.project_name = name.to_string();
    }

    let descriptor = descriptor.normalized();
    descriptor.validate().map_err(|source| invalid(path, source))?;

    debug!(
        project = %descriptor.project_name,
        modules = descriptor.modules.len(),
        "Descriptor loaded"
    );
    Ok(descriptor)
}

/// Load a lib manifest and anchor it at the directory that contains it.
#[instrument(fields(path = %path.display()))]
pub fn load_manifest(path: &Path) -> MvnkitResult<LibManifest> {
    let mut manifest: LibManifest = read_yaml(path)?;
    manifest.root = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    manifest.validate().map_err(|source| invalid(path, source))?;

    debug!(
        root = %manifest.root.display(),
        modules = manifest.modules.len(),
        jars = manifest.dependency_count(),
        "Manifest loaded"
    );
    Ok(manifest)
}

/// The descriptor a generated project carries at its root, if any.
///
/// Absent is `Ok(None)`; a snapshot that exists but does not parse is an
/// error so a hand-edited file is not silently ignored.
pub fn read_snapshot(project_dir: &Path) -> MvnkitResult<Option<ProjectDescriptor>> {
    let path = project_dir.join(SNAPSHOT_FILE);
    if !path.is_file() {
        return Ok(None);
    }
    let descriptor: ProjectDescriptor = read_yaml(&path)?;
    Ok(Some(descriptor.normalized()))
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> MvnkitResult<T> {
    if !path.is_file() {
        return Err(ApplicationError::ConfigNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let raw = fs::read_to_string(path).map_err(|e| ApplicationError::ConfigParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    serde_yaml::from_str(&raw).map_err(|e| {
        ApplicationError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into()
    })
}

fn invalid(path: &Path, source: DomainError) -> MvnkitError {
    ApplicationError::ConfigInvalid {
        path: path.to_path_buf(),
        source,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mvnkit_core::{
        domain::{ModuleKind, TemplateFlavor},
        error::ErrorCategory,
    };
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    // ── load_descriptor ───────────────────────────────────────────────────

    #[test]
    fn descriptor_fields_and_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write(
            &temp,
            "config.yaml",
            r#"
project_name: shop
group_id: com.acme
java_version: 17
template: full
modules:
  - name: shop-core
    type: lib
  - name: shop-api
    type: service
    port: 9090
"#,
        );

        let d = load_descriptor(&path, None).unwrap();
        assert_eq!(d.project_name, "shop");
        assert_eq!(d.group_id, "com.acme");
        assert_eq!(d.java_version, "17");
        assert_eq!(d.template, TemplateFlavor::Full);
        assert_eq!(d.modules.len(), 2);
        assert_eq!(d.modules[1].kind, ModuleKind::Service);
        assert_eq!(d.modules[1].port, Some(9090));
        assert!(d.include_examples);
    }

    #[test]
    fn name_override_fills_missing_project_name() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "config.yaml", "group_id: com.acme\n");

        let d = load_descriptor(&path, Some("from-cli")).unwrap();
        assert_eq!(d.project_name, "from-cli");
    }

    #[test]
    fn name_override_wins_over_file() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "config.yaml", "project_name: from-file\n");

        let d = load_descriptor(&path, Some("from-cli")).unwrap();
        assert_eq!(d.project_name, "from-cli");
    }

    #[test]
    fn empty_modules_list_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "config.yaml", "project_name: demo\nmodules: []\n");

        let d = load_descriptor(&path, None).unwrap();
        assert!(!d.modules.is_empty());
    }

    #[test]
    fn missing_project_name_is_config_invalid() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "config.yaml", "group_id: com.acme\n");

        let err = load_descriptor(&path, None).unwrap_err();
        assert!(matches!(
            err,
            MvnkitError::Application(ApplicationError::ConfigInvalid {
                source: DomainError::MissingRequiredField { .. },
                ..
            })
        ));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_descriptor(Path::new("/no/such/config.yaml"), None).unwrap_err();
        assert!(matches!(
            err,
            MvnkitError::Application(ApplicationError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "config.yaml", "project_name: [unclosed\n");

        let err = load_descriptor(&path, None).unwrap_err();
        assert!(matches!(
            err,
            MvnkitError::Application(ApplicationError::ConfigParse { .. })
        ));
    }

    #[test]
    fn unknown_module_type_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = write(
            &temp,
            "config.yaml",
            "project_name: demo\nmodules:\n  - name: x\n    type: plugin\n",
        );

        assert!(matches!(
            load_descriptor(&path, None).unwrap_err(),
            MvnkitError::Application(ApplicationError::ConfigParse { .. })
        ));
    }

    // ── load_manifest ─────────────────────────────────────────────────────

    #[test]
    fn manifest_root_is_its_directory() {
        let temp = TempDir::new().unwrap();
        let path = write(
            &temp,
            "lib-config.yaml",
            r#"
jar_sources:
  base_dir: jars
common:
  lib_dir: common/lib
  dependencies:
    - jar_file: util.jar
      group_id: com.acme
      artifact_id: util
      version: 1.0
modules:
  - module_name: api
    lib_dir: api/lib
    dependencies: null
  - null
"#,
        );

        let m = load_manifest(&path).unwrap();
        assert_eq!(m.root, temp.path());
        assert_eq!(m.jar_source_dir(), temp.path().join("jars"));
        assert_eq!(m.modules.len(), 1);
        assert!(m.modules[0].dependencies.is_empty());
        assert_eq!(m.dependency_count(), 1);
        assert_eq!(
            m.common.as_ref().unwrap().dependencies[0].version,
            "1.0"
        );
    }

    #[test]
    fn manifest_without_jar_sources_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "lib-config.yaml", "modules: []\n");

        assert!(matches!(
            load_manifest(&path).unwrap_err(),
            MvnkitError::Application(ApplicationError::ConfigParse { .. })
        ));
    }

    // ── read_snapshot ─────────────────────────────────────────────────────

    #[test]
    fn snapshot_absent_is_none() {
        let temp = TempDir::new().unwrap();
        assert!(read_snapshot(temp.path()).unwrap().is_none());
    }

    #[test]
    fn snapshot_round_trips_descriptor() {
        let temp = TempDir::new().unwrap();
        let descriptor = ProjectDescriptor::new("demo").with_group_id("com.acme");
        fs::write(
            temp.path().join(SNAPSHOT_FILE),
            serde_yaml::to_string(&descriptor).unwrap(),
        )
        .unwrap();

        let loaded = read_snapshot(temp.path()).unwrap().unwrap();
        assert_eq!(loaded, descriptor);
    }
}
