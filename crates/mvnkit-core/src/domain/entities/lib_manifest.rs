//! Jar manifest for the local-lib manager.
//!
//! ```yaml
//! jar_sources:
//!   base_dir: ./jars
//! common:
//!   lib_dir: common/lib
//!   dependencies: []
//! modules:
//!   - module_name: service-a
//!     lib_dir: service-a/lib
//!     dependencies:
//!       - jar_file: vendor-sdk-2.1.jar
//!         group_id: com.vendor
//!         artifact_id: vendor-sdk
//!         version: "2.1"
//! ```
//!
//! Relative paths resolve against [`LibManifest::root`], the directory the
//! manifest was loaded from.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{entities::descriptor::LocalDependency, error::DomainError};

/// Label given to the `common` entry when it carries no `module_name`.
pub const COMMON_MODULE_LABEL: &str = "common";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JarSources {
    pub base_dir: PathBuf,
}

/// One `lib/` directory and the jars that belong in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibModule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
    pub lib_dir: PathBuf,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dependencies: Vec<LocalDependency>,
}

impl LibModule {
    pub fn new(module_name: impl Into<String>, lib_dir: impl Into<PathBuf>) -> Self {
        Self {
            module_name: Some(module_name.into()),
            lib_dir: lib_dir.into(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependency(mut self, dependency: LocalDependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn name(&self) -> &str {
        self.module_name.as_deref().unwrap_or(COMMON_MODULE_LABEL)
    }
}

/// Which section of the manifest a [`LibModule`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibScope {
    Common,
    Module,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibManifest {
    /// Directory relative paths resolve against. Set by the loader.
    #[serde(skip)]
    pub root: PathBuf,
    pub jar_sources: JarSources,
    #[serde(default)]
    pub common: Option<LibModule>,
    /// `null` list items are skipped.
    #[serde(default, deserialize_with = "skip_null_entries")]
    pub modules: Vec<LibModule>,
}

impl LibManifest {
    pub fn new(root: impl Into<PathBuf>, jar_base_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            jar_sources: JarSources {
                base_dir: jar_base_dir.into(),
            },
            common: None,
            modules: Vec::new(),
        }
    }

    pub fn with_common(mut self, common: LibModule) -> Self {
        self.common = Some(common);
        self
    }

    pub fn with_module(mut self, module: LibModule) -> Self {
        self.modules.push(module);
        self
    }

    /// Absolute paths are kept, relative ones are joined onto [`Self::root`].
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn jar_source_dir(&self) -> PathBuf {
        self.resolve(&self.jar_sources.base_dir)
    }

    /// The common entry first (if any), then modules in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (LibScope, &LibModule)> {
        self.common
            .iter()
            .map(|c| (LibScope::Common, c))
            .chain(self.modules.iter().map(|m| (LibScope::Module, m)))
    }

    pub fn dependency_count(&self) -> usize {
        self.entries().map(|(_, m)| m.dependencies.len()).sum()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.jar_sources.base_dir.as_os_str().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "jar_sources.base_dir".into(),
            });
        }
        for (scope, module) in self.entries() {
            if scope == LibScope::Module
                && module.module_name.as_deref().is_none_or(|n| n.trim().is_empty())
            {
                return Err(DomainError::InvalidManifest(
                    "every entry under `modules` needs a module_name".into(),
                ));
            }
            if module.lib_dir.as_os_str().is_empty() {
                return Err(DomainError::InvalidManifest(format!(
                    "module '{}' has no lib_dir",
                    module.name()
                )));
            }
            for dep in &module.dependencies {
                dep.validate()?;
            }
        }
        Ok(())
    }
}

fn skip_null_entries<'de, D>(deserializer: D) -> Result<Vec<LibModule>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Option<LibModule>>> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default().into_iter().flatten().collect())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<LocalDependency>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<LocalDependency>> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}
