//! Project and module descriptors.
//!
//! A [`ProjectDescriptor`] is everything the generator needs to know about a
//! Maven multi-module project. It is deserialised from the generator YAML
//! (or built from CLI flags), validated once, rendered, and discarded. The
//! only thing that outlives a run is the `project-config.yaml` snapshot the
//! generator writes next to the project, which is this same struct
//! serialised back.
//!
//! Absent optional keys take the defaults below:
//!
//! | Key                   | Default                               |
//! |-----------------------|---------------------------------------|
//! | `base_dir`            | `.`                                   |
//! | `group_id`            | `com.example`                         |
//! | `version`             | `1.0.0-SNAPSHOT`                      |
//! | `java_version`        | `1.8`                                 |
//! | `spring_boot_version` | `2.7.18`                              |
//! | `package_name`        | `group_id` with `.` replaced by `/`   |
//! | `template`            | `standard`                            |
//! | `include_examples`    | `true`                                |
//! | `include_local_lib`   | `false`                               |
//! | `modules`             | `common` (lib) + `service-a` (8081)   |

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{entities::common::RelativePath, error::DomainError};

pub const DEFAULT_GROUP_ID: &str = "com.example";
pub const DEFAULT_VERSION: &str = "1.0.0-SNAPSHOT";
pub const DEFAULT_JAVA_VERSION: &str = "1.8";
pub const DEFAULT_SPRING_BOOT_VERSION: &str = "2.7.18";
pub const DEFAULT_SERVICE_PORT: u16 = 8080;

// ── ModuleKind ────────────────────────────────────────────────────────────────

/// What a module builds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    /// Shared jar other modules depend on.
    Lib,
    /// Spring Boot application with a port.
    Service,
    /// `pom`-packaged parent listing child modules.
    Aggregator,
}

impl ModuleKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lib => "lib",
            Self::Service => "service",
            Self::Aggregator => "aggregator",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lib" => Ok(Self::Lib),
            "service" => Ok(Self::Service),
            "aggregator" => Ok(Self::Aggregator),
            other => Err(DomainError::InvalidModule {
                module: other.to_string(),
                reason: "unknown module type".into(),
            }),
        }
    }
}

// ── TemplateFlavor ────────────────────────────────────────────────────────────

/// How much scaffolding around the modules gets generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateFlavor {
    Minimal,
    #[default]
    Standard,
    /// Adds `tools/`, `docs/` and `scripts/` directories.
    Full,
}

impl TemplateFlavor {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Standard => "standard",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for TemplateFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateFlavor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "standard" => Ok(Self::Standard),
            "full" => Ok(Self::Full),
            other => Err(DomainError::UnknownTemplate {
                name: other.to_string(),
            }),
        }
    }
}

// ── LocalDependency ───────────────────────────────────────────────────────────

/// A jar that is not in any remote repository and ships in a `lib/` dir.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalDependency {
    pub jar_file: String,
    pub group_id: String,
    pub artifact_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LocalDependency {
    pub fn new(
        jar_file: impl Into<String>,
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            jar_file: jar_file.into(),
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Human label used in generated comments: the description, or the
    /// artifact id when there is none.
    pub fn label(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.artifact_id)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let fields = [
            ("jar_file", &self.jar_file),
            ("group_id", &self.group_id),
            ("artifact_id", &self.artifact_id),
            ("version", &self.version),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(DomainError::InvalidDependency {
                    artifact: self.artifact_id.clone(),
                    reason: format!("'{field}' must not be empty"),
                });
            }
        }
        if Path::new(&self.jar_file).is_absolute() {
            return Err(DomainError::InvalidDependency {
                artifact: self.artifact_id.clone(),
                reason: "jar_file must be relative to the jar source directory".into(),
            });
        }
        Ok(())
    }
}

// ── ModuleDescriptor ──────────────────────────────────────────────────────────

/// One Maven module of the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ModuleKind,
    /// Parent directory relative to the project root, e.g. `module-group`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Child module names, aggregators only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<LocalDependency>,
}

impl ModuleDescriptor {
    pub fn new(name: impl Into<String>, kind: ModuleKind) -> Self {
        Self {
            name: name.into(),
            kind,
            path: None,
            port: None,
            children: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn lib(name: impl Into<String>) -> Self {
        Self::new(name, ModuleKind::Lib)
    }

    pub fn service(name: impl Into<String>, port: u16) -> Self {
        Self::new(name, ModuleKind::Service).with_port(port)
    }

    pub fn aggregator<I, S>(name: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut module = Self::new(name, ModuleKind::Aggregator);
        module.children = children.into_iter().map(Into::into).collect();
        module
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_dependency(mut self, dependency: LocalDependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_SERVICE_PORT)
    }

    /// Directory of this module relative to the project root.
    pub fn relative_dir(&self) -> PathBuf {
        match self.path.as_deref().filter(|p| !p.is_empty()) {
            Some(parent) => Path::new(parent).join(&self.name),
            None => PathBuf::from(&self.name),
        }
    }

    /// Artifact id of the POM this module inherits from.
    pub fn parent_artifact<'a>(&'a self, project_name: &'a str) -> &'a str {
        match self.path.as_deref().map(|p| p.trim_end_matches('/')) {
            Some(parent) if !parent.is_empty() => parent.rsplit('/').next().unwrap_or(parent),
            _ => project_name,
        }
    }

    /// Java package segment: the module name without hyphens.
    pub fn package_segment(&self) -> String {
        self.name.replace('-', "")
    }

    pub fn has_sources(&self) -> bool {
        self.kind != ModuleKind::Aggregator
    }

    pub fn wants_lib_dir(&self) -> bool {
        matches!(self.kind, ModuleKind::Lib | ModuleKind::Service)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "modules[].name".into(),
            });
        }
        if self.name.contains(['/', '\\']) || self.name.starts_with('.') {
            return Err(DomainError::InvalidModule {
                module: self.name.clone(),
                reason: "name must be a single directory name (use `path` for nesting)".into(),
            });
        }
        if let Some(path) = &self.path {
            RelativePath::try_new(path).map_err(|_| DomainError::InvalidModule {
                module: self.name.clone(),
                reason: format!("path '{path}' must be relative to the project root"),
            })?;
        }
        if self.port == Some(0) {
            return Err(DomainError::InvalidModule {
                module: self.name.clone(),
                reason: "port must be between 1 and 65535".into(),
            });
        }
        if self.children.iter().any(|c| c.trim().is_empty()) {
            return Err(DomainError::InvalidModule {
                module: self.name.clone(),
                reason: "children must not contain empty names".into(),
            });
        }
        for dep in &self.dependencies {
            dep.validate()?;
        }
        Ok(())
    }
}

// ── ProjectDescriptor ─────────────────────────────────────────────────────────

/// Generator input: the whole project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    /// Required. Left empty by serde so the loader can apply a CLI override
    /// before validation reports it missing.
    #[serde(default)]
    pub project_name: String,
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
    #[serde(default = "default_group_id")]
    pub group_id: String,
    #[serde(default = "default_version", deserialize_with = "string_or_number")]
    pub version: String,
    #[serde(default = "default_java_version", deserialize_with = "string_or_number")]
    pub java_version: String,
    #[serde(
        default = "default_spring_boot_version",
        deserialize_with = "string_or_number"
    )]
    pub spring_boot_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(default)]
    pub template: TemplateFlavor,
    #[serde(default = "default_true")]
    pub include_examples: bool,
    #[serde(default)]
    pub include_local_lib: bool,
    #[serde(default = "default_modules")]
    pub modules: Vec<ModuleDescriptor>,
}

impl ProjectDescriptor {
    /// Descriptor with every optional field at its default.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            base_dir: default_base_dir(),
            group_id: default_group_id(),
            version: default_version(),
            java_version: default_java_version(),
            spring_boot_version: default_spring_boot_version(),
            package_name: None,
            template: TemplateFlavor::default(),
            include_examples: true,
            include_local_lib: false,
            modules: default_modules(),
        }
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn with_group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = group_id.into();
        self
    }

    pub fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = Some(package_name.into());
        self
    }

    pub fn with_modules(mut self, modules: Vec<ModuleDescriptor>) -> Self {
        self.modules = modules;
        self
    }

    /// Restore the default module list when the configuration gave an
    /// explicitly empty one.
    pub fn normalized(mut self) -> Self {
        if self.modules.is_empty() {
            self.modules = default_modules();
        }
        self
    }

    /// Directory the project is generated into.
    pub fn project_dir(&self) -> PathBuf {
        self.base_dir.join(&self.project_name)
    }

    /// Package as a path, e.g. `com/example`.
    pub fn package_path(&self) -> String {
        self.package_name
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(&self.group_id)
            .replace('.', "/")
    }

    /// Package as a Java declaration, e.g. `com.example`.
    pub fn package_decl(&self) -> String {
        self.package_path().replace('/', ".")
    }

    /// First `lib` module; services depend on it.
    pub fn first_lib(&self) -> Option<&ModuleDescriptor> {
        self.modules.iter().find(|m| m.kind == ModuleKind::Lib)
    }

    /// Entries of the root `<modules>` block, in declaration order.
    ///
    /// Modules without a path are listed directly. A module nested one
    /// level deep contributes its parent directory once; deeper nesting is
    /// left to the intermediate aggregator.
    pub fn top_level_modules(&self) -> Vec<&str> {
        let mut listed: Vec<&str> = Vec::new();
        for module in &self.modules {
            match module.path.as_deref().filter(|p| !p.is_empty()) {
                None => listed.push(&module.name),
                Some(parent) if !parent.contains('/') => {
                    if !listed.contains(&parent) {
                        listed.push(parent);
                    }
                }
                Some(_) => {}
            }
        }
        listed
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let name = self.project_name.trim();
        if name.is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "project_name".into(),
            });
        }
        let invalid = |reason: &str| DomainError::InvalidProjectName {
            name: self.project_name.clone(),
            reason: reason.into(),
        };
        if name.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if name.contains(['/', '\\']) {
            return Err(invalid("name cannot contain path separators"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(invalid("name cannot contain whitespace"));
        }
        if self.group_id.trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "group_id".into(),
            });
        }
        if self.modules.is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "modules".into(),
            });
        }

        let mut seen = HashSet::new();
        for module in &self.modules {
            module.validate()?;
            if !seen.insert(module.name.as_str()) {
                return Err(DomainError::DuplicateModule {
                    name: module.name.clone(),
                });
            }
        }
        Ok(())
    }
}

// ── serde helpers ─────────────────────────────────────────────────────────────

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_group_id() -> String {
    DEFAULT_GROUP_ID.into()
}

fn default_version() -> String {
    DEFAULT_VERSION.into()
}

fn default_java_version() -> String {
    DEFAULT_JAVA_VERSION.into()
}

fn default_spring_boot_version() -> String {
    DEFAULT_SPRING_BOOT_VERSION.into()
}

fn default_true() -> bool {
    true
}

/// `common` (lib) + `service-a` (service on 8081).
pub fn default_modules() -> Vec<ModuleDescriptor> {
    vec![
        ModuleDescriptor::lib("common"),
        ModuleDescriptor::service("service-a", 8081),
    ]
}

/// YAML writes `java_version: 11` or `version: 1.0` unquoted; accept both.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(i) => i.to_string(),
        // `1.0` must stay `1.0`, not `1`.
        Raw::Float(f) if f.is_finite() && f.fract() == 0.0 => format!("{f:.1}"),
        Raw::Float(f) => f.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_descriptor() -> ProjectDescriptor {
        ProjectDescriptor::new("shop").with_modules(vec![
            ModuleDescriptor::lib("common"),
            ModuleDescriptor::service("service-a", 8081),
            ModuleDescriptor::aggregator("module-group", ["service-b"]),
            ModuleDescriptor::service("service-b", 8082).with_path("module-group"),
        ])
    }

    #[test]
    fn defaults_match_documented_values() {
        let d = ProjectDescriptor::new("demo");
        assert_eq!(d.group_id, "com.example");
        assert_eq!(d.version, "1.0.0-SNAPSHOT");
        assert_eq!(d.java_version, "1.8");
        assert_eq!(d.spring_boot_version, "2.7.18");
        assert_eq!(d.template, TemplateFlavor::Standard);
        assert!(d.include_examples);
        assert!(!d.include_local_lib);
        assert_eq!(d.modules.len(), 2);
        assert_eq!(d.modules[1].port, Some(8081));
    }

    #[test]
    fn package_path_derives_from_group_id() {
        let d = ProjectDescriptor::new("demo").with_group_id("com.acme.shop");
        assert_eq!(d.package_path(), "com/acme/shop");
        assert_eq!(d.package_decl(), "com.acme.shop");
    }

    #[test]
    fn explicit_package_name_wins() {
        let d = ProjectDescriptor::new("demo").with_package_name("org/demo/app");
        assert_eq!(d.package_path(), "org/demo/app");
        assert_eq!(d.package_decl(), "org.demo.app");
    }

    #[test]
    fn top_level_modules_lists_nested_parents_once() {
        let d = nested_descriptor();
        assert_eq!(
            d.top_level_modules(),
            vec!["common", "service-a", "module-group"]
        );
    }

    #[test]
    fn nested_module_resolves_dir_and_parent() {
        let d = nested_descriptor();
        let b = &d.modules[3];
        assert_eq!(b.relative_dir(), PathBuf::from("module-group/service-b"));
        assert_eq!(b.parent_artifact("shop"), "module-group");
        assert_eq!(d.modules[0].parent_artifact("shop"), "shop");
    }

    #[test]
    fn service_port_defaults_to_8080() {
        let m = ModuleDescriptor::new("svc", ModuleKind::Service);
        assert_eq!(m.port_or_default(), 8080);
    }

    #[test]
    fn validate_accepts_nested_descriptor() {
        assert!(nested_descriptor().validate().is_ok());
    }

    #[test]
    fn validate_reports_missing_project_name() {
        let d = ProjectDescriptor::new("");
        assert_eq!(
            d.validate(),
            Err(DomainError::MissingRequiredField {
                field: "project_name".into()
            })
        );
    }

    #[test]
    fn validate_rejects_duplicate_modules() {
        let d = ProjectDescriptor::new("demo").with_modules(vec![
            ModuleDescriptor::lib("common"),
            ModuleDescriptor::lib("common"),
        ]);
        assert!(matches!(
            d.validate(),
            Err(DomainError::DuplicateModule { .. })
        ));
    }

    #[test]
    fn validate_rejects_escaping_module_path() {
        let d = ProjectDescriptor::new("demo")
            .with_modules(vec![ModuleDescriptor::lib("common").with_path("../elsewhere")]);
        assert!(matches!(d.validate(), Err(DomainError::InvalidModule { .. })));
    }

    #[test]
    fn validate_rejects_bad_project_names() {
        for name in [".hidden", "a/b", "two words"] {
            assert!(
                matches!(
                    ProjectDescriptor::new(name).validate(),
                    Err(DomainError::InvalidProjectName { .. })
                ),
                "accepted {name:?}"
            );
        }
    }

    #[test]
    fn normalized_restores_default_modules() {
        let d = ProjectDescriptor::new("demo").with_modules(vec![]).normalized();
        assert_eq!(d.modules, default_modules());
    }

    #[test]
    fn dependency_label_falls_back_to_artifact() {
        let dep = LocalDependency::new("x.jar", "com.x", "x-core", "1.0");
        assert_eq!(dep.label(), "x-core");
        assert_eq!(dep.clone().with_description("X core").label(), "X core");
    }

    #[test]
    fn module_kind_parses_case_insensitively() {
        assert_eq!("Service".parse::<ModuleKind>().unwrap(), ModuleKind::Service);
        assert!("plugin".parse::<ModuleKind>().is_err());
    }
}
