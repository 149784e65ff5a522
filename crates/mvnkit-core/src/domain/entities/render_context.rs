use std::collections::BTreeMap;

use crate::domain::entities::descriptor::{ModuleDescriptor, ProjectDescriptor};

/// Variables for `{{NAME}}` substitution in generated files.
///
/// ## Project variables
///
/// | Variable              | Example            |
/// |-----------------------|--------------------|
/// | `PROJECT_NAME`        | `shop-demo`        |
/// | `PROJECT_NAME_PASCAL` | `ShopDemo`         |
/// | `GROUP_ID`            | `com.example`      |
/// | `VERSION`             | `1.0.0-SNAPSHOT`   |
/// | `JAVA_VERSION`        | `1.8`              |
/// | `SPRING_BOOT_VERSION` | `2.7.18`           |
/// | `PACKAGE`             | `com.example`      |
/// | `PACKAGE_PATH`        | `com/example`      |
///
/// [`RenderContext::for_module`] adds `MODULE_NAME`, `MODULE_CLASS`,
/// `MODULE_PACKAGE`, `MODULE_TYPE`, `PARENT_ARTIFACT` and `PORT`.
///
/// Unknown placeholders are left as they are.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn for_project(descriptor: &ProjectDescriptor) -> Self {
        Self::default()
            .with_variable("PROJECT_NAME", &descriptor.project_name)
            .with_variable("PROJECT_NAME_PASCAL", to_pascal_case(&descriptor.project_name))
            .with_variable("GROUP_ID", &descriptor.group_id)
            .with_variable("VERSION", &descriptor.version)
            .with_variable("JAVA_VERSION", &descriptor.java_version)
            .with_variable("SPRING_BOOT_VERSION", &descriptor.spring_boot_version)
            .with_variable("PACKAGE", descriptor.package_decl())
            .with_variable("PACKAGE_PATH", descriptor.package_path())
    }

    /// Project variables plus the module's own.
    pub fn for_module(descriptor: &ProjectDescriptor, module: &ModuleDescriptor) -> Self {
        Self::for_project(descriptor)
            .with_variable("MODULE_NAME", &module.name)
            .with_variable("MODULE_CLASS", to_pascal_case(&module.name))
            .with_variable("MODULE_PACKAGE", module.package_segment())
            .with_variable("MODULE_TYPE", module.kind.as_str())
            .with_variable(
                "PARENT_ARTIFACT",
                module.parent_artifact(&descriptor.project_name),
            )
            .with_variable("PORT", module.port_or_default().to_string())
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

// ============================================================================
// String Case Conversion Helpers
// ============================================================================

/// `service-a` → `ServiceA`, `my_app` → `MyApp`.
pub fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::new();
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Split on `_`, `-`, `.`, whitespace and camelCase boundaries; lowercase
/// every word.
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c == '.' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        let camel_boundary = chars
            .peek()
            .is_some_and(|next| c.is_lowercase() && next.is_uppercase());
        if camel_boundary {
            current.push(c);
            words.push(current.to_lowercase());
            current.clear();
            continue;
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}
