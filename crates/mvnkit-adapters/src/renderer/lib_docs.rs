//! Documents written by the local-jar manager.

use mvnkit_core::{
    application::ports::LibDocsRenderer,
    domain::{LibManifest, LibModule, LibScope},
};

use super::pom::{self, XmlLines};

const POM_CONFIG_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!--
  Maven POM fragments generated by mvnkit.

  For each module:
  1. Copy the <plugin> block into <build><plugins> of the module's pom.xml
  2. Copy the <dependency> blocks into <dependencies> of the same pom.xml
  3. Make sure the jars are present in the module's lib directory
-->

<maven-configs>

"#;

const README_USAGE: &str = r#"
## Usage

The jars are installed into the local Maven repository during the
`validate` phase by maven-install-plugin.

### Install while building

```bash
mvn clean install
```

### Check the dependency tree

```bash
mvn dependency:tree
```

## Notes

1. Commit these jars together with the module
2. CI builds install them the same way, no manual step is needed
"#;

/// Renders the `<maven-configs>` document and lib-directory READMEs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibDocs;

impl LibDocs {
    pub fn new() -> Self {
        Self
    }
}

impl LibDocsRenderer for LibDocs {
    fn pom_config(&self, manifest: &LibManifest) -> String {
        let mut out = String::from(POM_CONFIG_HEADER);

        for (scope, module) in manifest.entries() {
            let title = match scope {
                LibScope::Common if module.dependencies.is_empty() => continue,
                LibScope::Common => format!("common module ({})", module.name()),
                LibScope::Module => format!("module ({})", module.name()),
            };
            out.push_str(&module_section(&title, module));
            out.push_str("\n\n");
        }

        out.push_str("</maven-configs>\n");
        out
    }

    fn readme(&self, module: &LibModule) -> String {
        let mut out = format!(
            "# {} - local jar dependencies\n\n## Jars\n\n",
            module.name()
        );

        if module.dependencies.is_empty() {
            out.push_str("No local jars.\n");
        } else {
            out.push_str("| Jar | GroupId | ArtifactId | Version | Description |\n");
            out.push_str("|-----|---------|------------|---------|-------------|\n");
            for dep in &module.dependencies {
                out.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    dep.jar_file,
                    dep.group_id,
                    dep.artifact_id,
                    dep.version,
                    dep.description.as_deref().unwrap_or("-")
                ));
            }
        }

        out.push_str(README_USAGE);
        out
    }
}

fn module_section(title: &str, module: &LibModule) -> String {
    let deps = &module.dependencies;
    if deps.is_empty() {
        return format!("  <!-- {title}: no jar dependencies -->");
    }

    let mut head = XmlLines::new(2, 2);
    head.line(0, format!("<!-- ========== {title} ========== -->"))
        .blank()
        .line(0, "<!-- step 1: add to <build><plugins> -->");

    let mut out = head.finish();
    out.push_str(&pom::install_plugin(deps, 2, 2));
    out.push('\n');
    out.push_str("  <!-- step 2: add to <dependencies> -->\n");
    out.push_str(&pom::dependency_blocks(deps, 2, 2));
    out.truncate(out.trim_end().len());
    out
}
