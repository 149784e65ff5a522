//! Renders a [`ProjectDescriptor`] into a Maven multi-module tree.

use std::path::{Path, PathBuf};

use mvnkit_core::{
    application::{ApplicationError, ports::ProjectRenderer},
    domain::{
        ModuleDescriptor, ModuleKind, Permissions, ProjectDescriptor, ProjectStructure,
        RenderContext, TemplateFlavor,
    },
    error::MvnkitResult,
};
use tracing::{debug, instrument};

use super::{pom, templates};

/// Name of the descriptor snapshot written into every project.
pub const SNAPSHOT_FILE: &str = "project-config.yaml";

/// Extra top-level directories of the `full` template.
const FULL_TEMPLATE_DIRS: [&str; 3] = ["tools", "docs", "scripts"];

#[derive(Debug, Clone, Copy, Default)]
pub struct MavenRenderer;

impl MavenRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectRenderer for MavenRenderer {
    #[instrument(skip_all, fields(project = %descriptor.project_name))]
    fn render(&self, descriptor: &ProjectDescriptor) -> MvnkitResult<ProjectStructure> {
        let mut structure = ProjectStructure::new(descriptor.project_dir());

        for module in &descriptor.modules {
            let dir = module.relative_dir();
            structure.add_directory(&dir);
            if descriptor.include_local_lib && module.wants_lib_dir() {
                structure.add_directory(dir.join("lib"));
            }
        }
        if descriptor.template == TemplateFlavor::Full {
            for dir in FULL_TEMPLATE_DIRS {
                structure.add_directory(dir);
            }
        }

        structure.add_file("pom.xml", root_pom(descriptor), Permissions::read_write());

        for module in &descriptor.modules {
            render_module(descriptor, module, &mut structure);
        }

        structure.add_file("build.sh", templates::BUILD_SH.to_string(), Permissions::executable());
        structure.add_file("build.bat", templates::BUILD_BAT.to_string(), Permissions::read_write());
        structure.add_file(".gitignore", templates::GITIGNORE.to_string(), Permissions::read_write());
        structure.add_file("README.md", readme(descriptor), Permissions::read_write());
        structure.add_file(SNAPSHOT_FILE, snapshot(descriptor)?, Permissions::read_write());

        debug!(entries = structure.entries().len(), "Rendered Maven project");
        Ok(structure)
    }
}

fn root_pom(descriptor: &ProjectDescriptor) -> String {
    RenderContext::for_project(descriptor)
        .with_variable("MODULES_XML", pom::module_lines(descriptor.top_level_modules()))
        .render(templates::ROOT_POM)
}

fn render_module(
    descriptor: &ProjectDescriptor,
    module: &ModuleDescriptor,
    structure: &mut ProjectStructure,
) {
    let dir = module.relative_dir();
    let ctx = local_lib_variables(descriptor, module, RenderContext::for_module(descriptor, module));

    let pom_xml = match module.kind {
        ModuleKind::Lib => ctx.render(templates::LIB_POM),
        ModuleKind::Service => ctx
            .clone()
            .with_variable("LIB_DEPENDENCY", lib_dependency(descriptor))
            .render(templates::SERVICE_POM),
        ModuleKind::Aggregator => ctx
            .clone()
            .with_variable(
                "MODULES_XML",
                pom::module_lines(module.children.iter().map(String::as_str)),
            )
            .render(templates::AGGREGATOR_POM),
    };
    structure.add_file(dir.join("pom.xml"), pom_xml, Permissions::read_write());

    if !descriptor.include_examples || !module.has_sources() {
        return;
    }

    let package_dir = java_package_dir(&dir, descriptor, module);
    match module.kind {
        ModuleKind::Lib => {
            structure.add_file(
                package_dir.join("CommonUtil.java"),
                ctx.render(templates::COMMON_UTIL),
                Permissions::read_write(),
            );
        }
        ModuleKind::Service => {
            let class = ctx.get("MODULE_CLASS").unwrap_or_default();
            structure.add_file(
                package_dir.join(format!("{class}Application.java")),
                ctx.render(templates::APPLICATION),
                Permissions::read_write(),
            );
            structure.add_file(
                package_dir.join("controller").join("ApiController.java"),
                ctx.render(templates::API_CONTROLLER),
                Permissions::read_write(),
            );
            structure.add_file(
                dir.join("src/main/resources/application.yml"),
                ctx.render(templates::APPLICATION_YML),
                Permissions::read_write(),
            );
        }
        ModuleKind::Aggregator => {}
    }
}

/// `LOCAL_DEPENDENCIES`, `LOCAL_PLUGINS` and `LOCAL_BUILD`; all empty unless
/// local-lib support is on and the module lists jars.
fn local_lib_variables(
    descriptor: &ProjectDescriptor,
    module: &ModuleDescriptor,
    ctx: RenderContext,
) -> RenderContext {
    if !descriptor.include_local_lib || module.dependencies.is_empty() {
        return ctx
            .with_variable("LOCAL_DEPENDENCIES", "")
            .with_variable("LOCAL_PLUGINS", "")
            .with_variable("LOCAL_BUILD", "");
    }

    let deps = &module.dependencies;
    let dependencies = format!("\n{}", pom::dependency_blocks(deps, 8, 4));
    let plugins = pom::install_plugin(deps, 12, 4);
    let build = format!(
        "\n    <build>\n        <plugins>\n{}        </plugins>\n    </build>\n",
        pom::install_plugin(deps, 12, 4)
    );

    ctx.with_variable("LOCAL_DEPENDENCIES", dependencies)
        .with_variable("LOCAL_PLUGINS", plugins)
        .with_variable("LOCAL_BUILD", build)
}

/// Services depend on the first lib module, if there is one.
fn lib_dependency(descriptor: &ProjectDescriptor) -> String {
    match descriptor.first_lib() {
        Some(lib) => format!(
            "        <dependency>\n            <groupId>{}</groupId>\n            <artifactId>{}</artifactId>\n            <version>${{project.version}}</version>\n        </dependency>\n\n",
            descriptor.group_id, lib.name
        ),
        None => String::new(),
    }
}

fn java_package_dir(
    module_dir: &Path,
    descriptor: &ProjectDescriptor,
    module: &ModuleDescriptor,
) -> PathBuf {
    descriptor
        .package_path()
        .split('/')
        .filter(|s| !s.is_empty())
        .fold(module_dir.join("src/main/java"), |dir, seg| dir.join(seg))
        .join(module.package_segment())
}

fn readme(descriptor: &ProjectDescriptor) -> String {
    let modules = descriptor
        .modules
        .iter()
        .map(|m| format!("- {} ({})", m.name, m.kind))
        .collect::<Vec<_>>()
        .join("\n");

    RenderContext::for_project(descriptor)
        .with_variable("MODULES_LIST", modules)
        .render(templates::README)
}

fn snapshot(descriptor: &ProjectDescriptor) -> MvnkitResult<String> {
    serde_yaml::to_string(descriptor).map_err(|e| {
        ApplicationError::RenderingFailed {
            reason: format!("cannot serialise {SNAPSHOT_FILE}: {e}"),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mvnkit_core::domain::LocalDependency;

    fn nested() -> ProjectDescriptor {
        ProjectDescriptor::new("shop")
            .with_base_dir("/out")
            .with_modules(vec![
                ModuleDescriptor::lib("common"),
                ModuleDescriptor::service("service-a", 8081),
                ModuleDescriptor::aggregator("module-group", ["service-b"]),
                ModuleDescriptor::service("service-b", 8082).with_path("module-group"),
            ])
    }

    fn content<'a>(s: &'a ProjectStructure, path: &str) -> &'a str {
        match s.file(path) {
            Some(f) => &f.content,
            None => panic!("{path} not rendered"),
        }
    }

    #[test]
    fn root_pom_lists_top_level_modules() {
        let s = MavenRenderer.render(&nested()).unwrap();
        let pom = content(&s, "pom.xml");
        assert!(pom.contains("<module>common</module>"));
        assert!(pom.contains("<module>module-group</module>"));
        assert!(!pom.contains("<module>service-b</module>"));
        assert!(pom.contains("<java.version>1.8</java.version>"));
        assert!(pom.contains("<version>${spring-boot.version}</version>"));
        assert_eq!(s.root(), Path::new("/out/shop"));
    }

    #[test]
    fn aggregator_pom_lists_children() {
        let s = MavenRenderer.render(&nested()).unwrap();
        let pom = content(&s, "module-group/pom.xml");
        assert!(pom.contains("<packaging>pom</packaging>"));
        assert!(pom.contains("<module>service-b</module>"));
    }

    #[test]
    fn default_service_depends_on_common() {
        let s = MavenRenderer.render(&ProjectDescriptor::new("demo").normalized()).unwrap();
        let pom = content(&s, "service-a/pom.xml");
        assert!(pom.contains(
            "<groupId>com.example</groupId>\n            <artifactId>common</artifactId>\n            <version>${project.version}</version>"
        ));
        assert!(pom.contains("<artifactId>demo</artifactId>"));
    }

    #[test]
    fn nested_service_inherits_from_its_group() {
        let s = MavenRenderer.render(&nested()).unwrap();
        let pom = content(&s, "module-group/service-b/pom.xml");
        assert!(pom.contains("<artifactId>module-group</artifactId>"));
        assert!(pom.contains("<artifactId>common</artifactId>"));
        assert!(pom.contains("<version>${project.version}</version>"));
    }

    #[test]
    fn service_sources_use_pascal_case_and_port() {
        let s = MavenRenderer.render(&nested()).unwrap();
        let app = content(
            &s,
            "service-a/src/main/java/com/example/servicea/ServiceAApplication.java",
        );
        assert!(app.contains("package com.example.servicea;"));
        assert!(app.contains("public class ServiceAApplication"));
        assert!(app.contains("scanBasePackages = {\"com.example\"}"));

        let yml = content(&s, "service-a/src/main/resources/application.yml");
        assert!(yml.contains("port: 8081"));
        assert!(s.file("service-a/src/main/java/com/example/servicea/controller/ApiController.java").is_some());
        assert!(s.file("common/src/main/java/com/example/common/CommonUtil.java").is_some());
    }

    #[test]
    fn no_examples_means_no_sources() {
        let mut d = nested();
        d.include_examples = false;
        let s = MavenRenderer.render(&d).unwrap();
        assert!(s.files().all(|f| !f.path.to_string_lossy().ends_with(".java")));
    }

    #[test]
    fn build_script_is_executable() {
        let s = MavenRenderer.render(&nested()).unwrap();
        let script = s.file("build.sh").unwrap();
        assert!(script.permissions.executable_flag());
        assert!(!s.file("build.bat").unwrap().permissions.executable_flag());
    }

    #[test]
    fn full_template_adds_directories() {
        let mut d = nested();
        d.template = TemplateFlavor::Full;
        let s = MavenRenderer.render(&d).unwrap();
        let dirs: Vec<_> = s.directories().map(|d| d.path.clone()).collect();
        for name in FULL_TEMPLATE_DIRS {
            assert!(dirs.contains(&PathBuf::from(name)));
        }
    }

    #[test]
    fn local_lib_adds_lib_dirs_and_install_plugin() {
        let mut d = ProjectDescriptor::new("shop").with_modules(vec![
            ModuleDescriptor::lib("common").with_dependency(LocalDependency::new(
                "sdk.jar",
                "com.vendor",
                "sdk",
                "1.0",
            )),
            ModuleDescriptor::service("service-a", 8081),
        ]);
        d.include_local_lib = true;

        let s = MavenRenderer.render(&d).unwrap();
        let dirs: Vec<_> = s.directories().map(|d| d.path.clone()).collect();
        assert!(dirs.contains(&PathBuf::from("common/lib")));
        assert!(dirs.contains(&PathBuf::from("service-a/lib")));

        let pom = content(&s, "common/pom.xml");
        assert!(pom.contains("<id>install-sdk</id>"));
        assert!(pom.contains("<artifactId>sdk</artifactId>"));
        assert!(!content(&s, "service-a/pom.xml").contains("maven-install-plugin"));
    }

    #[test]
    fn snapshot_parses_back_to_descriptor() {
        let d = nested();
        let s = MavenRenderer.render(&d).unwrap();
        let parsed: ProjectDescriptor =
            serde_yaml::from_str(content(&s, SNAPSHOT_FILE)).unwrap();
        assert_eq!(parsed, d);
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = MavenRenderer.render(&nested()).unwrap();
        let b = MavenRenderer.render(&nested()).unwrap();
        let files = |s: &ProjectStructure| {
            s.files()
                .map(|f| (f.path.clone(), f.content.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(files(&a), files(&b));
        assert!(a.validate().is_ok());
    }
}
