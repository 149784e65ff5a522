//! XML fragments for local-jar dependencies.
//!
//! Shared by the module POMs of generated projects and by the lib
//! manager's `<maven-configs>` document, which differ only in indentation.

use mvnkit_core::domain::LocalDependency;

pub const INSTALL_PLUGIN_VERSION: &str = "2.5.2";

/// Indented line writer.
pub(crate) struct XmlLines {
    out: String,
    base: usize,
    step: usize,
}

impl XmlLines {
    pub(crate) fn new(base: usize, step: usize) -> Self {
        Self {
            out: String::new(),
            base,
            step,
        }
    }

    pub(crate) fn line(&mut self, depth: usize, text: impl AsRef<str>) -> &mut Self {
        let width = self.base + depth * self.step;
        self.out.extend(std::iter::repeat_n(' ', width));
        self.out.push_str(text.as_ref());
        self.out.push('\n');
        self
    }

    pub(crate) fn blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}

/// `maven-install-plugin` with one `install-file` execution per jar, bound
/// to `validate` so the jars reach the local repository before compiling.
pub fn install_plugin(deps: &[LocalDependency], base: usize, step: usize) -> String {
    let mut xml = XmlLines::new(base, step);
    xml.line(0, "<plugin>")
        .line(1, "<groupId>org.apache.maven.plugins</groupId>")
        .line(1, "<artifactId>maven-install-plugin</artifactId>")
        .line(1, format!("<version>{INSTALL_PLUGIN_VERSION}</version>"))
        .line(1, "<executions>");

    for dep in deps {
        xml.line(2, format!("<!-- {} -->", dep.label()))
            .line(2, "<execution>")
            .line(3, format!("<id>install-{}</id>", dep.artifact_id))
            .line(3, "<phase>validate</phase>")
            .line(3, "<goals>")
            .line(4, "<goal>install-file</goal>")
            .line(3, "</goals>")
            .line(3, "<configuration>")
            .line(4, format!("<file>${{project.basedir}}/lib/{}</file>", dep.jar_file))
            .line(4, format!("<groupId>{}</groupId>", dep.group_id))
            .line(4, format!("<artifactId>{}</artifactId>", dep.artifact_id))
            .line(4, format!("<version>{}</version>", dep.version))
            .line(4, "<packaging>jar</packaging>")
            .line(4, "<generatePom>true</generatePom>")
            .line(3, "</configuration>")
            .line(2, "</execution>");
    }

    xml.line(1, "</executions>").line(0, "</plugin>");
    xml.finish()
}

/// Plain `<dependency>` entries, one per jar.
pub fn dependency_blocks(deps: &[LocalDependency], base: usize, step: usize) -> String {
    let mut xml = XmlLines::new(base, step);
    for dep in deps {
        xml.line(0, format!("<!-- {} -->", dep.label()))
            .line(0, "<dependency>")
            .line(1, format!("<groupId>{}</groupId>", dep.group_id))
            .line(1, format!("<artifactId>{}</artifactId>", dep.artifact_id))
            .line(1, format!("<version>{}</version>", dep.version))
            .line(0, "</dependency>");
    }
    xml.finish()
}

/// `<module>` lines at POM indentation.
pub fn module_lines<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names
        .into_iter()
        .map(|m| format!("        <module>{m}</module>"))
        .collect::<Vec<_>>()
        .join("\n")
}
