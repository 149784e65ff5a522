//! File templates for generated projects.
//!
//! Placeholders use `{{NAME}}` and are filled by
//! [`RenderContext`](mvnkit_core::domain::RenderContext). Blocks that depend
//! on the module list (`MODULES_XML`, `LIB_DEPENDENCY`, ...) are built in
//! [`super::pom`] and passed in as variables.

// ── POMs ──────────────────────────────────────────────────────────────────────

pub const ROOT_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0
         http://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>

    <groupId>{{GROUP_ID}}</groupId>
    <artifactId>{{PROJECT_NAME}}</artifactId>
    <version>{{VERSION}}</version>
    <packaging>pom</packaging>

    <name>{{PROJECT_NAME}}</name>
    <description>Maven multi-module project generated by mvnkit</description>

    <modules>
{{MODULES_XML}}
    </modules>

    <properties>
        <java.version>{{JAVA_VERSION}}</java.version>
        <maven.compiler.source>{{JAVA_VERSION}}</maven.compiler.source>
        <maven.compiler.target>{{JAVA_VERSION}}</maven.compiler.target>
        <project.build.sourceEncoding>UTF-8</project.build.sourceEncoding>
        <spring-boot.version>{{SPRING_BOOT_VERSION}}</spring-boot.version>
    </properties>

    <dependencyManagement>
        <dependencies>
            <dependency>
                <groupId>org.springframework.boot</groupId>
                <artifactId>spring-boot-dependencies</artifactId>
                <version>${spring-boot.version}</version>
                <type>pom</type>
                <scope>import</scope>
            </dependency>
        </dependencies>
    </dependencyManagement>

    <build>
        <pluginManagement>
            <plugins>
                <plugin>
                    <groupId>org.springframework.boot</groupId>
                    <artifactId>spring-boot-maven-plugin</artifactId>
                    <version>${spring-boot.version}</version>
                </plugin>
                <plugin>
                    <groupId>org.apache.maven.plugins</groupId>
                    <artifactId>maven-compiler-plugin</artifactId>
                    <version>3.8.1</version>
                    <configuration>
                        <source>${java.version}</source>
                        <target>${java.version}</target>
                    </configuration>
                </plugin>
            </plugins>
        </pluginManagement>
    </build>
</project>
"#;

pub const LIB_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0
         http://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>

    <parent>
        <groupId>{{GROUP_ID}}</groupId>
        <artifactId>{{PARENT_ARTIFACT}}</artifactId>
        <version>{{VERSION}}</version>
    </parent>

    <artifactId>{{MODULE_NAME}}</artifactId>
    <packaging>jar</packaging>

    <name>{{MODULE_NAME}}</name>
    <description>{{MODULE_NAME}} - shared library</description>

    <dependencies>
        <dependency>
            <groupId>org.springframework.boot</groupId>
            <artifactId>spring-boot-starter</artifactId>
        </dependency>

        <dependency>
            <groupId>org.projectlombok</groupId>
            <artifactId>lombok</artifactId>
            <optional>true</optional>
        </dependency>
{{LOCAL_DEPENDENCIES}}    </dependencies>
{{LOCAL_BUILD}}</project>
"#;

pub const SERVICE_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0
         http://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>

    <parent>
        <groupId>{{GROUP_ID}}</groupId>
        <artifactId>{{PARENT_ARTIFACT}}</artifactId>
        <version>{{VERSION}}</version>
    </parent>

    <artifactId>{{MODULE_NAME}}</artifactId>
    <packaging>jar</packaging>

    <name>{{MODULE_NAME}}</name>
    <description>{{MODULE_NAME}} - Spring Boot service</description>

    <dependencies>
{{LIB_DEPENDENCY}}        <dependency>
            <groupId>org.springframework.boot</groupId>
            <artifactId>spring-boot-starter-web</artifactId>
        </dependency>

        <dependency>
            <groupId>org.springframework.boot</groupId>
            <artifactId>spring-boot-starter-test</artifactId>
            <scope>test</scope>
        </dependency>

        <dependency>
            <groupId>org.projectlombok</groupId>
            <artifactId>lombok</artifactId>
            <optional>true</optional>
        </dependency>
{{LOCAL_DEPENDENCIES}}    </dependencies>

    <build>
        <plugins>
            <plugin>
                <groupId>org.springframework.boot</groupId>
                <artifactId>spring-boot-maven-plugin</artifactId>
            </plugin>
{{LOCAL_PLUGINS}}        </plugins>
    </build>
</project>
"#;

pub const AGGREGATOR_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0
         http://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>

    <parent>
        <groupId>{{GROUP_ID}}</groupId>
        <artifactId>{{PARENT_ARTIFACT}}</artifactId>
        <version>{{VERSION}}</version>
    </parent>

    <artifactId>{{MODULE_NAME}}</artifactId>
    <packaging>pom</packaging>

    <name>{{MODULE_NAME}}</name>
    <description>{{MODULE_NAME}} - module group</description>

    <modules>
{{MODULES_XML}}
    </modules>
</project>
"#;

// ── Java sources ──────────────────────────────────────────────────────────────

pub const COMMON_UTIL: &str = r#"package {{PACKAGE}}.{{MODULE_PACKAGE}};

import java.time.LocalDateTime;
import java.time.format.DateTimeFormatter;

/**
 * Shared utilities - {{MODULE_NAME}}
 */
public class CommonUtil {

    private static final DateTimeFormatter FORMATTER =
        DateTimeFormatter.ofPattern("yyyy-MM-dd HH:mm:ss");

    /**
     * Current local time as a string.
     */
    public static String getCurrentTime() {
        return LocalDateTime.now().format(FORMATTER);
    }

    /**
     * Greeting with the current time.
     */
    public static String greet(String name) {
        return String.format("Hello, %s! Time: %s",
            name, getCurrentTime());
    }
}
"#;

pub const APPLICATION: &str = r#"package {{PACKAGE}}.{{MODULE_PACKAGE}};

import org.springframework.boot.SpringApplication;
import org.springframework.boot.autoconfigure.SpringBootApplication;

/**
 * {{MODULE_NAME}} entry point
 */
@SpringBootApplication(scanBasePackages = {"{{PACKAGE}}"})
public class {{MODULE_CLASS}}Application {

    public static void main(String[] args) {
        SpringApplication.run({{MODULE_CLASS}}Application.class, args);
    }
}
"#;

pub const API_CONTROLLER: &str = r#"package {{PACKAGE}}.{{MODULE_PACKAGE}}.controller;

import org.springframework.web.bind.annotation.*;
import java.util.HashMap;
import java.util.Map;

/**
 * {{MODULE_NAME}} API controller
 */
@RestController
@RequestMapping("/api")
public class ApiController {

    @GetMapping("/hello")
    public Map<String, Object> hello(@RequestParam(defaultValue = "World") String name) {
        Map<String, Object> result = new HashMap<>();
        result.put("service", "{{MODULE_NAME}}");
        result.put("message", "Hello, " + name + "!");
        result.put("timestamp", System.currentTimeMillis());
        return result;
    }

    @GetMapping("/health")
    public Map<String, String> health() {
        Map<String, String> result = new HashMap<>();
        result.put("status", "UP");
        result.put("service", "{{MODULE_NAME}}");
        return result;
    }
}
"#;

pub const APPLICATION_YML: &str = r#"server:
  port: {{PORT}}

spring:
  application:
    name: {{MODULE_NAME}}

logging:
  level:
    {{PACKAGE}}: DEBUG
"#;

// ── Project files ─────────────────────────────────────────────────────────────

pub const BUILD_SH: &str = r#"#!/bin/bash
echo "==================================="
echo "  Maven Multi-Module Build Tool"
echo "==================================="
mvn clean install
"#;

pub const BUILD_BAT: &str = "@echo off\r
echo ===================================\r
echo   Maven Multi-Module Build Tool\r
echo ===================================\r
mvn clean install\r
";

pub const GITIGNORE: &str = r#"# Maven
target/
pom.xml.tag
pom.xml.releaseBackup
pom.xml.versionsBackup

# IDE
.idea/
*.iml
.vscode/
.settings/
.project
.classpath

# OS
.DS_Store
Thumbs.db

# Logs
*.log

# Keep jars in lib directories
!lib/*.jar
!*/lib/*.jar
"#;

pub const README: &str = r#"# {{PROJECT_NAME}}

Maven multi-module project generated by mvnkit.

## Project

- **Group ID**: {{GROUP_ID}}
- **Version**: {{VERSION}}
- **Java Version**: {{JAVA_VERSION}}
- **Spring Boot**: {{SPRING_BOOT_VERSION}}

## Modules

{{MODULES_LIST}}

## Quick start

```bash
# build everything
mvn clean install

# run a service
cd [service-module]
mvn spring-boot:run
```

## Configuration

The generator input is saved in `project-config.yaml`.
"#;
