//! mvnkit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the mvnkit
//! Maven toolkit, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           mvnkit-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (Generator, Lib, Test, Report)         │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Renderers, Invoker, Clock) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    mvnkit-adapters (Infrastructure)     │
//! │ (LocalFilesystem, ProcessInvoker, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Descriptors, RunResult, Structure)     │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mvnkit_core::prelude::*;
//!
//! // 1. Describe the project
//! let descriptor = ProjectDescriptor::new("demo").with_group_id("com.acme");
//!
//! // 2. Use application service (with injected adapters)
//! let service = GeneratorService::new(renderer, filesystem);
//! service.materialize(&descriptor)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GeneratorService, LibService, ReportService, SuiteConfig, TestService,
        ports::{BuildInvoker, Clock, Filesystem, Invocation, LibDocsRenderer, ProjectRenderer,
            ReportRenderer},
    };
    pub use crate::domain::{
        LibManifest, LibModule, LocalDependency, ModuleDescriptor, ModuleKind,
        ProjectDescriptor, ProjectStructure, RenderContext, ReportFormat, RunResult, Summary,
        TemplateFlavor, TestRecord,
    };
    pub use crate::error::{MvnkitError, MvnkitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
