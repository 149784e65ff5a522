//! Renderers: Maven project tree and lib-manager documents.

mod lib_docs;
mod maven;
pub mod pom;
mod templates;

pub use lib_docs::LibDocs;
pub use maven::{MavenRenderer, SNAPSHOT_FILE};
