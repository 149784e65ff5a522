use crate::domain::{
    entities::{LibManifest, ProjectDescriptor, ProjectStructure},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_descriptor(descriptor: &ProjectDescriptor) -> Result<(), DomainError> {
        descriptor.validate()
    }

    pub fn validate_manifest(manifest: &LibManifest) -> Result<(), DomainError> {
        manifest.validate()
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
