//! Domain-level validation helpers.

use crate::domain::{DomainError, ProjectStructure, Skeleton};

/// Stateless validator over domain aggregates.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_skeleton(skeleton: &Skeleton) -> Result<(), DomainError> {
        skeleton.validate()
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}

/// Validate a user-supplied project name.
///
/// Rules: non-empty, no leading dot, no path separators, only alphanumerics
/// plus `-` and `_`.
pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
    let reject = |reason: &str| {
        Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: reason.into(),
        })
    };

    if name.is_empty() {
        return reject("name cannot be empty");
    }
    if name.starts_with('.') {
        return reject("name cannot start with '.'");
    }
    if name.contains('/') || name.contains('\\') {
        return reject("name cannot contain path separators");
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ' ')
    {
        return reject("only letters, digits, '-', '_' and spaces are allowed");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_invalid() {
        assert!(validate_project_name("").is_err());
    }

    #[test]
    fn dotfile_name_is_invalid() {
        assert!(validate_project_name(".hidden").is_err());
    }

    #[test]
    fn path_separator_in_name_is_invalid() {
        assert!(validate_project_name("a/b").is_err());
        assert!(validate_project_name("a\\b").is_err());
    }

    #[test]
    fn shell_metacharacters_rejected() {
        assert!(validate_project_name("demo;rm -rf").is_err());
        assert!(validate_project_name("$(boom)").is_err());
    }

    #[test]
    fn valid_names_pass() {
        for name in &["my-service", "my_app", "project123", "MyApp", "demo"] {
            assert!(validate_project_name(name).is_ok(), "failed for: {name}");
        }
    }
}
