use crate::domain::{error::DomainError, identifiers::IdentifierSet};

/// Centralized domain validation.
///
/// Everything that turns user input into generated PHP passes through here.
pub struct DomainValidator;

impl DomainValidator {
    /// Check that `ids`, derived from `input`, make a usable PHP identifier.
    pub fn validate_identifiers(input: &str, ids: &IdentifierSet) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidName {
            name: input.trim().to_string(),
            reason: reason.to_string(),
        };

        if ids.is_empty() {
            return Err(invalid("name must contain at least one word"));
        }
        if !ids
            .type_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(invalid(
                "only letters, digits, spaces, hyphens and underscores are allowed",
            ));
        }
        if ids.type_name.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(invalid("name must start with a letter"));
        }
        Ok(())
    }

    /// Icon classes end up inside a PHP string literal.
    pub fn validate_icon(icon: &str) -> Result<(), DomainError> {
        let ok = !icon.is_empty()
            && icon
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ' '));
        if ok {
            Ok(())
        } else {
            Err(DomainError::InvalidName {
                name: icon.to_string(),
                reason: "icon must be a CSS class such as eicon-star".into(),
            })
        }
    }
}
