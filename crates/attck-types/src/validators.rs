//! Field validators
//!
//! Each validator checks a candidate string against one rule table and
//! returns the value to store, or the rule it violated.

use crate::error::{ValidationError, ValidationResult};
use crate::patterns::{DOMAINS, PLATFORMS, RELATIONSHIPS, SEMVERSION_RE, TYPE_TAGS};

/// Separator between an identifier's type tag and its object id
pub const ID_SEPARATOR: &str = "--";

/// Validate a semantic version (`MAJOR.MINOR.PATCH[-PRE][+BUILD]`)
///
/// The full version string is kept. Use [`crate::SemVersion::parts`] to read
/// the individual components.
pub fn validate_semversion(v: &str) -> ValidationResult<String> {
    if !SEMVERSION_RE.is_match(v) {
        tracing::debug!(type_name = "SemVersion", value = v, "rejected");
        return Err(ValidationError::format("SemVersion", v));
    }
    Ok(v.to_string())
}

/// Validate an ATT&CK object identifier
///
/// With a `--` separator only the part before the first separator is
/// checked against the type tags. Without one, the whole value must be a tag.
pub fn validate_id(v: &str) -> ValidationResult<String> {
    let tag = v.split_once(ID_SEPARATOR).map_or(v, |(tag, _)| tag);
    if !TYPE_TAGS.contains(&tag) {
        tracing::debug!(type_name = "Id", value = v, tag, "rejected");
        return Err(ValidationError::attribute("Id", v));
    }
    Ok(v.to_string())
}

pub fn validate_domain(v: &str) -> ValidationResult<String> {
    member_of(v, DOMAINS, "MitreDomain")
}

pub fn validate_platform(v: &str) -> ValidationResult<String> {
    member_of(v, PLATFORMS, "MitrePlatform")
}

pub fn validate_relationship(v: &str) -> ValidationResult<String> {
    member_of(v, RELATIONSHIPS, "MitreRelationship")
}

fn member_of(v: &str, allowed: &[&str], type_name: &'static str) -> ValidationResult<String> {
    if !allowed.contains(&v) {
        tracing::debug!(type_name, value = v, "rejected");
        return Err(ValidationError::attribute(type_name, v));
    }
    Ok(v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semversion_keeps_full_string() {
        assert_eq!(validate_semversion("1.1.1").unwrap(), "1.1.1");
        assert_eq!(
            validate_semversion("1.0.0-alpha.1+build.5").unwrap(),
            "1.0.0-alpha.1+build.5"
        );
    }

    #[test]
    fn test_semversion_rejects() {
        for bad in ["0000", "asdefasdf", "1.1", "01.1.1", "1.1.1-", "1.1.1+", " 1.1.1", ""] {
            assert!(
                matches!(validate_semversion(bad), Err(ValidationError::InvalidFormat { .. })),
                "{bad:?} accepted"
            );
        }
    }

    #[test]
    fn test_id_splits_on_first_separator() {
        assert!(validate_id("malware--1234").is_ok());
        assert!(validate_id("attack-pattern--0a3ead4e-6d47-4ccb-854c-a6a4f9d96b22").is_ok());
        assert!(validate_id("tool--a--b").is_ok());
        assert!(validate_id("bundle").is_ok());
    }

    #[test]
    fn test_id_rejects_unknown_tag() {
        for bad in ["not-a-type", "asdefasdf", "asdefasdf-", "--malware", "Malware--1", ""] {
            let err = validate_id(bad).unwrap_err();
            assert!(err.to_string().contains("Invalid Id attribute"), "{bad:?}");
        }
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        assert!(validate_platform("Android").is_ok());
        let err = validate_platform("android").unwrap_err();
        assert!(err.to_string().contains("Invalid MitrePlatform attribute"));
        assert!(validate_domain("Enterprise-Attack").is_err());
        assert!(validate_relationship("Uses").is_err());
    }

    #[test]
    fn test_membership_messages() {
        let err = validate_domain("0000").unwrap_err();
        assert!(err.to_string().contains("Invalid MitreDomain attribute"));
        let err = validate_relationship("relationship").unwrap_err();
        assert!(err.to_string().contains("Invalid MitreRelationship attribute"));
    }
}
