//! ATT&CK Field Types
//!
//! Validated string types for fields of MITRE ATT&CK records: identifiers,
//! semantic versions, domains, platforms and relationship labels.
//!
//! # Features
//! - Validate-on-construct value objects ([`Constrained`])
//! - Explicit unset state for missing fields ([`FieldState::Unset`])
//! - Serde support: malformed fields fail deserialization
//! - Schema hook for untyped JSON records ([`FieldSchema`], [`SchemaRegistry`])
//!
//! # Example
//! ```
//! use attck_types::{Id, MitrePlatform, SemVersion};
//!
//! let id = Id::new("attack-pattern--0a3ead4e-6d47-4ccb-854c-a6a4f9d96b22")?;
//! assert_eq!(id.type_tag(), Some("attack-pattern"));
//!
//! assert!(MitrePlatform::new("android").is_err());
//! assert_eq!(SemVersion::new("2.1.0")?.parts().map(|p| p.minor), Some("1"));
//! # Ok::<(), attck_types::ValidationError>(())
//! ```

#![warn(clippy::all)]

pub mod constrained;
pub mod error;
pub mod patterns;
pub mod schema;
pub mod types;
pub mod validators;

pub use constrained::{Constrained, FieldState, Rule};
pub use error::{ValidationError, ValidationResult};
pub use patterns::{FieldPattern, PatternCatalog};
pub use schema::{BaseKind, FieldSchema, SchemaRegistry, ValidatorFn};
pub use types::*;
pub use validators::{
    validate_domain, validate_id, validate_platform, validate_relationship, validate_semversion,
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize)]
    struct Technique {
        id: Id,
        x_mitre_version: SemVersion,
        x_mitre_domains: Vec<MitreDomain>,
        x_mitre_platforms: Vec<MitrePlatform>,
        #[serde(default)]
        revoked_by: Option<Id>,
    }

    #[derive(Debug, Deserialize)]
    struct Relationship {
        relationship_type: MitreRelationship,
        source_ref: Id,
        target_ref: Id,
    }

    #[test]
    fn test_record_deserializes() {
        let technique: Technique = serde_json::from_value(json!({
            "id": "attack-pattern--0a3ead4e-6d47-4ccb-854c-a6a4f9d96b22",
            "x_mitre_version": "1.2.0",
            "x_mitre_domains": ["enterprise-attack"],
            "x_mitre_platforms": ["Windows", "macOS", "Linux"],
        }))
        .unwrap();

        assert_eq!(technique.x_mitre_platforms.len(), 3);
        assert!(technique.revoked_by.is_none());
        assert_eq!(technique.x_mitre_version.parts().unwrap().patch, "0");

        let back = serde_json::to_value(&technique).unwrap();
        assert_eq!(back["x_mitre_domains"][0], "enterprise-attack");
    }

    #[test]
    fn test_record_rejects_bad_field() {
        let err = serde_json::from_value::<Technique>(json!({
            "id": "attack-pattern--1",
            "x_mitre_version": "1.2.0",
            "x_mitre_domains": ["enterprise-attack"],
            "x_mitre_platforms": ["windows"],
        }))
        .unwrap_err();
        assert!(err.to_string().contains("Invalid MitrePlatform attribute"));

        let err = serde_json::from_value::<Technique>(json!({
            "id": "attack-pattern--1",
            "x_mitre_version": 1,
            "x_mitre_domains": [],
            "x_mitre_platforms": [],
        }))
        .unwrap_err();
        assert!(err.to_string().contains("invalid type"));
    }

    #[test]
    fn test_relationship_record() {
        let rel: Relationship = serde_json::from_str(
            r#"{"relationship_type": "mitigates",
                "source_ref": "course-of-action--7",
                "target_ref": "attack-pattern--9"}"#,
        )
        .unwrap();
        assert_eq!(rel.relationship_type, "mitigates");
        assert!(rel.source_ref.is_referenceable());
        assert_eq!(rel.target_ref.object_id(), Some("9"));

        let bad = serde_json::from_str::<Relationship>(
            r#"{"relationship_type": "uses",
                "source_ref": "campaign--1",
                "target_ref": "attack-pattern--9"}"#,
        );
        assert!(bad.unwrap_err().to_string().contains("Invalid Id attribute"));
    }

    #[test]
    fn test_registry_checks_untyped_record() {
        let registry = SchemaRegistry::standard();
        let record = json!({
            "type": "relationship--1",
            "relationship_type": "detects",
            "spec_version": 21,
        });
        let fields = [
            ("type", "Id"),
            ("relationship_type", "MitreRelationship"),
            ("spec_version", "SemVersion"),
        ];
        let results: Vec<_> = fields
            .iter()
            .map(|(field, type_name)| registry.validate(type_name, &record[*field]))
            .collect();

        assert!(results[0].is_ok());
        assert!(results[1].is_ok());
        assert!(matches!(
            results[2],
            Err(ValidationError::TypeKindMismatch { found: "number", .. })
        ));
    }
}
