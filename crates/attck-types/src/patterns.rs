//! Rule tables for ATT&CK fields
//!
//! Fixed vocabularies and grammars checked by the validators. The
//! [`PatternCatalog`] exposes them for enumeration or export.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Semantic version grammar (semver.org, anchored)
pub const SEMVERSION_PATTERN: &str = r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$";

/// Sample versions accepted by the grammar
pub const SEMVERSION_EXAMPLES: &[&str] = &["1.1.1", "0.1.2", "99.99.99"];

/// Object kinds allowed as the prefix of an identifier
pub const TYPE_TAGS: &[&str] = &[
    "relationship",
    "x-mitre-matrix",
    "identity",
    "marking-definition",
    "course-of-action",
    "malware",
    "tool",
    "intrusion-set",
    "x-mitre-data-source",
    "x-mitre-data-component",
    "x-mitre-tactic",
    "attack-pattern",
    "bundle",
];

/// Object kinds that may be the target of a reference
pub const REFERENCE_TAGS: &[&str] = &[
    "identity",
    "marking-definition",
    "course-of-action",
    "malware",
    "tool",
    "intrusion-set",
    "x-mitre-data-source",
    "x-mitre-data-component",
    "x-mitre-tactic",
    "attack-pattern",
];

/// ATT&CK domains
pub const DOMAINS: &[&str] = &["mobile-attack", "enterprise-attack"];

/// ATT&CK platforms (case-sensitive)
pub const PLATFORMS: &[&str] = &[
    "Windows",
    "Android",
    "iOS",
    "macOS",
    "Azure AD",
    "SaaS",
    "Network",
    "Google Workspace",
    "PRE",
    "Containers",
    "IaaS",
    "Linux",
    "Office 365",
];

/// Relationship labels
pub const RELATIONSHIPS: &[&str] = &[
    "revoked-by",
    "subtechnique-of",
    "uses",
    "detects",
    "mitigates",
    "related-to",
];

pub(crate) static SEMVERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(SEMVERSION_PATTERN).expect("semver pattern compiles"));

/// One named rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldPattern {
    pub name: &'static str,
    pub pattern: Option<&'static str>,
    pub examples: &'static [&'static str],
}

impl FieldPattern {
    /// Exact membership test against the example set
    pub fn contains(&self, value: &str) -> bool {
        self.examples.contains(&value)
    }
}

/// All rule tables, keyed the way the ATT&CK data pipeline names them
#[derive(Debug, Clone, Serialize)]
pub struct PatternCatalog {
    pub semversion: FieldPattern,
    pub types: FieldPattern,
    pub reference: FieldPattern,
    pub domains: FieldPattern,
    pub platforms: FieldPattern,
    pub relationship: FieldPattern,
}

impl PatternCatalog {
    /// Catalog of the built-in tables
    pub const fn standard() -> Self {
        Self {
            semversion: FieldPattern {
                name: "semversion",
                pattern: Some(SEMVERSION_PATTERN),
                examples: SEMVERSION_EXAMPLES,
            },
            types: FieldPattern {
                name: "types",
                pattern: None,
                examples: TYPE_TAGS,
            },
            reference: FieldPattern {
                name: "reference",
                pattern: None,
                examples: REFERENCE_TAGS,
            },
            domains: FieldPattern {
                name: "domains",
                pattern: None,
                examples: DOMAINS,
            },
            platforms: FieldPattern {
                name: "platforms",
                pattern: None,
                examples: PLATFORMS,
            },
            relationship: FieldPattern {
                name: "relationship",
                pattern: None,
                examples: RELATIONSHIPS,
            },
        }
    }

    /// Look up a table by name
    pub fn get(&self, name: &str) -> Option<&FieldPattern> {
        self.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldPattern> {
        [
            &self.semversion,
            &self.types,
            &self.reference,
            &self.domains,
            &self.platforms,
            &self.relationship,
        ]
        .into_iter()
    }

    /// Export as JSON
    pub fn to_json(&self) -> serde_json::Value {
        let tables = self
            .iter()
            .map(|p| {
                let entry = serde_json::json!({
                    "pattern": p.pattern,
                    "examples": p.examples,
                });
                (p.name.to_string(), entry)
            })
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(tables)
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_tags_are_type_tags() {
        for tag in REFERENCE_TAGS {
            assert!(TYPE_TAGS.contains(tag), "{tag} missing from type tags");
        }
    }

    #[test]
    fn test_semver_examples_match() {
        for v in SEMVERSION_EXAMPLES {
            assert!(SEMVERSION_RE.is_match(v));
        }
        assert!(!SEMVERSION_RE.is_match("01.1.1"));
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = PatternCatalog::standard();
        assert_eq!(catalog.iter().count(), 6);
        assert!(catalog.get("platforms").unwrap().contains("Office 365"));
        assert!(catalog.get("nope").is_none());
    }

    #[test]
    fn test_catalog_json_export() {
        let json = PatternCatalog::standard().to_json();
        assert_eq!(json["domains"]["examples"][1], "enterprise-attack");
        assert!(json["types"]["pattern"].is_null());
        assert_eq!(json["semversion"]["pattern"], SEMVERSION_PATTERN);
    }
}
