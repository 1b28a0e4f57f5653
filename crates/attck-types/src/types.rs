//! ATT&CK field types
//!
//! Concrete constrained strings used as fields of ATT&CK records.

use crate::constrained::{Constrained, Rule};
use crate::error::ValidationResult;
use crate::patterns::{REFERENCE_TAGS, SEMVERSION_RE};
use crate::validators::{
    validate_domain, validate_id, validate_platform, validate_relationship, validate_semversion,
    ID_SEPARATOR,
};

/// Semantic version rule
#[derive(Debug, Clone, Copy)]
pub enum SemVersionRule {}

impl Rule for SemVersionRule {
    const TYPE_NAME: &'static str = "SemVersion";

    fn validate(raw: &str) -> ValidationResult<String> {
        validate_semversion(raw)
    }
}

/// Object identifier rule
#[derive(Debug, Clone, Copy)]
pub enum IdRule {}

impl Rule for IdRule {
    const TYPE_NAME: &'static str = "Id";

    fn validate(raw: &str) -> ValidationResult<String> {
        validate_id(raw)
    }
}

/// Domain membership rule
#[derive(Debug, Clone, Copy)]
pub enum MitreDomainRule {}

impl Rule for MitreDomainRule {
    const TYPE_NAME: &'static str = "MitreDomain";

    fn validate(raw: &str) -> ValidationResult<String> {
        validate_domain(raw)
    }
}

/// Platform membership rule
#[derive(Debug, Clone, Copy)]
pub enum MitrePlatformRule {}

impl Rule for MitrePlatformRule {
    const TYPE_NAME: &'static str = "MitrePlatform";

    fn validate(raw: &str) -> ValidationResult<String> {
        validate_platform(raw)
    }
}

/// Relationship label rule
#[derive(Debug, Clone, Copy)]
pub enum MitreRelationshipRule {}

impl Rule for MitreRelationshipRule {
    const TYPE_NAME: &'static str = "MitreRelationship";

    fn validate(raw: &str) -> ValidationResult<String> {
        validate_relationship(raw)
    }
}

/// Semantic version, e.g. `"2.1.0"` or `"1.0.0-rc.1+build.7"`
pub type SemVersion = Constrained<SemVersionRule>;

/// ATT&CK object identifier, e.g. `"attack-pattern--0a3ead4e-..."`
pub type Id = Constrained<IdRule>;

/// ATT&CK domain (`enterprise-attack`, `mobile-attack`)
pub type MitreDomain = Constrained<MitreDomainRule>;

/// ATT&CK platform name, case-sensitive
pub type MitrePlatform = Constrained<MitrePlatformRule>;

/// ATT&CK relationship label
pub type MitreRelationship = Constrained<MitreRelationshipRule>;

/// Components of a semantic version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemVersionParts<'a> {
    pub major: &'a str,
    pub minor: &'a str,
    pub patch: &'a str,
    pub pre: Option<&'a str>,
    pub build: Option<&'a str>,
}

impl SemVersion {
    /// Split into components; `None` when unset
    pub fn parts(&self) -> Option<SemVersionParts<'_>> {
        let caps = SEMVERSION_RE.captures(self.as_str()?)?;
        Some(SemVersionParts {
            major: caps.get(1)?.as_str(),
            minor: caps.get(2)?.as_str(),
            patch: caps.get(3)?.as_str(),
            pre: caps.get(4).map(|m| m.as_str()),
            build: caps.get(5).map(|m| m.as_str()),
        })
    }
}

impl Id {
    /// Object kind prefix (`"malware"` in `"malware--1234"`)
    pub fn type_tag(&self) -> Option<&str> {
        let id = self.as_str()?;
        Some(id.split_once(ID_SEPARATOR).map_or(id, |(tag, _)| tag))
    }

    /// Part after the first `--`, if any
    pub fn object_id(&self) -> Option<&str> {
        self.as_str()?.split_once(ID_SEPARATOR).map(|(_, rest)| rest)
    }

    /// Whether this kind of object can be the target of a reference
    pub fn is_referenceable(&self) -> bool {
        self.type_tag()
            .is_some_and(|tag| REFERENCE_TAGS.contains(&tag))
    }
}
