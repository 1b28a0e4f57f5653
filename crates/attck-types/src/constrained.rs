//! Constrained strings - validate-on-construct value objects
//!
//! A [`Constrained<R>`] is a string that passed rule `R` when it was built.
//! It is:
//! - Immutable
//! - Comparable by value
//! - Self-validating
//!
//! # Unset
//! Every constrained type also has an unset state, built by
//! [`Constrained::unset`] or `Default`. Unset values never went through the
//! rule. They are placeholders for missing fields, not valid domain values, and
//! [`Constrained::as_str`] returns `None` for them.

use crate::error::{ValidationError, ValidationResult};
use crate::schema::FieldSchema;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

/// Validation rule for a constrained string type
pub trait Rule {
    /// Type name used in error messages and the schema registry
    const TYPE_NAME: &'static str;

    /// Check `raw`, returning the value to store
    fn validate(raw: &str) -> ValidationResult<String>;
}

/// Observable state of a constrained field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldState<'a> {
    /// Unchecked placeholder
    Unset,
    /// Value that passed its rule
    Valid(&'a str),
}

#[derive(Clone, PartialEq, Eq, Hash)]
enum Slot {
    Unset,
    Valid(String),
}

/// String value guarded by rule `R`
pub struct Constrained<R: Rule> {
    slot: Slot,
    rule: PhantomData<fn() -> R>,
}

impl<R: Rule> Constrained<R> {
    /// Validate `raw` and wrap the result
    pub fn new(raw: impl AsRef<str>) -> ValidationResult<Self> {
        let value = R::validate(raw.as_ref())?;
        Ok(Self {
            slot: Slot::Valid(value),
            rule: PhantomData,
        })
    }

    /// Unchecked placeholder; skips validation entirely
    pub const fn unset() -> Self {
        Self {
            slot: Slot::Unset,
            rule: PhantomData,
        }
    }

    pub fn state(&self) -> FieldState<'_> {
        match &self.slot {
            Slot::Unset => FieldState::Unset,
            Slot::Valid(v) => FieldState::Valid(v),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self.slot, Slot::Unset)
    }

    /// Validated value, `None` when unset
    pub fn as_str(&self) -> Option<&str> {
        match &self.slot {
            Slot::Unset => None,
            Slot::Valid(v) => Some(v),
        }
    }

    /// Consume into the validated value
    pub fn into_inner(self) -> Option<String> {
        match self.slot {
            Slot::Unset => None,
            Slot::Valid(v) => Some(v),
        }
    }

    /// Run the rule again on the stored value
    ///
    /// Always succeeds for a valid value. Unset values have nothing to check.
    pub fn revalidate(&self) -> ValidationResult<()> {
        match &self.slot {
            Slot::Unset => Ok(()),
            Slot::Valid(v) => R::validate(v).map(|_| ()),
        }
    }

    /// Schema descriptor for record validation
    pub fn schema() -> FieldSchema {
        FieldSchema::new(R::TYPE_NAME, R::validate)
    }

    pub fn type_name() -> &'static str {
        R::TYPE_NAME
    }
}

impl<R: Rule> Default for Constrained<R> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<R: Rule> Clone for Constrained<R> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
            rule: PhantomData,
        }
    }
}

impl<R: Rule> PartialEq for Constrained<R> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<R: Rule> Eq for Constrained<R> {}

impl<R: Rule> Hash for Constrained<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slot.hash(state);
    }
}

impl<R: Rule> PartialEq<str> for Constrained<R> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl<R: Rule> PartialEq<&str> for Constrained<R> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl<R: Rule> fmt::Debug for Constrained<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Unset => write!(f, "{}(<unset>)", R::TYPE_NAME),
            Slot::Valid(v) => write!(f, "{}({:?})", R::TYPE_NAME, v),
        }
    }
}

impl<R: Rule> fmt::Display for Constrained<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().unwrap_or_default())
    }
}

impl<R: Rule> FromStr for Constrained<R> {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<R: Rule> TryFrom<&str> for Constrained<R> {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<R: Rule> TryFrom<String> for Constrained<R> {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<R: Rule> Serialize for Constrained<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str().unwrap_or_default())
    }
}

impl<'de, R: Rule> Deserialize<'de> for Constrained<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ConstrainedVisitor<R>(PhantomData<fn() -> R>);

        impl<R: Rule> Visitor<'_> for ConstrainedVisitor<R> {
            type Value = Constrained<R>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a {} string", R::TYPE_NAME)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Constrained::new(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(ConstrainedVisitor(PhantomData))
    }
}
