//! Persisted catalog records.
//!
//! # Responsibility
//! - Define the storage-side shape of sectors and classes.
//! - Own field-level rules shared by repositories and services.
//!
//! # Invariants
//! - Ids are assigned by storage; `None` means "not persisted yet".
//! - A class always names exactly one sector through `sector_id`.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod class;
pub mod sector;

/// Catalog entity kind, carried by errors so callers can tell what was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Sector,
    Class,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sector => f.write_str("sector"),
            Self::Class => f.write_str("class"),
        }
    }
}

/// Field-level rule violation on a catalog record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace only.
    BlankField {
        entity: EntityKind,
        field: &'static str,
    },
}

impl ValidationError {
    pub fn entity(&self) -> EntityKind {
        match self {
            Self::BlankField { entity, .. } => *entity,
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            Self::BlankField { field, .. } => *field,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField { entity, field } => {
                write!(f, "{entity} field `{field}` must not be blank")
            }
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_non_blank(
    value: &str,
    entity: EntityKind,
    field: &'static str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField { entity, field });
    }
    Ok(())
}
