//! Class record.
//!
//! # Invariants
//! - `class_name` is non-blank; services store it trimmed.
//! - `sector_id` must resolve to an existing sector whenever the row is
//!   written. The record cannot check that alone, see `ClassService`.

use super::sector::SectorId;
use super::{require_non_blank, EntityKind, ValidationError};

/// Storage-assigned class identifier.
pub type ClassId = i64;

/// Catalog entry belonging to exactly one sector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub id: Option<ClassId>,
    pub class_name: String,
    /// Free text, absent when the caller gave none.
    pub description: Option<String>,
    pub sector_id: SectorId,
}

impl Class {
    /// Creates a not-yet-persisted class under `sector_id`.
    pub fn new(
        class_name: impl Into<String>,
        description: Option<String>,
        sector_id: SectorId,
    ) -> Self {
        Self {
            id: None,
            class_name: class_name.into(),
            description,
            sector_id,
        }
    }

    /// Checks the required `class_name` field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank(&self.class_name, EntityKind::Class, "class_name")
    }
}
