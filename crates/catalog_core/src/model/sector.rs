//! Sector record.

use super::{require_non_blank, EntityKind, ValidationError};

/// Storage-assigned sector identifier.
pub type SectorId = i64;

/// Top-level catalog entry grouping classes.
///
/// Classes point at their sector; a sector never carries class data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sector {
    pub id: Option<SectorId>,
    pub name: String,
}

impl Sector {
    /// Creates a not-yet-persisted sector.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Checks the required `name` field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank(&self.name, EntityKind::Sector, "name")
    }
}
