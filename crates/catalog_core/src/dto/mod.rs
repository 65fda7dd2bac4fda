//! Exchange values handed to request handlers.
//!
//! Field names serialize in camelCase (`className`, `sectorId`) to match
//! the external contract. These types carry no behaviour.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorDto {
    /// `None` until storage assigns one.
    pub id: Option<i64>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDto {
    pub id: Option<i64>,
    pub class_name: String,
    pub description: Option<String>,
    pub sector_id: i64,
}

/// Read-only projection of one sector together with its classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorWithClassesDto {
    pub sector: SectorDto,
    pub classes: Vec<ClassDto>,
}
