//! Error kinds surfaced by catalog services.
//!
//! # Invariants
//! - Every variant names the entity and the id or field involved.
//! - `NotFound`, `Validation` and `Reference` are raised before any write
//!   of the failing operation reaches storage.

use crate::model::sector::SectorId;
use crate::model::{EntityKind, ValidationError};
use crate::repo::store::RepoError;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug)]
pub enum ServiceError {
    /// Requested id has no stored record.
    NotFound { entity: EntityKind, id: i64 },
    /// Caller-supplied field breaks a required-field rule.
    Validation {
        entity: EntityKind,
        field: &'static str,
    },
    /// `sector_id` does not resolve to an existing sector.
    Reference { sector_id: SectorId },
    /// Storage failed for reasons unrelated to business rules.
    Storage(RepoError),
}

impl ServiceError {
    /// Stable, machine-readable error kind for handlers and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Validation { .. } => "validation",
            Self::Reference { .. } => "reference",
            Self::Storage(_) => "storage",
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::Validation { entity, field } => {
                write!(f, "{entity} field `{field}` must not be blank")
            }
            Self::Reference { sector_id } => {
                write!(f, "class references missing sector: {sector_id}")
            }
            Self::Storage(err) => write!(f, "catalog storage failure: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation {
            entity: value.entity(),
            field: value.field(),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { entity, id } => Self::NotFound { entity, id },
            RepoError::Validation(err) => err.into(),
            other => Self::Storage(other),
        }
    }
}

/// Logs a failed use-case with metadata only.
pub(crate) fn log_failure(event: &str, module: &str, err: &ServiceError) {
    match err {
        ServiceError::Storage(inner) => warn!(
            "event={event} module={module} status=error error_kind=storage error={inner}"
        ),
        rejected => warn!(
            "event={event} module={module} status=rejected error_kind={} reason={rejected}",
            rejected.kind()
        ),
    }
}
