//! Sector/class catalog core.
//! This crate owns the referential-integrity rules between sectors and
//! their classes, and the transaction boundaries that protect them.

pub mod config;
pub mod db;
pub mod dto;
pub mod logging;
pub mod mapper;
pub mod model;
pub mod repo;
pub mod service;

pub use config::CoreConfig;
pub use dto::{ClassDto, SectorDto, SectorWithClassesDto};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::class::{Class, ClassId};
pub use model::sector::{Sector, SectorId};
pub use model::{EntityKind, ValidationError};
pub use repo::class_repo::ClassRepository;
pub use repo::sector_repo::SectorRepository;
pub use repo::store::{CatalogStore, RepoError, RepoResult, SqliteCatalogStore};
pub use service::class_service::ClassService;
pub use service::error::{ServiceError, ServiceResult};
pub use service::sector_service::{SectorDeletion, SectorService};
pub use service::seed::{seed_demo_catalog, SeedReport};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
