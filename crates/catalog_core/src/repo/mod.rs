//! Storage gateway for sectors and classes.
//!
//! # Responsibility
//! - Define per-entity data access contracts (`SectorRepository`,
//!   `ClassRepository`) and the transactional seam (`CatalogStore`).
//! - Keep SQL inside the persistence boundary.
//!
//! # Invariants
//! - Every repository call touches at most one row of one table.
//!   Multi-row consistency belongs to services, inside
//!   `CatalogStore::transaction`.
//! - Write paths validate records before any SQL mutation.

pub mod class_repo;
pub mod sector_repo;
pub mod store;
