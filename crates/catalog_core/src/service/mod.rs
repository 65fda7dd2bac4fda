//! Catalog use-case services.
//!
//! # Responsibility
//! - Enforce sector/class business rules above the repositories.
//! - Define transaction boundaries for multi-step operations.
//! - Hand exchange values (`dto`) to callers.
//!
//! # Invariants
//! - Services never call request handlers.
//! - No service caches catalog data between calls.

pub mod class_service;
pub mod error;
pub mod sector_service;
pub mod seed;
