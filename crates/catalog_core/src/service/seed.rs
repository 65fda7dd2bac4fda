//! Demo catalog bootstrap.
//!
//! Seeds one sector with two classes so a fresh database has something to
//! show. Runs only against an empty catalog.

use crate::dto::{ClassDto, SectorDto};
use crate::mapper::{class_to_dto, sector_to_dto};
use crate::model::class::Class;
use crate::model::sector::Sector;
use crate::repo::store::{CatalogStore, RepoError};
use crate::service::error::ServiceResult;
use log::info;

const DEMO_SECTOR: &str = "Informatique";
const DEMO_CLASSES: &[&str] = &["Classe A", "Classe B"];

/// What `seed_demo_catalog` wrote. `sector` is `None` when seeding was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub sector: Option<SectorDto>,
    pub classes: Vec<ClassDto>,
}

impl SeedReport {
    pub fn skipped(&self) -> bool {
        self.sector.is_none()
    }
}

/// Seeds the demo sector and classes in one transaction.
///
/// Does nothing when at least one sector already exists.
pub fn seed_demo_catalog<S: CatalogStore>(store: &S) -> ServiceResult<SeedReport> {
    let report = store.transaction(|store| -> ServiceResult<SeedReport> {
        if !store.find_all_sectors()?.is_empty() {
            return Ok(SeedReport {
                sector: None,
                classes: Vec::new(),
            });
        }

        let sector = store.save_sector(&Sector::new(DEMO_SECTOR))?;
        let sector_id = sector.id.ok_or_else(|| {
            RepoError::InvalidData("seeded sector came back without id".to_string())
        })?;

        let mut classes = Vec::with_capacity(DEMO_CLASSES.len());
        for name in DEMO_CLASSES {
            let saved = store.save_class(&Class::new(*name, None, sector_id))?;
            classes.push(class_to_dto(saved));
        }

        Ok(SeedReport {
            sector: Some(sector_to_dto(sector)),
            classes,
        })
    })?;

    info!(
        "event=catalog_seed module=seed status=ok skipped={} classes={}",
        report.skipped(),
        report.classes.len()
    );
    Ok(report)
}
