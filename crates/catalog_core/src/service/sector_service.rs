//! Sector use-case service.
//!
//! # Responsibility
//! - Own the sector lifecycle and its cascading delete policy.
//! - Return exchange values, never storage records.
//!
//! # Invariants
//! - Deleting a sector removes every class that references it, children
//!   first, inside one transaction.
//! - Sector ids never change after creation.

use crate::dto::{SectorDto, SectorWithClassesDto};
use crate::mapper::{class_to_dto, sector_to_dto};
use crate::model::class::ClassId;
use crate::model::sector::{Sector, SectorId};
use crate::model::EntityKind;
use crate::repo::store::{CatalogStore, RepoError};
use crate::service::error::{log_failure, ServiceError, ServiceResult};
use log::info;

const MODULE: &str = "sector_service";

/// Outcome of a successful sector deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorDeletion {
    pub sector_id: SectorId,
    /// Classes removed by the cascade, in id order.
    pub removed_class_ids: Vec<ClassId>,
}

/// Sector service facade over a catalog store.
pub struct SectorService<S: CatalogStore> {
    store: S,
}

impl<S: CatalogStore> SectorService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads one sector; `NotFound` when the id is unknown.
    pub fn get_sector_by_id(&self, id: SectorId) -> ServiceResult<SectorDto> {
        self.store
            .find_sector(id)?
            .map(sector_to_dto)
            .ok_or(ServiceError::NotFound {
                entity: EntityKind::Sector,
                id,
            })
    }

    /// Lists every sector ordered by id.
    pub fn get_all_sectors(&self) -> ServiceResult<Vec<SectorDto>> {
        Ok(self
            .store
            .find_all_sectors()?
            .into_iter()
            .map(sector_to_dto)
            .collect())
    }

    /// Creates a sector. Names need not be unique.
    pub fn create_sector(&self, name: impl Into<String>) -> ServiceResult<SectorDto> {
        let result = self.try_create(Sector::new(name));
        match &result {
            Ok(sector) => info!(
                "event=sector_create module={MODULE} status=ok sector_id={}",
                sector.id.unwrap_or_default()
            ),
            Err(err) => log_failure("sector_create", MODULE, err),
        }
        result
    }

    /// Replaces the name of an existing sector.
    ///
    /// An unknown id is reported as `NotFound` even when `new_name` is blank.
    pub fn update_sector(
        &self,
        id: SectorId,
        new_name: impl Into<String>,
    ) -> ServiceResult<SectorDto> {
        let new_name = new_name.into();
        let result = self.store.transaction(|store| -> ServiceResult<SectorDto> {
            if !store.sector_exists(id)? {
                return Err(ServiceError::NotFound {
                    entity: EntityKind::Sector,
                    id,
                });
            }
            let sector = Sector {
                id: Some(id),
                name: new_name,
            };
            sector.validate()?;
            Ok(sector_to_dto(store.save_sector(&sector)?))
        });
        match &result {
            Ok(_) => info!("event=sector_update module={MODULE} status=ok sector_id={id}"),
            Err(err) => log_failure("sector_update", MODULE, err),
        }
        result
    }

    /// Deletes a sector together with all of its classes.
    ///
    /// Children are enumerated and deleted before the sector row. Any
    /// failure rolls the whole cascade back.
    pub fn delete_sector(&self, id: SectorId) -> ServiceResult<SectorDeletion> {
        let result = self.store.transaction(|store| -> ServiceResult<SectorDeletion> {
            if !store.sector_exists(id)? {
                return Err(ServiceError::NotFound {
                    entity: EntityKind::Sector,
                    id,
                });
            }

            let mut removed_class_ids = Vec::new();
            if store.class_exists_with_sector(id)? {
                for class in store.find_classes_by_sector(id)? {
                    let class_id = class.id.ok_or_else(|| {
                        RepoError::InvalidData(format!(
                            "class without id listed under sector {id}"
                        ))
                    })?;
                    store.delete_class(class_id)?;
                    removed_class_ids.push(class_id);
                }
            }
            store.delete_sector(id)?;

            Ok(SectorDeletion {
                sector_id: id,
                removed_class_ids,
            })
        });
        match &result {
            Ok(deletion) => info!(
                "event=sector_delete module={MODULE} status=ok sector_id={id} removed_classes={}",
                deletion.removed_class_ids.len()
            ),
            Err(err) => log_failure("sector_delete", MODULE, err),
        }
        result
    }

    /// Loads one sector with the classes currently referencing it.
    pub fn get_sector_with_classes(&self, id: SectorId) -> ServiceResult<SectorWithClassesDto> {
        self.store.transaction(|store| -> ServiceResult<SectorWithClassesDto> {
            let sector = store.find_sector(id)?.ok_or(ServiceError::NotFound {
                entity: EntityKind::Sector,
                id,
            })?;
            let classes = store.find_classes_by_sector(id)?;
            Ok(SectorWithClassesDto {
                sector: sector_to_dto(sector),
                classes: classes.into_iter().map(class_to_dto).collect(),
            })
        })
    }

    fn try_create(&self, sector: Sector) -> ServiceResult<SectorDto> {
        sector.validate()?;
        Ok(sector_to_dto(self.store.save_sector(&sector)?))
    }
}
