//! Class use-case service.
//!
//! # Responsibility
//! - Own the class lifecycle.
//! - Keep every stored class pointing at an existing sector.
//!
//! # Invariants
//! - The sector reference is checked inside the same transaction as the
//!   write that depends on it, and before that write.
//! - Class names are stored trimmed and are never blank.

use crate::dto::ClassDto;
use crate::mapper::class_to_dto;
use crate::model::class::{Class, ClassId};
use crate::model::sector::SectorId;
use crate::model::{require_non_blank, EntityKind};
use crate::repo::store::CatalogStore;
use crate::service::error::{log_failure, ServiceError, ServiceResult};
use log::info;

const MODULE: &str = "class_service";

/// Class service facade over a catalog store.
pub struct ClassService<S: CatalogStore> {
    store: S,
}

impl<S: CatalogStore> ClassService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn get_class_by_id(&self, id: ClassId) -> ServiceResult<ClassDto> {
        self.store
            .find_class(id)?
            .map(class_to_dto)
            .ok_or(ServiceError::NotFound {
                entity: EntityKind::Class,
                id,
            })
    }

    pub fn get_all_classes(&self) -> ServiceResult<Vec<ClassDto>> {
        Ok(self
            .store
            .find_all_classes()?
            .into_iter()
            .map(class_to_dto)
            .collect())
    }

    /// Lists classes of one sector. An unknown sector yields an empty list.
    pub fn get_classes_by_sector(&self, sector_id: SectorId) -> ServiceResult<Vec<ClassDto>> {
        Ok(self
            .store
            .find_classes_by_sector(sector_id)?
            .into_iter()
            .map(class_to_dto)
            .collect())
    }

    /// Creates a class under an existing sector.
    ///
    /// # Errors
    /// - `Validation` when `class_name` is blank.
    /// - `Reference` when `sector_id` has no sector; nothing is written.
    pub fn create_class(
        &self,
        class_name: impl Into<String>,
        description: Option<String>,
        sector_id: SectorId,
    ) -> ServiceResult<ClassDto> {
        let result = normalize_class_name(class_name.into()).and_then(|class_name| {
            let class = Class::new(class_name, description, sector_id);
            self.store.transaction(|store| -> ServiceResult<ClassDto> {
                ensure_sector_exists(store, sector_id)?;
                Ok(class_to_dto(store.save_class(&class)?))
            })
        });
        match &result {
            Ok(class) => info!(
                "event=class_create module={MODULE} status=ok class_id={} sector_id={sector_id}",
                class.id.unwrap_or_default()
            ),
            Err(err) => log_failure("class_create", MODULE, err),
        }
        result
    }

    /// Updates name and description, and optionally moves the class.
    ///
    /// `sector_id: None` keeps the current sector. The target sector is only
    /// looked up when it differs from the current one. An unknown class id
    /// wins over any other error.
    pub fn update_class(
        &self,
        id: ClassId,
        class_name: impl Into<String>,
        description: Option<String>,
        sector_id: Option<SectorId>,
    ) -> ServiceResult<ClassDto> {
        let class_name = class_name.into();
        let result = self.store.transaction(|store| -> ServiceResult<ClassDto> {
            let current = store.find_class(id)?.ok_or(ServiceError::NotFound {
                entity: EntityKind::Class,
                id,
            })?;
            let class_name = normalize_class_name(class_name)?;

            let target_sector = match sector_id {
                Some(requested) if requested != current.sector_id => {
                    ensure_sector_exists(store, requested)?;
                    requested
                }
                _ => current.sector_id,
            };

            let updated = Class {
                id: current.id,
                class_name,
                description,
                sector_id: target_sector,
            };
            Ok(class_to_dto(store.save_class(&updated)?))
        });
        match &result {
            Ok(class) => info!(
                "event=class_update module={MODULE} status=ok class_id={id} sector_id={}",
                class.sector_id
            ),
            Err(err) => log_failure("class_update", MODULE, err),
        }
        result
    }

    pub fn delete_class(&self, id: ClassId) -> ServiceResult<()> {
        let result = self.store.delete_class(id).map_err(ServiceError::from);
        match &result {
            Ok(()) => info!("event=class_delete module={MODULE} status=ok class_id={id}"),
            Err(err) => log_failure("class_delete", MODULE, err),
        }
        result
    }
}

fn ensure_sector_exists<S: CatalogStore>(store: &S, sector_id: SectorId) -> ServiceResult<()> {
    if !store.sector_exists(sector_id)? {
        return Err(ServiceError::Reference { sector_id });
    }
    Ok(())
}

fn normalize_class_name(value: String) -> ServiceResult<String> {
    require_non_blank(&value, EntityKind::Class, "class_name")?;
    Ok(value.trim().to_string())
}
