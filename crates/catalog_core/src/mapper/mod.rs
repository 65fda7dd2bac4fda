//! Record ⇄ exchange value conversion.
//!
//! # Invariants
//! - Conversions are total and copy every field verbatim.
//! - No business rule is checked here; blank names pass through untouched.

use crate::dto::{ClassDto, SectorDto};
use crate::model::class::Class;
use crate::model::sector::Sector;

pub fn sector_to_dto(sector: Sector) -> SectorDto {
    SectorDto {
        id: sector.id,
        name: sector.name,
    }
}

pub fn sector_from_dto(dto: SectorDto) -> Sector {
    Sector {
        id: dto.id,
        name: dto.name,
    }
}

pub fn class_to_dto(class: Class) -> ClassDto {
    ClassDto {
        id: class.id,
        class_name: class.class_name,
        description: class.description,
        sector_id: class.sector_id,
    }
}

pub fn class_from_dto(dto: ClassDto) -> Class {
    Class {
        id: dto.id,
        class_name: dto.class_name,
        description: dto.description,
        sector_id: dto.sector_id,
    }
}
