//! Sector repository contract and SQLite implementation.
//!
//! # Invariants
//! - `save_sector` inserts when `id` is `None` and updates otherwise; the
//!   returned record always carries the stored id.
//! - Deleting a sector that still has classes fails at the storage level.

use crate::model::sector::{Sector, SectorId};
use crate::model::EntityKind;
use crate::repo::store::{RepoError, RepoResult, SqliteCatalogStore};
use rusqlite::{params, OptionalExtension, Row};

const SECTOR_SELECT_SQL: &str = "SELECT
    id,
    name
FROM sectors";

/// Data access for sector rows.
pub trait SectorRepository {
    fn find_sector(&self, id: SectorId) -> RepoResult<Option<Sector>>;
    /// Lists every sector ordered by id.
    fn find_all_sectors(&self) -> RepoResult<Vec<Sector>>;
    fn save_sector(&self, sector: &Sector) -> RepoResult<Sector>;
    fn delete_sector(&self, id: SectorId) -> RepoResult<()>;
    fn sector_exists(&self, id: SectorId) -> RepoResult<bool>;
}

impl SectorRepository for SqliteCatalogStore<'_> {
    fn find_sector(&self, id: SectorId) -> RepoResult<Option<Sector>> {
        self.conn()
            .query_row(
                &format!("{SECTOR_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_sector_row,
            )
            .optional()?
            .map(checked)
            .transpose()
    }

    fn find_all_sectors(&self) -> RepoResult<Vec<Sector>> {
        let mut stmt = self
            .conn()
            .prepare(&format!("{SECTOR_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut sectors = Vec::new();
        while let Some(row) = rows.next()? {
            sectors.push(checked(parse_sector_row(row)?)?);
        }
        Ok(sectors)
    }

    fn save_sector(&self, sector: &Sector) -> RepoResult<Sector> {
        sector.validate()?;

        let id = match sector.id {
            None => {
                self.conn().execute(
                    "INSERT INTO sectors (name) VALUES (?1);",
                    [sector.name.as_str()],
                )?;
                self.conn().last_insert_rowid()
            }
            Some(id) => {
                let changed = self.conn().execute(
                    "UPDATE sectors SET name = ?2 WHERE id = ?1;",
                    params![id, sector.name.as_str()],
                )?;
                if changed == 0 {
                    return Err(RepoError::NotFound {
                        entity: EntityKind::Sector,
                        id,
                    });
                }
                id
            }
        };

        Ok(Sector {
            id: Some(id),
            name: sector.name.clone(),
        })
    }

    fn delete_sector(&self, id: SectorId) -> RepoResult<()> {
        let changed = self
            .conn()
            .execute("DELETE FROM sectors WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: EntityKind::Sector,
                id,
            });
        }
        Ok(())
    }

    fn sector_exists(&self, id: SectorId) -> RepoResult<bool> {
        let exists: i64 = self.conn().query_row(
            "SELECT EXISTS(SELECT 1 FROM sectors WHERE id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}

fn parse_sector_row(row: &Row<'_>) -> rusqlite::Result<Sector> {
    Ok(Sector {
        id: Some(row.get("id")?),
        name: row.get("name")?,
    })
}

fn checked(sector: Sector) -> RepoResult<Sector> {
    sector.validate().map_err(|err| {
        RepoError::InvalidData(format!("sector {:?} in sectors table: {err}", sector.id))
    })?;
    Ok(sector)
}
