//! Class repository contract and SQLite implementation.
//!
//! # Invariants
//! - Writes never check that `sector_id` exists; callers do that inside a
//!   transaction. The schema foreign key is the last line of defence and
//!   surfaces as `RepoError::Db`.
//! - Listings are ordered by id.

use crate::model::class::{Class, ClassId};
use crate::model::sector::SectorId;
use crate::model::EntityKind;
use crate::repo::store::{RepoError, RepoResult, SqliteCatalogStore};
use rusqlite::{params, OptionalExtension, Row};

const CLASS_SELECT_SQL: &str = "SELECT
    id,
    class_name,
    description,
    sector_id
FROM classes";

/// Data access for class rows.
pub trait ClassRepository {
    fn find_class(&self, id: ClassId) -> RepoResult<Option<Class>>;
    fn find_all_classes(&self) -> RepoResult<Vec<Class>>;
    fn find_classes_by_sector(&self, sector_id: SectorId) -> RepoResult<Vec<Class>>;
    fn save_class(&self, class: &Class) -> RepoResult<Class>;
    fn delete_class(&self, id: ClassId) -> RepoResult<()>;
    /// Tells whether any class still references `sector_id`.
    fn class_exists_with_sector(&self, sector_id: SectorId) -> RepoResult<bool>;
}

impl ClassRepository for SqliteCatalogStore<'_> {
    fn find_class(&self, id: ClassId) -> RepoResult<Option<Class>> {
        self.conn()
            .query_row(
                &format!("{CLASS_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_class_row,
            )
            .optional()?
            .map(checked)
            .transpose()
    }

    fn find_all_classes(&self) -> RepoResult<Vec<Class>> {
        self.list_classes(&format!("{CLASS_SELECT_SQL} ORDER BY id ASC;"), None)
    }

    fn find_classes_by_sector(&self, sector_id: SectorId) -> RepoResult<Vec<Class>> {
        self.list_classes(
            &format!("{CLASS_SELECT_SQL} WHERE sector_id = ?1 ORDER BY id ASC;"),
            Some(sector_id),
        )
    }

    fn save_class(&self, class: &Class) -> RepoResult<Class> {
        class.validate()?;

        let id = match class.id {
            None => {
                self.conn().execute(
                    "INSERT INTO classes (class_name, description, sector_id)
                     VALUES (?1, ?2, ?3);",
                    params![
                        class.class_name.as_str(),
                        class.description.as_deref(),
                        class.sector_id,
                    ],
                )?;
                self.conn().last_insert_rowid()
            }
            Some(id) => {
                let changed = self.conn().execute(
                    "UPDATE classes
                     SET
                        class_name = ?2,
                        description = ?3,
                        sector_id = ?4
                     WHERE id = ?1;",
                    params![
                        id,
                        class.class_name.as_str(),
                        class.description.as_deref(),
                        class.sector_id,
                    ],
                )?;
                if changed == 0 {
                    return Err(RepoError::NotFound {
                        entity: EntityKind::Class,
                        id,
                    });
                }
                id
            }
        };

        Ok(Class {
            id: Some(id),
            ..class.clone()
        })
    }

    fn delete_class(&self, id: ClassId) -> RepoResult<()> {
        let changed = self
            .conn()
            .execute("DELETE FROM classes WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: EntityKind::Class,
                id,
            });
        }
        Ok(())
    }

    fn class_exists_with_sector(&self, sector_id: SectorId) -> RepoResult<bool> {
        let exists: i64 = self.conn().query_row(
            "SELECT EXISTS(SELECT 1 FROM classes WHERE sector_id = ?1);",
            [sector_id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}

impl SqliteCatalogStore<'_> {
    fn list_classes(&self, sql: &str, sector_id: Option<SectorId>) -> RepoResult<Vec<Class>> {
        let mut stmt = self.conn().prepare(sql)?;
        let mut rows = match sector_id {
            Some(sector_id) => stmt.query([sector_id])?,
            None => stmt.query([])?,
        };

        let mut classes = Vec::new();
        while let Some(row) = rows.next()? {
            classes.push(checked(parse_class_row(row)?)?);
        }
        Ok(classes)
    }
}

fn parse_class_row(row: &Row<'_>) -> rusqlite::Result<Class> {
    Ok(Class {
        id: Some(row.get("id")?),
        class_name: row.get("class_name")?,
        description: row.get("description")?,
        sector_id: row.get("sector_id")?,
    })
}

fn checked(class: Class) -> RepoResult<Class> {
    class.validate().map_err(|err| {
        RepoError::InvalidData(format!("class {:?} in classes table: {err}", class.id))
    })?;
    Ok(class)
}
