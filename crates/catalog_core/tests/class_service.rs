use catalog_core::db::open_db_in_memory;
use catalog_core::{ClassService, EntityKind, SectorService, ServiceError, SqliteCatalogStore};
use rusqlite::Connection;

fn class_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM classes;", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn create_trims_name_and_keeps_description() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCatalogStore::try_new(&conn).unwrap();
    let sector_id = SectorService::new(store)
        .create_sector("Informatique")
        .unwrap()
        .id
        .unwrap();
    let service = ClassService::new(store);

    let created = service
        .create_class("  Classe A  ", Some("intro".to_string()), sector_id)
        .unwrap();

    assert!(created.id.is_some());
    assert_eq!(created.class_name, "Classe A");
    assert_eq!(created.description.as_deref(), Some("intro"));
    assert_eq!(created.sector_id, sector_id);
    assert_eq!(
        service.get_class_by_id(created.id.unwrap()).unwrap(),
        created
    );
}

#[test]
fn create_with_missing_sector_is_reference_error_and_writes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCatalogStore::try_new(&conn).unwrap();
    let service = ClassService::new(store);

    let err = service
        .create_class("Classe B", Some(String::new()), 99)
        .unwrap_err();

    assert!(matches!(err, ServiceError::Reference { sector_id: 99 }));
    assert_eq!(class_count(&conn), 0);
}

#[test]
fn blank_name_is_reported_before_sector_lookup() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCatalogStore::try_new(&conn).unwrap();
    let service = ClassService::new(store);

    let err = service.create_class("   ", None, 99).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation {
            entity: EntityKind::Class,
            field: "class_name"
        }
    ));
    assert_eq!(class_count(&conn), 0);
}

#[test]
fn classes_by_sector_is_empty_for_unknown_sector() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCatalogStore::try_new(&conn).unwrap();
    let service = ClassService::new(store);

    assert!(service.get_classes_by_sector(12345).unwrap().is_empty());
    assert!(service.get_all_classes().unwrap().is_empty());
}

#[test]
fn update_in_same_sector_replaces_name_and_description() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCatalogStore::try_new(&conn).unwrap();
    let sector_id = SectorService::new(store)
        .create_sector("Informatique")
        .unwrap()
        .id
        .unwrap();
    let service = ClassService::new(store);
    let created = service
        .create_class("Classe A", Some("intro".to_string()), sector_id)
        .unwrap();
    let id = created.id.unwrap();

    let updated = service
        .update_class(
            id,
            " New Name ",
            Some("desc".to_string()),
            Some(sector_id),
        )
        .unwrap();
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.class_name, "New Name");
    assert_eq!(updated.description.as_deref(), Some("desc"));
    assert_eq!(updated.sector_id, sector_id);

    let cleared = service.update_class(id, "New Name", None, None).unwrap();
    assert_eq!(cleared.description, None);
    assert_eq!(cleared.sector_id, sector_id);
}

#[test]
fn update_moves_class_to_another_existing_sector() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCatalogStore::try_new(&conn).unwrap();
    let sectors = SectorService::new(store);
    let from = sectors.create_sector("From").unwrap().id.unwrap();
    let to = sectors.create_sector("To").unwrap().id.unwrap();
    let service = ClassService::new(store);
    let id = service.create_class("Mobile", None, from).unwrap().id.unwrap();

    let moved = service.update_class(id, "Mobile", None, Some(to)).unwrap();

    assert_eq!(moved.sector_id, to);
    assert!(service.get_classes_by_sector(from).unwrap().is_empty());
    assert_eq!(service.get_classes_by_sector(to).unwrap(), vec![moved]);
}

#[test]
fn update_to_missing_sector_is_reference_error_and_keeps_row() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCatalogStore::try_new(&conn).unwrap();
    let sector_id = SectorService::new(store)
        .create_sector("Informatique")
        .unwrap()
        .id
        .unwrap();
    let service = ClassService::new(store);
    let created = service.create_class("Classe A", None, sector_id).unwrap();

    let err = service
        .update_class(created.id.unwrap(), "Renamed", None, Some(999))
        .unwrap_err();

    assert!(matches!(err, ServiceError::Reference { sector_id: 999 }));
    assert_eq!(
        service.get_class_by_id(created.id.unwrap()).unwrap(),
        created
    );
}

#[test]
fn unknown_class_id_is_not_found_for_every_operation() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCatalogStore::try_new(&conn).unwrap();
    let service = ClassService::new(store);

    let is_missing_class = |err: ServiceError| {
        matches!(
            err,
            ServiceError::NotFound {
                entity: EntityKind::Class,
                id: 31
            }
        )
    };

    assert!(is_missing_class(service.get_class_by_id(31).unwrap_err()));
    assert!(is_missing_class(
        service.update_class(31, "x", None, Some(1)).unwrap_err()
    ));
    assert!(is_missing_class(
        service.update_class(31, "", None, None).unwrap_err()
    ));
    assert!(is_missing_class(service.delete_class(31).unwrap_err()));
}

#[test]
fn delete_removes_only_the_target_class() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCatalogStore::try_new(&conn).unwrap();
    let sector_id = SectorService::new(store)
        .create_sector("Informatique")
        .unwrap()
        .id
        .unwrap();
    let service = ClassService::new(store);
    let a = service.create_class("Classe A", None, sector_id).unwrap();
    let b = service.create_class("Classe B", None, sector_id).unwrap();

    service.delete_class(a.id.unwrap()).unwrap();

    assert!(matches!(
        service.get_class_by_id(a.id.unwrap()).unwrap_err(),
        ServiceError::NotFound { .. }
    ));
    assert_eq!(service.get_all_classes().unwrap(), vec![b]);
}
