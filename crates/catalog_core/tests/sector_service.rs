use catalog_core::db::open_db_in_memory;
use catalog_core::{ClassService, EntityKind, SectorService, ServiceError, SqliteCatalogStore};

#[test]
fn create_then_get_returns_equal_sector_with_fresh_id() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCatalogStore::try_new(&conn).unwrap();
    let service = SectorService::new(store);

    let first = service.create_sector("Informatique").unwrap();
    let second = service.create_sector("Informatique").unwrap();

    assert_ne!(first.id, second.id, "names are not unique, ids are");
    assert_eq!(service.get_sector_by_id(first.id.unwrap()).unwrap(), first);
    assert_eq!(service.get_all_sectors().unwrap(), vec![first, second]);
}

#[test]
fn blank_name_is_rejected_and_nothing_is_persisted() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCatalogStore::try_new(&conn).unwrap();
    let service = SectorService::new(store);
    service.create_sector("Existing").unwrap();
    let before = service.get_all_sectors().unwrap().len();

    for name in ["", "   ", "\n\t"] {
        let err = service.create_sector(name).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation {
                entity: EntityKind::Sector,
                field: "name"
            }
        ));
    }

    assert_eq!(service.get_all_sectors().unwrap().len(), before);
}

#[test]
fn update_replaces_name_and_keeps_id() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCatalogStore::try_new(&conn).unwrap();
    let service = SectorService::new(store);

    let created = service.create_sector("Info").unwrap();
    let id = created.id.unwrap();
    let updated = service.update_sector(id, "Informatique").unwrap();

    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.name, "Informatique");
    assert_eq!(service.get_sector_by_id(id).unwrap(), updated);
}

#[test]
fn update_with_blank_name_keeps_stored_name() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCatalogStore::try_new(&conn).unwrap();
    let service = SectorService::new(store);

    let created = service.create_sector("Info").unwrap();
    let err = service.update_sector(created.id.unwrap(), " ").unwrap_err();

    assert_eq!(err.kind(), "validation");
    assert_eq!(
        service.get_sector_by_id(created.id.unwrap()).unwrap().name,
        "Info"
    );
}

#[test]
fn unknown_id_is_not_found_for_every_operation() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCatalogStore::try_new(&conn).unwrap();
    let service = SectorService::new(store);

    let is_missing_sector = |err: ServiceError| {
        matches!(
            err,
            ServiceError::NotFound {
                entity: EntityKind::Sector,
                id: 404
            }
        )
    };

    assert!(is_missing_sector(service.get_sector_by_id(404).unwrap_err()));
    assert!(is_missing_sector(
        service.update_sector(404, "name").unwrap_err()
    ));
    assert!(is_missing_sector(service.update_sector(404, "").unwrap_err()));
    assert!(is_missing_sector(service.delete_sector(404).unwrap_err()));
    assert!(is_missing_sector(
        service.get_sector_with_classes(404).unwrap_err()
    ));
}

#[test]
fn sector_with_classes_lists_only_its_own_classes() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCatalogStore::try_new(&conn).unwrap();
    let sectors = SectorService::new(store);
    let classes = ClassService::new(store);

    let info = sectors.create_sector("Informatique").unwrap().id.unwrap();
    let math = sectors.create_sector("Mathematiques").unwrap().id.unwrap();
    let a = classes.create_class("Classe A", None, info).unwrap();
    classes.create_class("Algebre", None, math).unwrap();

    let view = sectors.get_sector_with_classes(info).unwrap();
    assert_eq!(view.sector.name, "Informatique");
    assert_eq!(view.classes, vec![a]);
}
