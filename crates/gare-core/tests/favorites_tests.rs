mod common;

use common::{create_test_store, open_store};
use gare_core::{
    FavoriteStore, FavoriteStoreBuilder, SqliteStorage, Storage, Suggestion, WriteStatus,
    STOP_AREA, STOP_POINT,
};
use tempfile::TempDir;

#[test]
fn test_favorites_survive_reopen() {
    let (temp_dir, store) = create_test_store();
    store.add("A", "Gare X", STOP_AREA);
    store.add("B", "Gare Y", STOP_POINT);
    drop(store);

    let reopened = open_store(&temp_dir);
    let all = reopened.get_all();
    let tuples: Vec<(&str, &str, &str)> = all
        .iter()
        .map(|r| (r.id.as_str(), r.name.as_str(), r.kind.as_str()))
        .collect();
    assert_eq!(
        tuples,
        vec![("A", "Gare X", "stop_area"), ("B", "Gare Y", "stop_point")]
    );
}

#[test]
fn test_add_twice_keeps_one_record() {
    let (_temp_dir, store) = create_test_store();
    assert_eq!(store.add("A", "Gare X", STOP_AREA), WriteStatus::Written);
    assert_eq!(store.add("A", "Gare X", STOP_AREA), WriteStatus::Unchanged);
    assert_eq!(store.get_all().len(), 1);
}

#[test]
fn test_remove_absent_and_present() {
    let (_temp_dir, store) = create_test_store();
    store.add("A", "Gare X", STOP_AREA);

    for id in ["A", "never-added"] {
        store.remove(id);
        assert!(!store.contains(id));
    }
    assert!(store.get_all().is_empty());
}

#[test]
fn test_corrupted_database_slot_reads_empty() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    let storage = SqliteStorage::open(&db_path).expect("Failed to open storage");
    storage.set("favorites", "[{\"id\": 12").expect("Failed to write slot");
    drop(storage);

    let store = open_store(&temp_dir);
    assert!(store.get_all().is_empty());
    assert!(store.rank_favorites_first(Vec::<Suggestion>::new()).is_empty());
}

#[test]
fn test_reads_slot_written_by_web_app() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    let raw = r#"[{"id":"stop_area:SNCF:87191007","name":"Thionville","type":"stop_area","addedAt":"2024-03-02T10:15:30.000Z"},{"id":"stop_point:SNCF:87192039:Train","name":"Metz","type":"stop_point","addedAt":"2024-03-03T11:00:00.000Z"}]"#;
    let storage = SqliteStorage::open(&db_path).expect("Failed to open storage");
    storage.set("favorites", raw).expect("Failed to write slot");

    let store = FavoriteStore::new(storage);
    let all = store.get_all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Thionville");
    assert_eq!(all[1].kind, STOP_POINT);
    assert_eq!(all[0].added_at.to_string(), "2024-03-02T10:15:30Z");
}

#[test]
fn test_custom_key_from_builder() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    let work = FavoriteStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .with_key(Some("favorites.work"))
        .build()
        .expect("Failed to open favorite store");
    work.add("A", "Gare X", STOP_AREA);

    let default = open_store(&temp_dir);
    assert!(!default.contains("A"));
    assert!(work.contains("A"));
}

#[test]
fn test_ranking_against_persisted_favorites() {
    let (_temp_dir, store) = create_test_store();
    store.add("stop_area:SNCF:87191007", "Thionville", STOP_AREA);

    let candidates = vec![
        Suggestion {
            id: "stop_area:SNCF:87192000".to_string(),
            name: "Metz".to_string(),
            kind: STOP_AREA.to_string(),
        },
        Suggestion {
            id: "stop_area:SNCF:87191007".to_string(),
            name: "Thionville (Thionville)".to_string(),
            kind: STOP_AREA.to_string(),
        },
    ];

    let ranked = store.rank_favorites_first(candidates);
    assert_eq!(ranked[0].id, "stop_area:SNCF:87191007");
    assert_eq!(ranked[1].name, "Metz");
}

#[test]
fn test_export_is_the_persisted_layout() {
    let (_temp_dir, store) = create_test_store();
    store.add("A", "Gare X", STOP_AREA);

    let exported: serde_json::Value =
        serde_json::from_str(&store.export_json().expect("Failed to export")).unwrap();
    let keys: Vec<&str> = exported[0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys.len(), 4);
    for key in ["id", "name", "type", "addedAt"] {
        assert!(keys.contains(&key), "missing {key}");
    }
}
