use villa_dashboard::dashboard::config::{DashboardLayout, StoredLayout, WidgetSize, WidgetType};
use villa_dashboard::dashboard::layout::normalize_layout;
use villa_dashboard::dashboard::store::{LayoutStore, LAYOUT_STORAGE_KEY};
use villa_dashboard::dashboard::{JsonFileStore, KeyValueStore, MemoryStore, WidgetCatalog};

#[test]
fn dashboard_defaults_present() {
    let layout = DashboardLayout::default();
    assert_eq!(layout.version, 1);
    let ids: Vec<&str> = layout.widgets.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "default-quick-stats",
            "default-tasks-list",
            "default-expenses-summary",
            "default-calendar-events"
        ]
    );
}

#[test]
fn every_default_widget_is_catalogued() {
    let catalog = WidgetCatalog::with_defaults();
    for widget in DashboardLayout::default().widgets {
        let def = catalog.get(widget.widget_type).expect("catalog entry");
        assert!(def.allows(widget.size));
    }
}

#[test]
fn unknown_widgets_removed_during_normalization() {
    let stored = StoredLayout::parse(
        r#"{"version":1,"widgets":[
            {"id":"a","type":"does_not_exist","size":"small","position":0},
            {"id":"b","type":"staff-status","size":"large","position":1}
        ]}"#,
    )
    .unwrap();
    let (layout, warnings) = normalize_layout(stored, &WidgetCatalog::with_defaults());
    assert_eq!(layout.len(), 1);
    assert_eq!(layout.widgets[0].widget_type, WidgetType::StaffStatus);
    assert_eq!(layout.widgets[0].size, WidgetSize::Large);
    assert_eq!(layout.widgets[0].position, 0);
    assert!(!warnings.is_empty());
}

#[test]
fn legacy_unversioned_document_loads_and_gains_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    let mut storage = JsonFileStore::new(&path);
    storage
        .set(
            LAYOUT_STORAGE_KEY,
            r#"{"widgets":[{"id":"w-1","type":"messages","size":"small","position":0}]}"#,
        )
        .unwrap();

    let mut store = LayoutStore::new(storage, WidgetCatalog::with_defaults());
    let layout = store.load();
    assert_eq!(layout.len(), 1);
    assert_eq!(layout.widgets[0].id, "w-1");

    store.save(&layout);
    let raw = JsonFileStore::new(&path).get(LAYOUT_STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["version"], 1);
}

#[test]
fn unreadable_storage_file_loads_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "\u{0}\u{1} garbage").unwrap();
    let store = LayoutStore::new(JsonFileStore::new(&path), WidgetCatalog::with_defaults());
    assert_eq!(store.load(), DashboardLayout::default());
}

#[test]
fn memory_store_persists_exact_document_shape() {
    let mut store = LayoutStore::new(MemoryStore::new(), WidgetCatalog::with_defaults());
    store.save(&DashboardLayout::default());
    let raw = store.storage().get(LAYOUT_STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &value["widgets"][0];
    assert_eq!(first["id"], "default-quick-stats");
    assert_eq!(first["type"], "quick-stats");
    assert_eq!(first["size"], "small");
    assert_eq!(first["position"], 0);
}
