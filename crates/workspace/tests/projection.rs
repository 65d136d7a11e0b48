//! End-to-end projection flows through the workspace shell.

use fmsync_core::{AttributeSink, MetadataMap};
use fmsync_workspace::{MemoryStore, Plugin, SETTINGS_KEY, SettingsStore, ViewKind, Workspace};
use once_cell::sync::Lazy;
use serde_json::json;

/// Parses a frontmatter block the way metadata engines do: YAML in, JSON
/// value map out.
fn frontmatter(yaml: &str) -> MetadataMap {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml).expect("fixture YAML parses");
    serde_json::to_value(&value)
        .expect("fixture converts to JSON")
        .as_object()
        .expect("fixture is a mapping")
        .clone()
}

static TRIP: Lazy<MetadataMap> = Lazy::new(|| {
    frontmatter("tags:\n  - travel\n  - asia\nstart: 2025-10-27\nend: null\ninsurance: true\n")
});

fn loaded(workspace: &mut Workspace) -> (Plugin, MemoryStore) {
    let store = MemoryStore::new();
    let plugin = Plugin::load(workspace, &store).expect("plugin loads");
    (plugin, store)
}

#[test]
fn startup_sweep_covers_documents_opened_before_load() {
    let mut workspace = Workspace::new();
    let pane = workspace.create_view(ViewKind::Markdown);
    workspace.open_document(pane, "trip.md");
    workspace.set_metadata("trip.md", TRIP.clone());

    let (mut plugin, _store) = loaded(&mut workspace);
    workspace.notify_layout_ready();
    plugin.pump(&mut workspace);

    let element = workspace.element_of(pane).unwrap();
    assert_eq!(workspace.element(element).unwrap().attribute("data-start"), Some("2025-10-27"));
}

#[test]
fn loading_after_layout_ready_sweeps_immediately() {
    let mut workspace = Workspace::new();
    let pane = workspace.create_view(ViewKind::Markdown);
    workspace.open_document(pane, "trip.md");
    workspace.set_metadata("trip.md", TRIP.clone());
    workspace.notify_layout_ready();

    let (_plugin, _store) = loaded(&mut workspace);

    let element = workspace.element(workspace.element_of(pane).unwrap()).unwrap();
    assert_eq!(element.attribute("data-start"), Some("2025-10-27"));
}

#[test]
fn projected_values_match_frontmatter_types() {
    let mut workspace = Workspace::new();
    let (mut plugin, _store) = loaded(&mut workspace);
    let pane = workspace.create_view(ViewKind::Markdown);
    workspace.open_document(pane, "trip.md");
    workspace.set_metadata("trip.md", TRIP.clone());
    plugin.pump(&mut workspace);

    let element = workspace.element(workspace.element_of(pane).unwrap()).unwrap();
    assert_eq!(element.attribute("data-tags"), Some(r#"["travel","asia"]"#));
    assert_eq!(element.attribute("data-start"), Some("2025-10-27"));
    assert_eq!(element.attribute("data-end"), Some("null"));
    assert_eq!(element.attribute("data-insurance"), Some("true"));
    insta::assert_snapshot!(
        workspace.container_tag(pane).unwrap(),
        @r#"<div data-end="null" data-insurance="true" data-start="2025-10-27" data-tags="[&quot;travel&quot;,&quot;asia&quot;]">"#
    );
}

#[test]
fn metadata_edit_refreshes_every_pane_showing_the_document() {
    let mut workspace = Workspace::new();
    let (mut plugin, _store) = loaded(&mut workspace);
    let pane = workspace.create_view(ViewKind::Markdown);
    workspace.open_document(pane, "trip.md");
    workspace.set_metadata("trip.md", TRIP.clone());
    let split = workspace.split_view(pane).expect("pane shows a document");
    plugin.pump(&mut workspace);

    workspace.set_metadata("trip.md", frontmatter("start: 2026-01-05\n"));
    plugin.pump(&mut workspace);

    for view in [pane, split] {
        let element = workspace.element(workspace.element_of(view).unwrap()).unwrap();
        assert_eq!(element.attribute("data-start"), Some("2026-01-05"));
        assert_eq!(element.attribute("data-tags"), None, "stale key on {view:?}");
    }
}

#[test]
fn metadata_edits_leave_panes_showing_other_documents_alone() {
    let mut workspace = Workspace::new();
    let (mut plugin, _store) = loaded(&mut workspace);
    let trip_pane = workspace.create_view(ViewKind::Markdown);
    let other_pane = workspace.create_view(ViewKind::Markdown);
    workspace.open_document(trip_pane, "trip.md");
    workspace.open_document(other_pane, "other.md");
    workspace.set_metadata("other.md", frontmatter("title: Other\n"));
    plugin.pump(&mut workspace);
    let before = workspace.container_tag(other_pane).unwrap();

    workspace.set_metadata("trip.md", TRIP.clone());
    plugin.pump(&mut workspace);

    assert_eq!(workspace.container_tag(other_pane).unwrap(), before);
}

#[test]
fn removing_frontmatter_strips_the_projection() {
    let mut workspace = Workspace::new();
    let (mut plugin, _store) = loaded(&mut workspace);
    let pane = workspace.create_view(ViewKind::Markdown);
    workspace.open_document(pane, "trip.md");
    workspace.set_metadata("trip.md", TRIP.clone());
    plugin.pump(&mut workspace);

    workspace.clear_metadata("trip.md");
    plugin.pump(&mut workspace);

    let element = workspace.element(workspace.element_of(pane).unwrap()).unwrap();
    assert!(element.data_attribute_names().is_empty());
}

#[test]
fn removed_keys_never_linger() {
    let mut workspace = Workspace::new();
    let (mut plugin, _store) = loaded(&mut workspace);
    let pane = workspace.create_view(ViewKind::Markdown);
    workspace.open_document(pane, "note.md");
    workspace.set_metadata("note.md", frontmatter("audience: internal\nstart: 2025-10-27\n"));
    plugin.pump(&mut workspace);

    workspace.set_metadata("note.md", frontmatter("start: 2025-10-27\n"));
    plugin.pump(&mut workspace);

    let element = workspace.element(workspace.element_of(pane).unwrap()).unwrap();
    assert_eq!(element.attribute("data-audience"), None);
    assert_eq!(element.attribute("data-start"), Some("2025-10-27"));
}

#[test]
fn reserved_attributes_survive_projection_and_teardown() {
    let mut workspace = Workspace::new();
    let (mut plugin, mut store) = loaded(&mut workspace);
    let pane = workspace.create_view(ViewKind::Markdown);
    let element = workspace.element_of(pane).unwrap();
    workspace.set_attribute(element, "data-type", "markdown");
    workspace.set_attribute(element, "data-mode", "preview");
    workspace.open_document(pane, "note.md");
    workspace.set_metadata("note.md", frontmatter("type: book\nmode: dark\ntitle: T\n"));
    plugin.pump(&mut workspace);

    let container = workspace.element(element).unwrap();
    assert_eq!(container.attribute("data-type"), Some("markdown"));
    assert_eq!(container.attribute("data-mode"), Some("preview"));
    assert_eq!(container.attribute("data-title"), Some("T"));

    plugin.unload(&mut workspace, &mut store).expect("plugin unloads");

    let container = workspace.element(element).unwrap();
    assert_eq!(container.attribute("data-type"), Some("markdown"));
    assert_eq!(container.attribute("data-mode"), Some("preview"));
    assert_eq!(container.attribute("data-title"), None);
}

#[test]
fn engine_position_key_is_not_projected() {
    let mut workspace = Workspace::new();
    let (mut plugin, _store) = loaded(&mut workspace);
    let pane = workspace.create_view(ViewKind::Markdown);
    workspace.open_document(pane, "note.md");
    let mut metadata = frontmatter("title: T\n");
    metadata.insert("position".to_owned(), json!({"start": {"line": 0, "col": 0}}));
    workspace.set_metadata("note.md", metadata);
    plugin.pump(&mut workspace);

    let element = workspace.element(workspace.element_of(pane).unwrap()).unwrap();
    assert_eq!(element.attribute("data-position"), None);
    assert_eq!(element.attribute("data-title"), Some("T"));
}

#[test]
fn duplicate_sanitized_keys_collapse_to_the_last_value() {
    let mut workspace = Workspace::new();
    let (mut plugin, _store) = loaded(&mut workspace);
    let pane = workspace.create_view(ViewKind::Markdown);
    workspace.open_document(pane, "note.md");
    workspace.set_metadata("note.md", frontmatter("\"a b\": first\na-b: second\n"));
    plugin.pump(&mut workspace);

    let element = workspace.element(workspace.element_of(pane).unwrap()).unwrap();
    assert_eq!(element.attribute("data-a-b"), Some("second"));
    assert_eq!(element.data_attribute_names(), vec!["data-a-b"]);
}

#[test]
fn emptied_pane_keeps_attributes_until_it_renders_again() {
    let mut workspace = Workspace::new();
    let (mut plugin, _store) = loaded(&mut workspace);
    let pane = workspace.create_view(ViewKind::Markdown);
    workspace.open_document(pane, "trip.md");
    workspace.set_metadata("trip.md", TRIP.clone());
    plugin.pump(&mut workspace);

    workspace.close_document(pane);
    plugin.pump(&mut workspace);
    let element = workspace.element(workspace.element_of(pane).unwrap()).unwrap();
    assert_eq!(element.attribute("data-start"), Some("2025-10-27"));

    workspace.open_document(pane, "other.md");
    workspace.set_metadata("other.md", frontmatter("title: Other\n"));
    plugin.pump(&mut workspace);
    let element = workspace.element(workspace.element_of(pane).unwrap()).unwrap();
    assert_eq!(element.attribute("data-start"), None);
    assert_eq!(element.attribute("data-title"), Some("Other"));
}

#[test]
fn unload_strips_containers_saves_settings_and_goes_quiet() {
    let mut workspace = Workspace::new();
    let (mut plugin, mut store) = loaded(&mut workspace);
    let pane = workspace.create_view(ViewKind::Markdown);
    workspace.open_document(pane, "trip.md");
    workspace.set_metadata("trip.md", TRIP.clone());
    plugin.pump(&mut workspace);
    let element = workspace.element_of(pane).unwrap();
    assert!(!workspace.element(element).unwrap().data_attribute_names().is_empty());

    plugin.unload(&mut workspace, &mut store).expect("plugin unloads");

    assert!(workspace.element(element).unwrap().data_attribute_names().is_empty());
    assert_eq!(store.record(SETTINGS_KEY), Some(&json!({})));

    workspace.set_metadata("trip.md", frontmatter("start: 2030-01-01\n"));
    assert!(workspace.element(element).unwrap().data_attribute_names().is_empty());
}

#[test]
fn malformed_settings_record_does_not_block_load() {
    let mut workspace = Workspace::new();
    let mut store = MemoryStore::new();
    store
        .save(SETTINGS_KEY, json!(["not", "an", "object"]))
        .expect("save succeeds");

    let plugin = Plugin::load(&mut workspace, &store).expect("plugin loads anyway");
    assert_eq!(plugin.settings(), &fmsync_workspace::Settings::default());
}
