//! Integration tests wiring configuration into the highlighter.

use super::support::{marked_set, two_branch_tree};
use sidemark::config::{ConfigLoader, SidemarkConfig};
use sidemark::highlight::SidebarHighlighter;
use sidemark::notice::MemoryNotices;
use sidemark::selection::Selection;
use sidemark::tree::node::Marker;
use std::fs;
use tempfile::TempDir;

/// A config file's highlight section drives the reconciliation behavior
/// end to end.
#[test]
fn test_config_file_disables_collapse() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[highlight]\ncollapse_on_deactivate = false\n").unwrap();

    let config = ConfigLoader::with_file(&path).load().unwrap();
    let highlighter = SidebarHighlighter::new(config.highlight, MemoryNotices::new());

    let mut fixture = two_branch_tree();
    highlighter
        .update_highlight(&mut fixture.tree, &Selection::file("a/b/c.md"))
        .unwrap();
    highlighter
        .update_highlight(&mut fixture.tree, &Selection::file("a/d/e.md"))
        .unwrap();

    assert!(marked_set(&fixture.tree, Marker::Collapsed).is_empty());
}

/// Defaults collapse deactivated branches, matching the reference behavior.
#[test]
fn test_default_config_collapses() {
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigLoader::with_file(temp_dir.path().join("absent.toml"))
        .load()
        .unwrap();
    let highlighter = SidebarHighlighter::new(config.highlight, MemoryNotices::new());

    let mut fixture = two_branch_tree();
    highlighter
        .update_highlight(&mut fixture.tree, &Selection::file("a/b/c.md"))
        .unwrap();
    highlighter
        .update_highlight(&mut fixture.tree, &Selection::file("a/d/e.md"))
        .unwrap();

    assert!(fixture.tree.has_marker(fixture.ab.container, Marker::Collapsed));
}

/// The serialized default config parses back to the same settings.
#[test]
fn test_default_config_round_trips_through_toml() {
    let rendered = toml::to_string_pretty(&SidemarkConfig::default()).unwrap();
    let parsed: SidemarkConfig = toml::from_str(&rendered).unwrap();
    assert!(parsed.highlight.collapse_on_deactivate);
    assert_eq!(parsed.logging.level, "info");
}
