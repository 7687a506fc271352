//! Integration tests for the happy-path highlight flow.

use super::support::{marked_set, two_branch_tree};
use sidemark::highlight::SidebarHighlighter;
use sidemark::selection::Selection;
use sidemark::tree::node::Marker;

/// After an update, the active set is exactly the rendered chain of the
/// active file: its ancestor folder titles plus the file's own title.
#[test]
fn test_active_set_is_exactly_the_chain() {
    let mut fixture = two_branch_tree();
    let highlighter = SidebarHighlighter::with_defaults();

    highlighter
        .update_highlight(&mut fixture.tree, &Selection::file("a/b/c.md"))
        .unwrap();

    let mut active = marked_set(&fixture.tree, Marker::Active);
    let mut expected = vec![fixture.a.title, fixture.ab.title, fixture.c.title];
    active.sort();
    expected.sort();
    assert_eq!(active, expected);

    // the sibling branch is untouched
    assert!(!fixture.tree.has_marker(fixture.ad.title, Marker::Active));
    assert!(!fixture.tree.has_marker(fixture.e.title, Marker::Active));
    assert!(marked_set(&fixture.tree, Marker::Collapsed).is_empty());
}

/// A second update with the same file and unchanged tree is a no-op with
/// respect to visible state.
#[test]
fn test_update_is_idempotent() {
    let mut fixture = two_branch_tree();
    let highlighter = SidebarHighlighter::with_defaults();
    let selection = Selection::file("a/b/c.md");

    highlighter
        .update_highlight(&mut fixture.tree, &selection)
        .unwrap();
    let active_once = marked_set(&fixture.tree, Marker::Active);
    let collapsed_once = marked_set(&fixture.tree, Marker::Collapsed);

    highlighter
        .update_highlight(&mut fixture.tree, &selection)
        .unwrap();
    assert_eq!(marked_set(&fixture.tree, Marker::Active), active_once);
    assert_eq!(marked_set(&fixture.tree, Marker::Collapsed), collapsed_once);
}

/// Switching files keeps the shared ancestor active, deactivates the old
/// branch (collapsing its containers), and activates the new branch.
#[test]
fn test_switching_files_rehighlights_the_chain() {
    let mut fixture = two_branch_tree();
    let highlighter = SidebarHighlighter::with_defaults();

    highlighter
        .update_highlight(&mut fixture.tree, &Selection::file("a/b/c.md"))
        .unwrap();
    highlighter
        .update_highlight(&mut fixture.tree, &Selection::file("a/d/e.md"))
        .unwrap();

    // shared ancestor survives without a collapse
    assert!(fixture.tree.has_marker(fixture.a.title, Marker::Active));
    assert!(!fixture.tree.has_marker(fixture.a.container, Marker::Collapsed));

    // old branch deactivated, containers collapsed
    assert!(!fixture.tree.has_marker(fixture.ab.title, Marker::Active));
    assert!(fixture.tree.has_marker(fixture.ab.container, Marker::Collapsed));
    assert!(!fixture.tree.has_marker(fixture.c.title, Marker::Active));
    assert!(fixture.tree.has_marker(fixture.c.container, Marker::Collapsed));

    // new branch active
    assert!(fixture.tree.has_marker(fixture.ad.title, Marker::Active));
    assert!(fixture.tree.has_marker(fixture.e.title, Marker::Active));
}

/// A null selection leaves all existing markers unchanged.
#[test]
fn test_no_selection_is_a_noop() {
    let mut fixture = two_branch_tree();
    let highlighter = SidebarHighlighter::with_defaults();

    highlighter
        .update_highlight(&mut fixture.tree, &Selection::file("a/b/c.md"))
        .unwrap();
    let active_before = marked_set(&fixture.tree, Marker::Active);

    highlighter.on_selection_changed(&mut fixture.tree, None);
    assert_eq!(marked_set(&fixture.tree, Marker::Active), active_before);
}

/// While the focus guard is suppressed, selection events are ignored.
#[test]
fn test_focus_guard_suppresses_handling() {
    let mut fixture = two_branch_tree();
    let highlighter = SidebarHighlighter::with_defaults();

    {
        let _hold = highlighter.guard().suppress();
        highlighter.on_selection_changed(
            &mut fixture.tree,
            Some(&Selection::file("a/b/c.md")),
        );
        assert!(marked_set(&fixture.tree, Marker::Active).is_empty());
    }

    // handling resumes once the hold is released
    highlighter.on_selection_changed(&mut fixture.tree, Some(&Selection::file("a/b/c.md")));
    assert!(!marked_set(&fixture.tree, Marker::Active).is_empty());
}

/// Markers set by hand on nodes this component never processes stay put.
#[test]
fn test_untouched_nodes_keep_their_markers() {
    let mut fixture = two_branch_tree();
    let highlighter = SidebarHighlighter::with_defaults();

    use sidemark::surface::SidebarSurface;
    fixture
        .tree
        .set_marker(fixture.e.container, Marker::Collapsed);

    highlighter
        .update_highlight(&mut fixture.tree, &Selection::file("a/b/c.md"))
        .unwrap();
    assert!(fixture.tree.has_marker(fixture.e.container, Marker::Collapsed));
}
