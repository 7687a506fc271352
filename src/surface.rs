//! Host adapter seam.
//!
//! The hosting application owns the sidebar and its rendered tree; the
//! highlighter only reads structure and mutates display markers through this
//! trait. A concrete adapter implements it against whatever UI tree the host
//! provides; [`crate::tree::rendered::RenderedTree`] is the in-memory
//! implementation used by tests and by hosts whose rendered tree is plain
//! data.
//!
//! Path attributes handed back from [`SidebarSurface::node_path`] and
//! searched by [`SidebarSurface::find_descendant`] should be normalized with
//! [`crate::tree::path::normalize`] so segment comparisons are byte-equal.

use crate::tree::node::{Marker, NodeId};
use crate::tree::path::PathMatch;

/// Read/mark access to the host's rendered sidebar tree.
pub trait SidebarSurface {
    /// Whether the host has a file-tree view at all.
    fn has_tree_view(&self) -> bool;

    /// Whether the sidebar hosting the tree is currently collapsed.
    fn is_collapsed(&self) -> bool;

    /// Root container of the rendered tree, when present.
    fn container(&self) -> Option<NodeId>;

    /// Path attribute of a node. `None` for unknown handles and for
    /// container nodes, which carry no path attribute.
    fn node_path(&self, node: NodeId) -> Option<String>;

    /// Parent of a node. `None` for the root container and unknown handles.
    fn parent_of(&self, node: NodeId) -> Option<NodeId>;

    /// First descendant of `scope`, depth-first in document order, whose
    /// path attribute satisfies the predicate. `scope` itself is not a
    /// candidate.
    fn find_descendant(&self, scope: NodeId, predicate: PathMatch<'_>) -> Option<NodeId>;

    /// All descendants of `scope` currently carrying `marker`, in document
    /// order.
    fn marked(&self, scope: NodeId, marker: Marker) -> Vec<NodeId>;

    /// Set a display marker on a node. Idempotent; unknown handles are
    /// ignored.
    fn set_marker(&mut self, node: NodeId, marker: Marker);

    /// Clear a display marker from a node. Idempotent; unknown handles are
    /// ignored.
    fn clear_marker(&mut self, node: NodeId, marker: Marker);
}
