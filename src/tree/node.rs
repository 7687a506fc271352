//! Node handles and display markers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Opaque handle addressing a node inside a rendered tree.
///
/// Handles are only meaningful to the tree that issued them and must not be
/// cached across selection-change events; the tree's structure can change
/// between events and the chain is re-resolved from scratch every time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u64);

/// Boolean display-state flag consumed by the host's rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Marker {
    /// The folder title is highlighted as part of the active file's chain.
    Active,
    /// The folder's contents are visually folded.
    Collapsed,
}

/// A single node the host currently displays.
///
/// Folder and file rows are wrapped in a container node without a path
/// attribute; the path-bearing title node sits inside it. The highlighter
/// marks titles `Active` and containers `Collapsed`.
#[derive(Debug, Clone)]
pub struct RenderedNode {
    /// Slash-separated path attribute; `None` on container nodes. May be a
    /// path suffix for nested or virtual roots.
    pub path: Option<String>,
    /// Display markers currently set on the node.
    pub markers: BTreeSet<Marker>,
    /// Children in document order.
    pub(crate) children: Vec<NodeId>,
}

impl RenderedNode {
    pub(crate) fn new(path: Option<String>) -> Self {
        Self {
            path,
            markers: BTreeSet::new(),
            children: Vec::new(),
        }
    }

    pub fn has_marker(&self, marker: Marker) -> bool {
        self.markers.contains(&marker)
    }
}
