//! In-memory rendered tree.
//!
//! Reference implementation of [`SidebarSurface`]: an arena of nodes
//! addressed by [`NodeId`], with a parent map for upward navigation. Hosts
//! whose rendered tree is plain data can use it directly; it is also the
//! substrate for the crate's tests.
//!
//! Rows follow the shape the highlighter expects: each folder or file is a
//! container node wrapping a path-bearing title node, with subfolder and
//! file rows appended after the title. Collapsed subtrees are simply not
//! inserted, matching a host that does not render them.

use crate::surface::SidebarSurface;
use crate::tree::node::{Marker, NodeId, RenderedNode};
use crate::tree::path::{self, PathMatch};
use std::collections::HashMap;

/// Handles for one rendered row: the wrapping container and the path-bearing
/// title node inside it.
#[derive(Debug, Clone, Copy)]
pub struct RowHandles {
    pub container: NodeId,
    pub title: NodeId,
}

/// An in-memory rendered sidebar tree.
#[derive(Debug, Clone)]
pub struct RenderedTree {
    nodes: HashMap<NodeId, RenderedNode>,
    /// Map of NodeId to parent NodeId (for fast parent lookups)
    parent_map: HashMap<NodeId, NodeId>,
    root: NodeId,
    next_id: u64,
    sidebar_collapsed: bool,
    tree_view_present: bool,
    container_attached: bool,
}

impl RenderedTree {
    /// Create a tree holding only the root container.
    pub fn new() -> Self {
        let root = NodeId(0);
        let mut nodes = HashMap::new();
        nodes.insert(root, RenderedNode::new(None));
        Self {
            nodes,
            parent_map: HashMap::new(),
            root,
            next_id: 1,
            sidebar_collapsed: false,
            tree_view_present: true,
            container_attached: true,
        }
    }

    /// Root container of the tree. Always valid, even while detached.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Insert a folder row under `parent` (a container handle). Returns
    /// `None` when `parent` is unknown.
    pub fn add_folder(&mut self, parent: NodeId, path: &str) -> Option<RowHandles> {
        self.insert_row(parent, path)
    }

    /// Insert a file row under `parent` (a container handle). Returns `None`
    /// when `parent` is unknown.
    pub fn add_file(&mut self, parent: NodeId, path: &str) -> Option<RowHandles> {
        self.insert_row(parent, path)
    }

    /// Remove a row (container and its whole subtree). Unknown handles are
    /// ignored. Used by hosts when a folder collapses out of the rendered
    /// tree.
    pub fn remove_row(&mut self, container: NodeId) {
        let parent = self.parent_map.get(&container).copied();
        let mut stack = vec![container];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.remove(&id) {
                stack.extend(node.children);
            }
            self.parent_map.remove(&id);
        }
        if let Some(parent) = parent {
            if let Some(node) = self.nodes.get_mut(&parent) {
                node.children.retain(|child| *child != container);
            }
        }
    }

    /// Simulate the tree view being absent from the workspace.
    pub fn set_tree_view_present(&mut self, present: bool) {
        self.tree_view_present = present;
    }

    /// Simulate the sidebar being collapsed.
    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.sidebar_collapsed = collapsed;
    }

    /// Simulate the root container being detached from the view.
    pub fn set_container_attached(&mut self, attached: bool) {
        self.container_attached = attached;
    }

    /// Borrow a node by handle.
    pub fn node(&self, id: NodeId) -> Option<&RenderedNode> {
        self.nodes.get(&id)
    }

    /// Whether `node` currently carries `marker`.
    pub fn has_marker(&self, node: NodeId, marker: Marker) -> bool {
        self.nodes
            .get(&node)
            .map_or(false, |n| n.has_marker(marker))
    }

    fn insert_row(&mut self, parent: NodeId, path: &str) -> Option<RowHandles> {
        if !self.nodes.contains_key(&parent) {
            return None;
        }
        let container = self.alloc(RenderedNode::new(None));
        let title = self.alloc(RenderedNode::new(Some(path::normalize(path))));
        self.attach(container, title);
        self.attach(parent, container);
        Some(RowHandles { container, title })
    }

    fn alloc(&mut self, node: RenderedNode) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.push(child);
        }
        self.parent_map.insert(child, parent);
    }

    /// Descendants of `scope`, depth-first in document order, excluding
    /// `scope` itself.
    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeId> = match self.nodes.get(&scope) {
            Some(node) => node.children.iter().rev().copied().collect(),
            None => return result,
        };
        while let Some(id) = stack.pop() {
            result.push(id);
            if let Some(node) = self.nodes.get(&id) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        result
    }
}

impl Default for RenderedTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarSurface for RenderedTree {
    fn has_tree_view(&self) -> bool {
        self.tree_view_present
    }

    fn is_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    fn container(&self) -> Option<NodeId> {
        self.container_attached.then_some(self.root)
    }

    fn node_path(&self, node: NodeId) -> Option<String> {
        self.nodes.get(&node).and_then(|n| n.path.clone())
    }

    fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.parent_map.get(&node).copied()
    }

    fn find_descendant(&self, scope: NodeId, predicate: PathMatch<'_>) -> Option<NodeId> {
        self.descendants(scope).into_iter().find(|id| {
            self.nodes
                .get(id)
                .and_then(|n| n.path.as_deref())
                .map_or(false, |attr| predicate.matches(attr))
        })
    }

    fn marked(&self, scope: NodeId, marker: Marker) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|id| self.has_marker(*id, marker))
            .collect()
    }

    fn set_marker(&mut self, node: NodeId, marker: Marker) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.markers.insert(marker);
        }
    }

    fn clear_marker(&mut self, node: NodeId, marker: Marker) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.markers.remove(&marker);
        }
    }
}
