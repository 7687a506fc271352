//! Ancestor-chain resolution.
//!
//! Walks the active file's path segment by segment against the rendered
//! tree, narrowing the search scope as the reference rows nest: each matched
//! title's parent container bounds the next segment's search.

use crate::error::Fault;
use crate::surface::SidebarSurface;
use crate::tree::node::NodeId;
use crate::tree::path::{self, PathMatch};
use std::collections::HashSet;
use tracing::trace;

/// Result of a successful chain resolution.
#[derive(Debug)]
pub struct Resolution {
    /// Title nodes on the path from the container toward the active file,
    /// membership only (insertion order is irrelevant to reconciliation).
    pub chain: HashSet<NodeId>,
    /// Parent scope of the deepest matched node.
    // TODO: scroll this scope into view (and unfold it) once auto-expand lands
    pub deepest_scope: NodeId,
}

/// Resolve the ancestor chain of `file_path` inside `container`.
///
/// Each segment is matched exactly first (the form top-level folders carry),
/// then as a `/`-prefixed suffix (nested folders, and virtual roots whose
/// attributes are path suffixes). A segment with no rendered counterpart is
/// a fault: its folder is collapsed or the path is stale.
pub fn resolve_chain(
    surface: &dyn SidebarSurface,
    container: NodeId,
    file_path: &str,
) -> Result<Resolution, Fault> {
    let mut chain = HashSet::new();
    let mut scope = container;

    for part in path::segments(file_path) {
        let found = surface
            .find_descendant(scope, PathMatch::Exact(&part))
            .or_else(|| surface.find_descendant(scope, PathMatch::SlashSuffix(&part)))
            .ok_or_else(|| Fault::SegmentNotRendered(part.clone()))?;
        trace!(segment = %part, "matched segment");

        chain.insert(found);
        scope = surface
            .parent_of(found)
            .ok_or_else(|| Fault::ParentMissing(part.clone()))?;
    }

    Ok(Resolution {
        chain,
        deepest_scope: scope,
    })
}
