//! Two-phase marker reconciliation.
//!
//! 1. Reset titles that are active but not in the ancestor chain, collapsing
//!    their containers.
//! 2. Mark the remaining chain titles active.
//!
//! Titles that are both active and in the chain are dropped from the chain
//! instead of re-marked, so an unchanged selection causes no mutations.

use crate::surface::SidebarSurface;
use crate::tree::node::{Marker, NodeId};
use std::collections::HashSet;
use tracing::debug;

pub(crate) fn apply(
    surface: &mut dyn SidebarSurface,
    container: NodeId,
    mut chain: HashSet<NodeId>,
    collapse_on_deactivate: bool,
) {
    let mut deactivated = 0usize;

    for stale in surface.marked(container, Marker::Active) {
        if chain.remove(&stale) {
            continue;
        }
        surface.clear_marker(stale, Marker::Active);
        deactivated += 1;
        if collapse_on_deactivate {
            if let Some(parent) = surface.parent_of(stale) {
                surface.set_marker(parent, Marker::Collapsed);
            }
        }
    }

    debug!(deactivated, activated = chain.len(), "reconciled markers");

    for title in chain {
        surface.set_marker(title, Marker::Active);
    }
}
