//! Sidebar highlight synchronization.
//!
//! Keeps tree-node `active` markers synchronized with the ancestor-folder
//! chain of the currently selected file. Each selection-change event is
//! handled in two steps:
//!
//! 1. Reset all folders that are active but not ancestors of the new file.
//! 2. Mark the new file's ancestor folders active.
//!
//! Folders that drop out of the chain get a `collapsed` marker on their
//! container, so the host's rendering layer folds them shut.

pub mod guard;
mod reconcile;
pub mod resolver;

use crate::config::HighlightConfig;
use crate::error::Fault;
use crate::notice::{NoticeSink, TracingNotices};
use crate::selection::Selection;
use crate::surface::SidebarSurface;
use guard::FocusGuard;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// The highlight synchronizer.
///
/// Constructed explicitly by the hosting application and driven from its
/// event dispatch; there is no ambient registration. Stateless across
/// events except for the markers it leaves on the shared tree.
pub struct SidebarHighlighter {
    config: HighlightConfig,
    guard: FocusGuard,
    notices: Arc<dyn NoticeSink>,
}

impl SidebarHighlighter {
    pub fn new(config: HighlightConfig, notices: Arc<dyn NoticeSink>) -> Self {
        Self {
            config,
            guard: FocusGuard::new(),
            notices,
        }
    }

    /// A highlighter with default configuration, reporting notices through
    /// the log.
    pub fn with_defaults() -> Self {
        Self::new(HighlightConfig::default(), Arc::new(TracingNotices))
    }

    /// The reentrancy guard. Hold a suppression handle around programmatic
    /// expand/collapse so the echoed selection events are ignored.
    pub fn guard(&self) -> &FocusGuard {
        &self.guard
    }

    /// Entry point for the host's selection-changed event.
    ///
    /// `None` means no active item and is a no-op. Faults never reach the
    /// caller: they surface as a notice and abort the current update.
    #[instrument(skip_all)]
    pub fn on_selection_changed(
        &self,
        surface: &mut dyn SidebarSurface,
        selection: Option<&Selection>,
    ) {
        let selection = match selection {
            Some(selection) => selection,
            None => {
                debug!("no selection, nothing to update");
                return;
            }
        };
        if self.guard.is_suppressed() {
            debug!("selection change suppressed by focus guard");
            return;
        }
        if let Err(fault) = self.update_highlight(surface, selection) {
            warn!(kind = ?fault.kind(), "highlight update aborted: {}", fault);
            self.notices.notify(&fault.to_string());
        }
    }

    /// Recompute and apply the highlight for `selection`.
    ///
    /// Aborts silently when the sidebar is collapsed (nothing visible to
    /// update). On a fault, marker changes already applied stay in place;
    /// the next selection event re-resolves from scratch.
    #[instrument(skip(self, surface), fields(file = %selection.file_path()))]
    pub fn update_highlight(
        &self,
        surface: &mut dyn SidebarSurface,
        selection: &Selection,
    ) -> Result<(), Fault> {
        if !surface.has_tree_view() {
            return Err(Fault::TreeViewMissing);
        }
        if surface.is_collapsed() {
            debug!("sidebar collapsed, nothing visible to update");
            return Ok(());
        }
        let container = surface.container().ok_or(Fault::ContainerMissing)?;

        let resolution = resolver::resolve_chain(surface, container, selection.file_path())?;
        reconcile::apply(
            surface,
            container,
            resolution.chain,
            self.config.collapse_on_deactivate,
        );
        Ok(())
    }
}
