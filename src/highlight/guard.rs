//! Focus guard for programmatic tree mutations.
//!
//! Programmatic expand/collapse of folders re-enters the host's
//! selection-change dispatch; handling those echoes would steal input focus
//! from the editor. The guard is a counter: while any [`Suppression`] handle
//! is alive, [`crate::highlight::SidebarHighlighter::on_selection_changed`]
//! ignores incoming events.

use std::cell::Cell;

/// Reentrancy counter. Single-threaded by contract, like the event dispatch
/// it protects.
#[derive(Debug, Default)]
pub struct FocusGuard {
    depth: Cell<u32>,
}

impl FocusGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether selection-change handling is currently suppressed.
    pub fn is_suppressed(&self) -> bool {
        self.depth.get() > 0
    }

    /// Suppress selection-change handling until the returned handle drops.
    /// Nests: handling resumes when the last handle is gone.
    pub fn suppress(&self) -> Suppression<'_> {
        self.depth.set(self.depth.get() + 1);
        Suppression { guard: self }
    }
}

/// RAII handle holding the guard suppressed.
#[derive(Debug)]
pub struct Suppression<'a> {
    guard: &'a FocusGuard,
}

impl Drop for Suppression<'_> {
    fn drop(&mut self) {
        self.guard.depth.set(self.guard.depth.get() - 1);
    }
}
