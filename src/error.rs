//! Error types for sidebar highlight synchronization.

use thiserror::Error;

/// Classification of an update fault.
///
/// Hosts that render notices differently per class (e.g. suppressing
/// resolution faults while a vault is still indexing) can branch on this
/// instead of matching individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// A required host UI element could not be located.
    Environment,
    /// A path segment has no counterpart in the rendered tree.
    Resolution,
    /// The rendered tree violated a structural expectation.
    Structural,
}

/// Faults that abort a single highlight update.
///
/// Every fault is terminal for the current update: marker changes applied
/// before the fault stay in place, and the next selection-change event
/// re-resolves from scratch.
#[derive(Debug, Error)]
pub enum Fault {
    #[error("couldn't find the file tree view")]
    TreeViewMissing,

    #[error("couldn't find the sidebar container")]
    ContainerMissing,

    #[error("couldn't find an open folder for '{0}' in the file tree")]
    SegmentNotRendered(String),

    #[error("couldn't narrow down the search above '{0}'")]
    ParentMissing(String),
}

impl Fault {
    pub fn kind(&self) -> FaultKind {
        match self {
            Fault::TreeViewMissing | Fault::ContainerMissing => FaultKind::Environment,
            Fault::SegmentNotRendered(_) => FaultKind::Resolution,
            Fault::ParentMissing(_) => FaultKind::Structural,
        }
    }
}

/// Configuration load and validation errors.
///
/// Separate from [`Fault`]: configuration errors happen at setup time,
/// faults at event time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("configuration I/O error: {0}")]
    Io(#[from] std::io::Error),
}
