//! Selection payloads delivered by the host's event dispatch.

use serde::{Deserialize, Serialize};

/// The newly active item, as reported by a selection-changed event.
///
/// Hosts that bridge events from a non-Rust UI layer can hand the payload
/// over as JSON via [`Selection::from_json`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Path of the active file. `None` when the active item has no backing
    /// file (e.g. a graph or settings view).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Selection {
    /// A selection backed by a file at `path`.
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            file: Some(path.into()),
        }
    }

    /// A selection with no backing file.
    pub fn empty() -> Self {
        Self { file: None }
    }

    /// The active-file path, or `""` when none is resolvable.
    pub fn file_path(&self) -> &str {
        self.file.as_deref().unwrap_or("")
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
