//! Sidemark: Sidebar Highlight Synchronization
//!
//! Keeps a file-tree sidebar's highlight markers in sync with the currently
//! active file: the chain of ancestor folders carries the `active` marker,
//! and folders dropping out of the chain are collapsed.

pub mod config;
pub mod error;
pub mod highlight;
pub mod logging;
pub mod notice;
pub mod selection;
pub mod surface;
pub mod tree;
