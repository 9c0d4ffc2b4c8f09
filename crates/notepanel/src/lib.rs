//! # notepanel
//!
//! Side-panel note-taking core: topics with rich-text HTML bodies, markdown
//! import/export, and the capture/paste cleaning pipeline.
//!
//! The platform layer (panel UI, context menu, browser storage) stays thin:
//! it routes input events to a [`NoteStore`], forwards storage-change
//! notifications to [`NoteStore::apply_storage_change`], and renders
//! whatever the store holds. Persistence goes through the injected
//! [`KeyValueStore`]; [`MemoryStore`] backs tests and headless use.
//!
//! The pure transforms live in [`notepanel_core`]; this crate adds the
//! HTML-string boundary on top of them plus the stateful orchestration.
//!
//! ## Example
//!
//! ```rust
//! use notepanel::{MemoryStore, NoteStore};
//!
//! let mut notes = NoteStore::open(MemoryStore::new()).unwrap();
//!
//! let id = notes
//!     .import_markdown("# Reading list\nsome links", "reading.md")
//!     .unwrap();
//!
//! assert_eq!(notes.get(&id).unwrap().title, "Reading list");
//! assert_eq!(notes.export_markdown(), "# Reading list\n\nsome links");
//! ```

pub mod capture;
pub mod html;
pub mod storage;
pub mod store;

pub use notepanel_core::{Element, ElementKind, Node};
pub use storage::{KeyValueStore, MemoryStore, StorageChange, StorageError};
pub use store::{InsertPoint, NoteStore, SyncOutcome, Topic, TopicId};

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Deleting the last remaining topic would leave the collection empty.
    #[error("cannot delete the last remaining topic")]
    LastTopic,

    /// The id does not reference a topic in the collection.
    #[error("unknown topic: {0}")]
    UnknownTopic(TopicId),

    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Persisted state could not be decoded.
    #[error("malformed persisted state: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// An internal invariant no longer holds.
    #[error("inconsistent store state: {0}")]
    Inconsistent(&'static str),
}

pub type Result<T> = std::result::Result<T, StoreError>;
