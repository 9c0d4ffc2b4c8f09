//! Capture-action writer.
//!
//! The capture side (the browser's context-menu handler) runs in a
//! different context from the panel and shares only the key/value
//! store with it. It stashes the selected fragment as pending content and
//! makes sure the persisted collection can receive it; a panel instance
//! consumes the payload at most once via
//! [`NoteStore::insert_pending`](crate::NoteStore::insert_pending).

use log::debug;

use crate::html::plain_text_to_html;
use crate::storage::KeyValueStore;
use crate::store::{
    allocate_id, Topic, TopicCollection, TopicId, ACTIVE_KEY, PENDING_KEY, TOPICS_KEY,
};
use crate::{Result, StoreError};

/// Stash a captured selection for the panel to insert.
///
/// Prefers the HTML fragment and falls back to the plain-text selection,
/// escaped with newlines converted to `<br>`. When the capture produced
/// neither, nothing is written and `false` is returned.
pub fn stash_selection<S: KeyValueStore>(
    store: &mut S,
    html: Option<&str>,
    text: Option<&str>,
) -> Result<bool> {
    let content = match (
        html.filter(|value| !value.is_empty()),
        text.filter(|value| !value.is_empty()),
    ) {
        (Some(html), _) => html.to_string(),
        (None, Some(text)) => plain_text_to_html(text),
        (None, None) => return Ok(false),
    };

    let loaded = store.get(&[TOPICS_KEY, ACTIVE_KEY])?;
    let mut topics: TopicCollection = match loaded.get(TOPICS_KEY) {
        Some(raw) => serde_json::from_str(raw)?,
        None => TopicCollection::new(),
    };
    if topics.is_empty() {
        topics.insert(allocate_id(&topics), Topic::default());
    }

    let stored_active = match loaded.get(ACTIVE_KEY) {
        Some(raw) => Some(serde_json::from_str::<TopicId>(raw)?),
        None => None,
    };
    let active = stored_active
        .filter(|id| topics.contains_key(id))
        .or_else(|| topics.keys().next().cloned())
        .ok_or(StoreError::Inconsistent(
            "non-empty collection without a first key",
        ))?;

    store.set(&[
        (TOPICS_KEY, serde_json::to_string(&topics)?),
        (ACTIVE_KEY, serde_json::to_string(&active)?),
        (PENDING_KEY, serde_json::to_string(&content)?),
    ])?;
    debug!("stashed {} bytes of pending capture content", content.len());
    Ok(true)
}
