//! Topic store and orchestration.
//!
//! A single [`NoteStore`] instance owns the in-memory topic collection; UI
//! bindings hold a handle and route events here instead of sharing globals.
//! Persistence is last-write-wins against the injected key/value store.
//! Remote writes from other instances are reconciled only while the user is
//! not mid-edit; see [`NoteStore::apply_storage_change`].

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use indexmap::IndexMap;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::html::{clean_pasted_html, html_to_markdown};
use crate::storage::{KeyValueStore, StorageChange};
use crate::{Result, StoreError};

pub(crate) const TOPICS_KEY: &str = "topics";
pub(crate) const ACTIVE_KEY: &str = "currentTopicId";
pub(crate) const PENDING_KEY: &str = "pendingContent";

static FILE_EXT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.(md|txt)$").expect("valid extension regex"));
static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Opaque topic identifier, unique within a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(String);

impl TopicId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named note with a rich-text HTML body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    pub content: String,
}

impl Topic {
    /// Title shown in topic pickers; empty titles render as `Untitled`.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }
}

/// Insertion order defines display order.
pub(crate) type TopicCollection = IndexMap<TopicId, Topic>;

/// Where captured or pasted content lands in the active body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPoint {
    /// Byte offset into the active content, clamped to the nearest char
    /// boundary at or before it.
    Cursor(usize),
    /// Append after existing content, separated by a blank line.
    End,
}

/// What a storage-change notification did to local state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// A capture payload arrived and has been consumed from storage.
    PendingContent(String),
    /// The topic collection was replaced by the remote write.
    TopicsReplaced,
    /// The remote topics write was ignored because the user is mid-edit.
    SuppressedWhileEditing,
    /// The key is not one this store reconciles.
    Ignored,
}

/// The note store: topics, active-topic tracking, import/export and
/// pending-content consumption.
///
/// The collection is never empty once opened; an empty or inconsistent
/// persisted state heals itself by creating a topic. The active id always
/// references an existing topic.
pub struct NoteStore<S: KeyValueStore> {
    store: S,
    topics: TopicCollection,
    active_id: TopicId,
    editing: bool,
}

impl<S: KeyValueStore> NoteStore<S> {
    /// Load persisted state, healing an empty collection and a dangling
    /// active id.
    pub fn open(store: S) -> Result<Self> {
        let loaded = store.get(&[TOPICS_KEY, ACTIVE_KEY])?;

        let topics: TopicCollection = match loaded.get(TOPICS_KEY) {
            Some(raw) => serde_json::from_str(raw)?,
            None => TopicCollection::new(),
        };
        let stored_active = match loaded.get(ACTIVE_KEY) {
            Some(raw) => Some(serde_json::from_str::<TopicId>(raw)?),
            None => None,
        };

        if topics.is_empty() {
            let mut topics = topics;
            let id = allocate_id(&topics);
            topics.insert(id.clone(), Topic::default());
            let mut this = Self {
                store,
                topics,
                active_id: id,
                editing: false,
            };
            this.persist_all()?;
            debug!("initialized empty store with topic {}", this.active_id);
            return Ok(this);
        }

        let active_id = stored_active
            .filter(|id| topics.contains_key(id))
            .or_else(|| topics.keys().next().cloned())
            .ok_or(StoreError::Inconsistent(
                "non-empty collection without a first key",
            ))?;

        Ok(Self {
            store,
            topics,
            active_id,
            editing: false,
        })
    }

    /// The backing key/value store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The active topic's id.
    pub fn active_id(&self) -> &TopicId {
        &self.active_id
    }

    /// The active topic.
    pub fn active(&self) -> Option<&Topic> {
        self.topics.get(&self.active_id)
    }

    /// Look up a topic by id.
    pub fn get(&self, id: &TopicId) -> Option<&Topic> {
        self.topics.get(id)
    }

    /// Topics in display (insertion) order.
    pub fn topics(&self) -> impl Iterator<Item = (&TopicId, &Topic)> {
        self.topics.iter()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Whether the user is currently mid-edit in this instance.
    ///
    /// The synchronization layer must check this before applying remote
    /// updates; [`NoteStore::apply_storage_change`] does.
    pub fn is_locally_editing(&self) -> bool {
        self.editing
    }

    /// Track editor focus/blur.
    pub fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }

    /// Create an empty topic and make it active.
    pub fn create_topic(&mut self) -> Result<TopicId> {
        let id = allocate_id(&self.topics);
        self.topics.insert(id.clone(), Topic::default());
        self.active_id = id.clone();
        self.persist_all()?;
        debug!("created topic {id}");
        Ok(id)
    }

    /// Persist current edits and switch the active topic.
    pub fn select_topic(&mut self, id: &TopicId) -> Result<()> {
        if !self.topics.contains_key(id) {
            return Err(StoreError::UnknownTopic(id.clone()));
        }
        self.active_id = id.clone();
        self.persist_all()
    }

    /// Delete a topic. The collection never drops below one entry; deleting
    /// the last topic fails without mutating anything.
    ///
    /// Returns the id that is active afterwards (the first remaining topic
    /// in display order when the deleted topic was active).
    pub fn delete_topic(&mut self, id: &TopicId) -> Result<TopicId> {
        if !self.topics.contains_key(id) {
            return Err(StoreError::UnknownTopic(id.clone()));
        }
        if self.topics.len() <= 1 {
            return Err(StoreError::LastTopic);
        }

        self.topics.shift_remove(id);
        if !self.topics.contains_key(&self.active_id) {
            self.active_id = self.first_id()?;
        }
        self.persist_all()?;
        debug!("deleted topic {id}, active is now {}", self.active_id);
        Ok(self.active_id.clone())
    }

    /// Rename the active topic.
    pub fn rename_active(&mut self, title: &str) -> Result<()> {
        self.active_mut()?.title = title.to_string();
        self.persist_all()
    }

    /// Replace the active topic's rich-text body.
    pub fn set_active_content(&mut self, html: &str) -> Result<()> {
        self.active_mut()?.content = html.to_string();
        self.persist_all()
    }

    /// Clear the active topic's body.
    pub fn clear_active_content(&mut self) -> Result<()> {
        self.active_mut()?.content.clear();
        self.persist_all()
    }

    /// Import a markdown file as a new topic and make it active.
    ///
    /// A leading `# ` line becomes the title; otherwise the file name with
    /// a trailing `.md`/`.txt` extension stripped does. The body is not
    /// parsed as markdown; newlines become `<br>`.
    pub fn import_markdown(&mut self, text: &str, file_name: &str) -> Result<TopicId> {
        let (title, body) = split_imported(text, file_name);
        let id = allocate_id(&self.topics);
        self.topics.insert(
            id.clone(),
            Topic {
                title,
                content: body.replace('\n', "<br>"),
            },
        );
        self.active_id = id.clone();
        self.persist_all()?;
        debug!("imported {file_name} as topic {id}");
        Ok(id)
    }

    /// Export the active topic as a markdown document.
    pub fn export_markdown(&self) -> String {
        let (title, content) = match self.active() {
            Some(topic) => (topic.display_title(), topic.content.as_str()),
            None => ("Untitled", ""),
        };
        format!("# {title}\n\n{}", html_to_markdown(content))
    }

    /// Download file name for the exported document.
    pub fn export_file_name(&self) -> String {
        let title = self.active().map(Topic::display_title).unwrap_or("Untitled");
        let lower_title = title.to_lowercase();
        let slug = WHITESPACE_RE.replace_all(&lower_title, "-");
        format!("{slug}.md")
    }

    /// Sanitize and insert captured or pasted HTML into the active body.
    pub fn insert_sanitized(&mut self, html: &str, at: InsertPoint) -> Result<()> {
        let clean = clean_pasted_html(html);
        let content = &mut self.active_mut()?.content;

        match at {
            InsertPoint::Cursor(offset) => {
                content.insert_str(floor_char_boundary(content, offset), &clean);
            }
            InsertPoint::End => {
                // An empty editable surface typically holds a lone <br>
                // placeholder; treat it as empty.
                if content.is_empty() || content == "<br>" {
                    *content = clean;
                } else {
                    content.push_str("<br><br>");
                    content.push_str(&clean);
                }
            }
        }
        self.persist_all()
    }

    /// Take the one-shot capture payload, clearing it from storage.
    pub fn take_pending_content(&mut self) -> Result<Option<String>> {
        let loaded = self.store.get(&[PENDING_KEY])?;
        let Some(raw) = loaded.get(PENDING_KEY) else {
            return Ok(None);
        };
        let html: String = serde_json::from_str(raw)?;
        self.store.remove(PENDING_KEY)?;
        Ok(Some(html))
    }

    /// Consume pending capture content, if any, into the active body.
    ///
    /// Returns whether anything was inserted.
    pub fn insert_pending(&mut self, at: InsertPoint) -> Result<bool> {
        match self.take_pending_content()? {
            Some(html) => {
                self.insert_sanitized(&html, at)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Reconcile one storage-change notification from another writer.
    ///
    /// Capture payloads are consumed and returned for insertion. Remote
    /// topic writes replace the local collection only while the user is not
    /// mid-edit; the suppression trades cross-instance consistency for
    /// never clobbering in-progress input.
    pub fn apply_storage_change(&mut self, change: &StorageChange) -> Result<SyncOutcome> {
        match change.key.as_str() {
            PENDING_KEY => {
                let Some(raw) = change.new_value.as_deref() else {
                    return Ok(SyncOutcome::Ignored);
                };
                let html: String = serde_json::from_str(raw)?;
                self.store.remove(PENDING_KEY)?;
                Ok(SyncOutcome::PendingContent(html))
            }

            TOPICS_KEY => {
                if self.editing {
                    warn!("suppressing remote topics update while editing");
                    return Ok(SyncOutcome::SuppressedWhileEditing);
                }

                let mut topics: TopicCollection = match change.new_value.as_deref() {
                    Some(raw) => serde_json::from_str(raw)?,
                    None => TopicCollection::new(),
                };
                let healed = topics.is_empty();
                if healed {
                    let id = allocate_id(&topics);
                    topics.insert(id, Topic::default());
                }

                self.topics = topics;
                if !self.topics.contains_key(&self.active_id) {
                    self.active_id = self.first_id()?;
                }
                if healed {
                    self.persist_all()?;
                }
                Ok(SyncOutcome::TopicsReplaced)
            }

            _ => Ok(SyncOutcome::Ignored),
        }
    }

    fn active_mut(&mut self) -> Result<&mut Topic> {
        self.topics
            .get_mut(&self.active_id)
            .ok_or(StoreError::Inconsistent("active id points at no topic"))
    }

    fn first_id(&self) -> Result<TopicId> {
        self.topics
            .keys()
            .next()
            .cloned()
            .ok_or(StoreError::Inconsistent("topic collection is empty"))
    }

    fn persist_all(&mut self) -> Result<()> {
        let topics = serde_json::to_string(&self.topics)?;
        let active = serde_json::to_string(&self.active_id)?;
        self.store
            .set(&[(TOPICS_KEY, topics), (ACTIVE_KEY, active)])?;
        Ok(())
    }
}

/// Allocate a time-based id, bumped until unique within the collection.
pub(crate) fn allocate_id(topics: &TopicCollection) -> TopicId {
    let mut stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    loop {
        let id = TopicId(format!("topic_{stamp}"));
        if !topics.contains_key(&id) {
            return id;
        }
        stamp += 1;
    }
}

/// Split imported file text into title and markdown body.
fn split_imported(text: &str, file_name: &str) -> (String, String) {
    if let Some(first) = text.lines().next() {
        if let Some(heading) = first.strip_prefix("# ") {
            let body = text
                .lines()
                .skip(1)
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string();
            return (heading.trim().to_string(), body);
        }
    }
    let title = FILE_EXT_RE.replace(file_name, "").into_owned();
    (title, text.to_string())
}

/// Largest index at or below `offset` that is a char boundary.
fn floor_char_boundary(s: &str, offset: usize) -> usize {
    let mut at = offset.min(s.len());
    while !s.is_char_boundary(at) {
        at -= 1;
    }
    at
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn open_store() -> NoteStore<MemoryStore> {
        NoteStore::open(MemoryStore::new()).unwrap()
    }

    #[test]
    fn open_heals_empty_collection() {
        let notes = open_store();
        assert_eq!(notes.len(), 1);
        assert!(notes.active().is_some());
        assert!(notes.store().raw(TOPICS_KEY).is_some());
    }

    #[test]
    fn open_repoints_dangling_active_id() {
        let mut notes = open_store();
        notes.rename_active("kept").unwrap();

        let mut backing = notes.store().clone();
        backing
            .set(&[(ACTIVE_KEY, "\"topic_gone\"".to_string())])
            .unwrap();

        let reopened = NoteStore::open(backing).unwrap();
        assert_eq!(reopened.active().unwrap().title, "kept");
    }

    #[test]
    fn create_topic_activates_it() {
        let mut notes = open_store();
        let id = notes.create_topic().unwrap();
        assert_eq!(notes.active_id(), &id);
        assert_eq!(notes.len(), 2);
    }

    #[test]
    fn created_ids_are_unique() {
        let mut notes = open_store();
        let a = notes.create_topic().unwrap();
        let b = notes.create_topic().unwrap();
        let c = notes.create_topic().unwrap();
        assert_ne!(a, b);
        assert_ne!(b, c);
    }

    #[test]
    fn allocate_id_bumps_past_occupied_stamps() {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();

        // Occupy a 10-second window of stamps so the allocation's own
        // clock-derived start lands inside it and must bump to the first
        // free one.
        let mut topics = TopicCollection::new();
        for offset in 0..10_000u128 {
            topics.insert(
                TopicId(format!("topic_{}", stamp + offset)),
                Topic::default(),
            );
        }

        let id = allocate_id(&topics);
        assert!(!topics.contains_key(&id));
        assert_eq!(id.as_str(), format!("topic_{}", stamp + 10_000));
    }

    #[test]
    fn select_switches_and_persists() {
        let mut notes = open_store();
        let first = notes.active_id().clone();
        notes.create_topic().unwrap();

        notes.select_topic(&first).unwrap();
        assert_eq!(notes.active_id(), &first);

        let reopened = NoteStore::open(notes.store().clone()).unwrap();
        assert_eq!(reopened.active_id(), &first);
    }

    #[test]
    fn clear_empties_active_body_only() {
        let mut notes = open_store();
        notes.rename_active("keep title").unwrap();
        notes.set_active_content("body").unwrap();

        notes.clear_active_content().unwrap();
        let topic = notes.active().unwrap();
        assert_eq!(topic.title, "keep title");
        assert_eq!(topic.content, "");
    }

    #[test]
    fn select_unknown_topic_fails() {
        let mut notes = open_store();
        let missing = TopicId("topic_0".to_string());
        assert!(matches!(
            notes.select_topic(&missing),
            Err(StoreError::UnknownTopic(_))
        ));
    }

    #[test]
    fn delete_last_topic_is_rejected() {
        let mut notes = open_store();
        let id = notes.active_id().clone();
        assert!(matches!(
            notes.delete_topic(&id),
            Err(StoreError::LastTopic)
        ));
        assert_eq!(notes.len(), 1);
        assert_eq!(notes.active_id(), &id);
    }

    #[test]
    fn repeated_deletes_never_empty_the_collection() {
        let mut notes = open_store();
        for _ in 0..4 {
            notes.create_topic().unwrap();
        }

        loop {
            let id = notes.active_id().clone();
            match notes.delete_topic(&id) {
                Ok(_) => continue,
                Err(StoreError::LastTopic) => break,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn deleting_active_topic_activates_first_remaining() {
        let mut notes = open_store();
        let first = notes.active_id().clone();
        let second = notes.create_topic().unwrap();

        let now_active = notes.delete_topic(&second).unwrap();
        assert_eq!(now_active, first);
        assert_eq!(notes.active_id(), &first);
    }

    #[test]
    fn deleting_inactive_topic_keeps_active() {
        let mut notes = open_store();
        let first = notes.active_id().clone();
        let second = notes.create_topic().unwrap();

        notes.delete_topic(&first).unwrap();
        assert_eq!(notes.active_id(), &second);
    }

    #[test]
    fn edits_survive_reopen() {
        let mut notes = open_store();
        notes.rename_active("groceries").unwrap();
        notes.set_active_content("milk<br>eggs").unwrap();

        let reopened = NoteStore::open(notes.store().clone()).unwrap();
        let topic = reopened.active().unwrap();
        assert_eq!(topic.title, "groceries");
        assert_eq!(topic.content, "milk<br>eggs");
    }

    #[test]
    fn import_extracts_heading_title() {
        let mut notes = open_store();
        let id = notes
            .import_markdown("# My Title\nbody line", "whatever.md")
            .unwrap();

        let topic = notes.get(&id).unwrap();
        assert_eq!(topic.title, "My Title");
        assert_eq!(topic.content, "body line");
        assert_eq!(notes.active_id(), &id);
    }

    #[test]
    fn import_falls_back_to_file_name() {
        let mut notes = open_store();
        let id = notes.import_markdown("no heading", "notes.md").unwrap();
        assert_eq!(notes.get(&id).unwrap().title, "notes");

        let id = notes.import_markdown("plain", "journal.txt").unwrap();
        assert_eq!(notes.get(&id).unwrap().title, "journal");
    }

    #[test]
    fn import_converts_newlines_to_breaks() {
        let mut notes = open_store();
        let id = notes
            .import_markdown("# T\nfirst\n\nsecond", "t.md")
            .unwrap();
        assert_eq!(notes.get(&id).unwrap().content, "first<br><br>second");
    }

    #[test]
    fn export_composes_title_and_body() {
        let mut notes = open_store();
        notes.rename_active("T").unwrap();
        notes.set_active_content("hello").unwrap();

        assert_eq!(notes.export_markdown(), "# T\n\nhello");
    }

    #[test]
    fn export_untitled_fallback() {
        let notes = open_store();
        assert_eq!(notes.export_markdown(), "# Untitled\n\n");
        assert_eq!(notes.export_file_name(), "untitled.md");
    }

    #[test]
    fn export_file_name_slugs_whitespace() {
        let mut notes = open_store();
        notes.rename_active("My  Reading List").unwrap();
        assert_eq!(notes.export_file_name(), "my-reading-list.md");
    }

    #[test]
    fn insert_at_end_separates_with_blank_line() {
        let mut notes = open_store();
        notes.set_active_content("existing").unwrap();
        notes.insert_sanitized("new", InsertPoint::End).unwrap();
        assert_eq!(notes.active().unwrap().content, "existing<br><br>new");
    }

    #[test]
    fn insert_at_end_replaces_placeholder() {
        let mut notes = open_store();
        notes.set_active_content("<br>").unwrap();
        notes.insert_sanitized("new", InsertPoint::End).unwrap();
        assert_eq!(notes.active().unwrap().content, "new");
    }

    #[test]
    fn insert_into_empty_body() {
        let mut notes = open_store();
        notes.insert_sanitized("new", InsertPoint::End).unwrap();
        assert_eq!(notes.active().unwrap().content, "new");
    }

    #[test]
    fn insert_at_cursor_offset() {
        let mut notes = open_store();
        notes.set_active_content("ab").unwrap();
        notes.insert_sanitized("X", InsertPoint::Cursor(1)).unwrap();
        assert_eq!(notes.active().unwrap().content, "aXb");
    }

    #[test]
    fn insert_clamps_to_char_boundary() {
        let mut notes = open_store();
        notes.set_active_content("héllo").unwrap();
        notes.insert_sanitized("X", InsertPoint::Cursor(2)).unwrap();
        assert_eq!(notes.active().unwrap().content, "hXéllo");

        notes.set_active_content("ab").unwrap();
        notes
            .insert_sanitized("Y", InsertPoint::Cursor(999))
            .unwrap();
        assert_eq!(notes.active().unwrap().content, "abY");
    }

    #[test]
    fn insert_sanitizes_markup() {
        let mut notes = open_store();
        notes
            .insert_sanitized("<span onclick=\"x()\">hi</span>", InsertPoint::End)
            .unwrap();
        assert_eq!(notes.active().unwrap().content, "hi");
    }

    #[test]
    fn pending_content_is_consumed_once() {
        let notes = open_store();
        let mut backing = notes.store().clone();
        backing
            .set(&[(PENDING_KEY, "\"<b>grab</b>\"".to_string())])
            .unwrap();
        let mut notes = NoteStore::open(backing).unwrap();

        assert_eq!(
            notes.take_pending_content().unwrap().as_deref(),
            Some("<b>grab</b>")
        );
        assert!(notes.store().raw(PENDING_KEY).is_none());
        assert_eq!(notes.take_pending_content().unwrap(), None);
    }

    #[test]
    fn insert_pending_round_trip() {
        let mut notes = open_store();
        notes
            .store
            .set(&[(PENDING_KEY, "\"<b>grab</b>\"".to_string())])
            .unwrap();

        assert!(notes.insert_pending(InsertPoint::End).unwrap());
        assert_eq!(notes.active().unwrap().content, "<b>grab</b>");
        assert!(!notes.insert_pending(InsertPoint::End).unwrap());
    }

    #[test]
    fn change_notification_delivers_pending_content() {
        let mut notes = open_store();
        notes
            .store
            .set(&[(PENDING_KEY, "\"captured\"".to_string())])
            .unwrap();

        let change = StorageChange::new(PENDING_KEY, None, Some("\"captured\""));
        let outcome = notes.apply_storage_change(&change).unwrap();
        assert_eq!(outcome, SyncOutcome::PendingContent("captured".to_string()));
        assert!(notes.store().raw(PENDING_KEY).is_none());
    }

    #[test]
    fn remote_topics_are_applied_when_idle() {
        let mut remote = open_store();
        remote.rename_active("from remote").unwrap();
        let payload = remote.store().raw(TOPICS_KEY).unwrap().to_string();

        let mut notes = open_store();
        let change = StorageChange::new(TOPICS_KEY, None, Some(&payload));
        let outcome = notes.apply_storage_change(&change).unwrap();

        assert_eq!(outcome, SyncOutcome::TopicsReplaced);
        assert_eq!(notes.active().unwrap().title, "from remote");
    }

    #[test]
    fn remote_topics_are_suppressed_while_editing() {
        let mut remote = open_store();
        remote.rename_active("from remote").unwrap();
        let payload = remote.store().raw(TOPICS_KEY).unwrap().to_string();

        let mut notes = open_store();
        notes.rename_active("local draft").unwrap();
        notes.set_editing(true);
        assert!(notes.is_locally_editing());

        let change = StorageChange::new(TOPICS_KEY, None, Some(&payload));
        let outcome = notes.apply_storage_change(&change).unwrap();

        assert_eq!(outcome, SyncOutcome::SuppressedWhileEditing);
        assert_eq!(notes.active().unwrap().title, "local draft");
    }

    #[test]
    fn remote_topics_removal_heals() {
        let mut notes = open_store();
        let change = StorageChange::new(TOPICS_KEY, None, None);
        let outcome = notes.apply_storage_change(&change).unwrap();

        assert_eq!(outcome, SyncOutcome::TopicsReplaced);
        assert_eq!(notes.len(), 1);
        assert!(notes.active().is_some());
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let mut notes = open_store();
        let change = StorageChange::new("something_else", None, Some("\"x\""));
        assert_eq!(
            notes.apply_storage_change(&change).unwrap(),
            SyncOutcome::Ignored
        );
    }

    #[test]
    fn display_title_falls_back() {
        let topic = Topic::default();
        assert_eq!(topic.display_title(), "Untitled");
    }
}
