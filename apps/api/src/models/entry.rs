//! Identified entries inside ordered document sequences.
//!
//! Experience, education, skills, deliverables and milestones all follow the
//! same lifecycle: appended with empty defaults and a fresh id, patched in
//! place by id, removed by id. Order is insertion order.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

static LAST_ISSUED_MS: AtomicI64 = AtomicI64::new(0);

/// Returns a new entry id derived from the wall clock in milliseconds.
///
/// Ids are strictly increasing within the process, so two entries created in
/// the same millisecond still get distinct ids.
pub fn next_entry_id() -> String {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_ISSUED_MS.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last + 1);
        match LAST_ISSUED_MS.compare_exchange_weak(
            last,
            candidate,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => return candidate.to_string(),
            Err(actual) => last = actual,
        }
    }
}

/// An element of an ordered, id-addressed sequence.
pub trait Entry: Clone + Default + Serialize + DeserializeOwned {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);

    /// A blank entry carrying a fresh id.
    fn blank() -> Self {
        let mut entry = Self::default();
        entry.set_id(next_entry_id());
        entry
    }
}

/// Implements [`Entry`] for structs with a `pub id: String` field.
macro_rules! impl_entry {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::models::entry::Entry for $ty {
                fn id(&self) -> &str {
                    &self.id
                }

                fn set_id(&mut self, id: String) {
                    self.id = id;
                }
            }
        )+
    };
}

pub(crate) use impl_entry;

/// Failure of a by-id entry operation.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("entry '{0}' not found")]
    NotFound(String),

    #[error("invalid entry patch: {0}")]
    InvalidPatch(#[from] serde_json::Error),
}

/// Appends a blank entry and returns a copy of it.
pub fn append_entry<T: Entry>(entries: &mut Vec<T>) -> T {
    let entry = T::blank();
    entries.push(entry.clone());
    entry
}

/// Merges `patch` into the entry with the given id. The id itself is immutable.
pub fn update_entry<T: Entry>(entries: &mut [T], id: &str, patch: &Value) -> Result<T, EntryError> {
    let entry = entries
        .iter_mut()
        .find(|e| e.id() == id)
        .ok_or_else(|| EntryError::NotFound(id.to_string()))?;

    let mut value = serde_json::to_value(&*entry)?;
    merge_json(&mut value, patch);
    let mut updated: T = serde_json::from_value(value)?;
    updated.set_id(id.to_string());
    *entry = updated.clone();
    Ok(updated)
}

/// Removes the entry with the given id. Returns `false` if no entry matched.
pub fn remove_entry<T: Entry>(entries: &mut Vec<T>, id: &str) -> bool {
    let before = entries.len();
    entries.retain(|e| e.id() != id);
    entries.len() != before
}

/// JSON merge-patch: objects merge recursively, `null` deletes, anything else replaces.
pub fn merge_json(target: &mut Value, patch: &Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                if value.is_null() {
                    target.remove(key);
                } else {
                    merge_json(target.entry(key.clone()).or_insert(Value::Null), value);
                }
            }
        }
        (target, patch) => *target = patch.clone(),
    }
}
