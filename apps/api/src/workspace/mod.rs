//! In-memory document workspace.
//!
//! Holds the documents being edited, keyed by id. Every mutation goes through
//! an explicit operation here; renderers only ever receive a snapshot.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::entry::{self, merge_json, EntryError};
use crate::models::{Document, DocumentKind};

pub mod handlers;

/// An ordered, id-addressed sequence inside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Experience,
    Education,
    Skills,
    Deliverables,
    Milestones,
}

impl Collection {
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Experience => "experience",
            Collection::Education => "education",
            Collection::Skills => "skills",
            Collection::Deliverables => "deliverables",
            Collection::Milestones => "milestones",
        }
    }
}

/// Binds `$entries` to the `Vec` behind `$collection` and evaluates `$body`,
/// or fails with a validation error when the document has no such collection.
macro_rules! with_collection {
    ($document:expr, $collection:expr, |$entries:ident| $body:expr) => {
        match ($document, $collection) {
            (Document::Cv(cv), Collection::Experience) => {
                let $entries = &mut cv.experience;
                Ok($body)
            }
            (Document::Cv(cv), Collection::Education) => {
                let $entries = &mut cv.education;
                Ok($body)
            }
            (Document::Cv(cv), Collection::Skills) => {
                let $entries = &mut cv.skills;
                Ok($body)
            }
            (Document::JobProposal(p), Collection::Deliverables) => {
                let $entries = &mut p.deliverables;
                Ok($body)
            }
            (Document::JobProposal(p), Collection::Milestones) => {
                let $entries = &mut p.milestones;
                Ok($body)
            }
            (document, collection) => Err(AppError::Validation(format!(
                "a {} has no '{}' collection",
                document.kind().as_str(),
                collection.as_str()
            ))),
        }
    };
}

#[derive(Clone, Default)]
pub struct Workspace {
    documents: Arc<RwLock<HashMap<Uuid, Document>>>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a blank document of `kind`; date fields default to today.
    pub async fn create(&self, kind: DocumentKind) -> (Uuid, Document) {
        let id = Uuid::new_v4();
        let document = Document::new(kind);
        self.documents.write().await.insert(id, document.clone());
        info!(%id, kind = kind.as_str(), "Document created");
        (id, document)
    }

    /// A snapshot of the current document.
    pub async fn get(&self, id: Uuid) -> Result<Document, AppError> {
        self.documents
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Replaces the whole document. The kind cannot change.
    pub async fn replace(&self, id: Uuid, document: Document) -> Result<Document, AppError> {
        let mut documents = self.documents.write().await;
        let current = documents.get_mut(&id).ok_or_else(|| not_found(id))?;
        ensure_same_kind(current.kind(), document.kind())?;
        *current = document.clone();
        Ok(document)
    }

    /// Applies a JSON merge-patch to the document's fields.
    pub async fn patch(&self, id: Uuid, patch: &Value) -> Result<Document, AppError> {
        let mut documents = self.documents.write().await;
        let current = documents.get_mut(&id).ok_or_else(|| not_found(id))?;

        let mut value = serde_json::to_value(&*current).map_err(anyhow::Error::from)?;
        merge_json(&mut value, patch);
        let updated: Document = serde_json::from_value(value)
            .map_err(|e| AppError::Validation(format!("invalid document patch: {e}")))?;
        ensure_same_kind(current.kind(), updated.kind())?;

        *current = updated.clone();
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if self.documents.write().await.remove(&id).is_none() {
            return Err(not_found(id));
        }
        info!(%id, "Document discarded");
        Ok(())
    }

    /// Appends a blank entry with a fresh id and returns it.
    pub async fn append_entry(&self, id: Uuid, collection: Collection) -> Result<Value, AppError> {
        let mut documents = self.documents.write().await;
        let document = documents.get_mut(&id).ok_or_else(|| not_found(id))?;
        let appended = with_collection!(document, collection, |entries| {
            serde_json::to_value(entry::append_entry(entries))
        })?;
        Ok(appended.map_err(anyhow::Error::from)?)
    }

    /// Merges `patch` into one entry; the entry id never changes.
    pub async fn update_entry(
        &self,
        id: Uuid,
        collection: Collection,
        entry_id: &str,
        patch: &Value,
    ) -> Result<Value, AppError> {
        let mut documents = self.documents.write().await;
        let document = documents.get_mut(&id).ok_or_else(|| not_found(id))?;
        let updated = with_collection!(document, collection, |entries| {
            entry::update_entry(entries, entry_id, patch)
                .and_then(|e| serde_json::to_value(e).map_err(EntryError::from))
        })?;
        Ok(updated?)
    }

    pub async fn remove_entry(
        &self,
        id: Uuid,
        collection: Collection,
        entry_id: &str,
    ) -> Result<(), AppError> {
        let mut documents = self.documents.write().await;
        let document = documents.get_mut(&id).ok_or_else(|| not_found(id))?;
        let removed = with_collection!(document, collection, |entries| {
            entry::remove_entry(entries, entry_id)
        })?;
        if removed {
            Ok(())
        } else {
            Err(EntryError::NotFound(entry_id.to_string()).into())
        }
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Document {id} not found"))
}

fn ensure_same_kind(current: DocumentKind, incoming: DocumentKind) -> Result<(), AppError> {
    if current == incoming {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "cannot turn a {} into a {}",
            current.as_str(),
            incoming.as_str()
        )))
    }
}
