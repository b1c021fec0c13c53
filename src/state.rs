//! Per-document numbering state, keyed by document path.
//!
//! Placeholder numbers must stay stable while a document is edited, so the
//! resolver outlives individual passes. Registries are rebuilt on every pass
//! and kept here only so hosts can query the latest scan (hover, panels).

use std::collections::HashMap;

use serde::Serialize;

use crate::labels::{CustomLabelRegistry, LabelRegistry};
use crate::placeholder::PlaceholderResolver;

#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentState {
    pub placeholders: PlaceholderResolver,
    pub example_labels: LabelRegistry,
    pub custom_labels: CustomLabelRegistry,
}

impl DocumentState {
    pub fn reset(&mut self) {
        self.placeholders.reset();
        self.example_labels = LabelRegistry::default();
        self.custom_labels = CustomLabelRegistry::default();
    }
}

#[derive(Debug, Default)]
pub struct DocumentStateStore {
    documents: HashMap<String, DocumentState>,
}

impl DocumentStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&DocumentState> {
        self.documents.get(path)
    }

    pub fn get_or_create(&mut self, path: &str) -> &mut DocumentState {
        self.documents.entry(path.to_string()).or_insert_with(|| {
            log::debug!("Creating state for document: {}", path);
            DocumentState::default()
        })
    }

    /// Starts numbering from scratch, e.g. when a document is re-opened.
    pub fn reset(&mut self, path: &str) {
        if let Some(state) = self.documents.get_mut(path) {
            log::debug!("Resetting state for document: {}", path);
            state.reset();
        }
    }

    pub fn remove(&mut self, path: &str) -> Option<DocumentState> {
        self.documents.remove(path)
    }

    /// Moves state to a new identity; the renamed document starts fresh.
    pub fn rename(&mut self, old_path: &str, new_path: &str) {
        if self.documents.remove(old_path).is_some() {
            log::debug!("Document renamed: {} -> {}", old_path, new_path);
            self.documents
                .insert(new_path.to_string(), DocumentState::default());
        }
    }

    pub fn clear_all(&mut self) {
        self.documents.clear();
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
