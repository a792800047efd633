//! Category and knowledge lists as last returned by the backend.

#[cfg(test)]
#[path = "knowledge_test.rs"]
mod knowledge_test;

use super::forms::{Reload, Settlement};
use crate::net::types::{Category, KnowledgeEntry};
use crate::util::alert::{FailedAction, failure_message};

/// Backend-owned lists plus the counters that drive re-fetching.
///
/// Loaders watch `categories_seq` / `entries_seq`; bumping a counter asks for
/// exactly one fetch of that list.
#[derive(Clone, Debug, Default)]
pub struct KnowledgeState {
    pub categories: Vec<Category>,
    pub entries: Vec<KnowledgeEntry>,
    pub categories_loading: bool,
    pub entries_loading: bool,
    /// Backend-side filter for the knowledge list.
    pub category_filter: Option<i64>,
    /// Last category load failure, shown above the lists.
    pub categories_error: Option<String>,
    /// Last knowledge load failure, shown above the lists.
    pub entries_error: Option<String>,
    pub categories_seq: u64,
    pub entries_seq: u64,
}

impl KnowledgeState {
    pub fn request_categories(&mut self) {
        self.categories_seq = self.categories_seq.wrapping_add(1);
    }

    pub fn request_entries(&mut self) {
        self.entries_seq = self.entries_seq.wrapping_add(1);
    }

    /// Change the knowledge filter. Returns `true` (and requests a reload) on change.
    pub fn set_category_filter(&mut self, filter: Option<i64>) -> bool {
        if self.category_filter == filter {
            return false;
        }
        self.category_filter = filter;
        self.request_entries();
        true
    }

    /// Request the reload a successful save calls for.
    pub fn apply_settlement(&mut self, settlement: &Settlement) {
        match settlement {
            Settlement::Saved(Reload::Categories) => self.request_categories(),
            Settlement::Saved(Reload::Knowledge) => self.request_entries(),
            Settlement::Failed(_) => {}
        }
    }

    /// Store the result of the category fetch issued for `seq`. Returns alert
    /// text on failure.
    ///
    /// A failed fetch keeps the previously rendered list. A result for an
    /// older `seq` is dropped; the newer fetch is still in flight.
    pub fn apply_categories(&mut self, seq: u64, result: Result<Vec<Category>, String>) -> Option<String> {
        if seq != self.categories_seq {
            return None;
        }
        self.categories_loading = false;
        match result {
            Ok(categories) => {
                self.categories = categories;
                self.categories_error = None;
                None
            }
            Err(message) => {
                let text = failure_message(FailedAction::Load, &message);
                self.categories_error = Some(text.clone());
                Some(text)
            }
        }
    }

    /// Store the result of the knowledge fetch issued for `seq`. Returns alert
    /// text on failure.
    ///
    /// Every filter change bumps `entries_seq`, so a slow response for a
    /// previous filter never replaces the list for the current one.
    pub fn apply_entries(&mut self, seq: u64, result: Result<Vec<KnowledgeEntry>, String>) -> Option<String> {
        if seq != self.entries_seq {
            return None;
        }
        self.entries_loading = false;
        match result {
            Ok(entries) => {
                self.entries = entries;
                self.entries_error = None;
                None
            }
            Err(message) => {
                let text = failure_message(FailedAction::Load, &message);
                self.entries_error = Some(text.clone());
                Some(text)
            }
        }
    }

    /// Outstanding load failures, categories first.
    pub fn load_errors(&self) -> Vec<String> {
        self.categories_error.iter().chain(self.entries_error.iter()).cloned().collect()
    }
}
