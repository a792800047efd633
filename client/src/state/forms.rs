//! Form field state and the rules applied when a submission settles.
//!
//! DESIGN
//! ======
//! A save produces a [`Settlement`]; each state model applies it to itself
//! (`UiState` hides the dialog, `KnowledgeState` requests one reload, the form
//! resets). A failure changes nothing and only yields alert text, so the user
//! can correct the fields and resubmit.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{Category, DiagnosisRequest, NewCategory, NewKnowledge};
use crate::util::alert::{FailedAction, failure_message};

/// Which list must be re-fetched after a successful save.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reload {
    Categories,
    Knowledge,
}

/// Outcome of a finished create request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Settlement {
    Saved(Reload),
    Failed(String),
}

impl Settlement {
    /// Alert text to show, if the save failed.
    pub fn alert(&self) -> Option<String> {
        match self {
            Self::Saved(_) => None,
            Self::Failed(message) => Some(failure_message(FailedAction::Save, message)),
        }
    }
}

/// Turn a create result into a settlement for the given list.
pub fn settle_save(result: Result<(), String>, target: Reload) -> Settlement {
    match result {
        Ok(()) => Settlement::Saved(target),
        Err(message) => Settlement::Failed(message),
    }
}

// =============================================================================
// FORMS
// =============================================================================

/// Fields of the create-category dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
}

impl CategoryForm {
    pub fn payload(&self) -> NewCategory {
        NewCategory { name: self.name.clone(), description: self.description.clone() }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Fields of the create-knowledge dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KnowledgeForm {
    /// Selected category id, as the selector's option value.
    pub category: String,
    pub title: String,
    pub symptoms: String,
    pub solution: String,
}

impl KnowledgeForm {
    pub fn payload(&self) -> NewKnowledge {
        NewKnowledge {
            category: self.category.clone(),
            title: self.title.clone(),
            symptoms: self.symptoms.clone(),
            solution: self.solution.clone(),
        }
    }

    /// Clear every field; the selector falls back to the first category.
    pub fn reset(&mut self, categories: &[Category]) {
        *self = Self::default();
        self.sync_category(categories);
    }

    /// Keep the selection pointing at an existing option.
    ///
    /// An empty or vanished selection moves to the first category, the way a
    /// native `<select>` does when its options are replaced.
    pub fn sync_category(&mut self, categories: &[Category]) {
        let still_listed = categories.iter().any(|c| c.id.to_string() == self.category);
        if !still_listed {
            self.category = categories.first().map(|c| c.id.to_string()).unwrap_or_default();
        }
    }
}

/// Fields of the diagnosis form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosisForm {
    pub alert_info: String,
    pub metrics_info: String,
    pub log_info: String,
}

impl DiagnosisForm {
    pub fn payload(&self) -> DiagnosisRequest {
        DiagnosisRequest {
            alert_info: self.alert_info.clone(),
            metrics_info: self.metrics_info.clone(),
            log_info: self.log_info.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
