//! Local UI chrome state (active tab, modal visibility).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`knowledge`,
//! `diagnosis`) so page chrome can evolve independently of backend data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::forms::{Reload, Settlement};

/// Top-level tabs of the home page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    /// Analyze form and result card.
    #[default]
    Diagnosis,
    /// Category and knowledge lists with create dialogs.
    Knowledge,
}

/// UI state for tabs and modal dialogs.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_tab: Tab,
    pub category_modal_open: bool,
    pub knowledge_modal_open: bool,
}

impl UiState {
    /// Hide the dialog whose save just succeeded. Failures leave it open.
    pub fn apply_settlement(&mut self, settlement: &Settlement) {
        match settlement {
            Settlement::Saved(Reload::Categories) => self.category_modal_open = false,
            Settlement::Saved(Reload::Knowledge) => self.knowledge_modal_open = false,
            Settlement::Failed(_) => {}
        }
    }
}
