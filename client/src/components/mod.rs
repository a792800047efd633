//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render lists, cards and dialogs while reading/writing shared
//! state from Leptos context providers.

pub mod category_list;
pub mod category_modal;
pub mod diagnosis_result;
pub mod knowledge_list;
pub mod knowledge_modal;
pub mod tab_bar;
