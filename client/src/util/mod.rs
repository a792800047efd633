//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (cookies, alerts,
//! fetch scheduling) from page and component logic to improve reuse and
//! testability.

pub mod alert;
pub mod cookie;
pub mod loaders;
pub mod view_model;
