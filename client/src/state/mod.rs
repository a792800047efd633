//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`knowledge`, `diagnosis`, `forms`, `ui`) so each
//! component subscribes to a small focused model and typing in a form does
//! not re-render the lists.

pub mod diagnosis;
pub mod forms;
pub mod knowledge;
pub mod ui;
