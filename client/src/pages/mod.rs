//! Route-level page components.

pub mod diagnosis;
pub mod home;
pub mod knowledge;
