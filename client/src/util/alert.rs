//! Blocking user-facing alerts for failed requests.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

/// The user action a failure message refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailedAction {
    Diagnosis,
    Save,
    Load,
}

impl FailedAction {
    fn label(self) -> &'static str {
        match self {
            Self::Diagnosis => "Diagnosis",
            Self::Save => "Save",
            Self::Load => "Load",
        }
    }
}

/// Alert text for a failed request, e.g. `"Save failed: name already exists"`.
pub fn failure_message(action: FailedAction, message: &str) -> String {
    format!("{} failed: {message}", action.label())
}

/// Show `message` in a blocking `window.alert`. Logged only during SSR.
pub fn alert(message: &str) {
    leptos::logging::warn!("{message}");
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
