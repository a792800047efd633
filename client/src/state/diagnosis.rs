//! Last diagnosis result shown on the diagnosis tab.

#[cfg(test)]
#[path = "diagnosis_test.rs"]
mod diagnosis_test;

use crate::net::types::DiagnosisResult;
use crate::util::alert::{FailedAction, failure_message};

#[derive(Clone, Debug, Default)]
pub struct DiagnosisState {
    /// Most recent successful analysis; replaced on every success.
    pub result: Option<DiagnosisResult>,
    /// An analyze request is in flight. Display only; submissions are not gated.
    pub pending: bool,
}

impl DiagnosisState {
    pub fn begin(&mut self) {
        self.pending = true;
    }

    /// Store an analyze result. Returns alert text on failure, leaving the
    /// previous result in place.
    pub fn apply_result(&mut self, result: Result<DiagnosisResult, String>) -> Option<String> {
        self.pending = false;
        match result {
            Ok(result) => {
                self.result = Some(result);
                None
            }
            Err(message) => Some(failure_message(FailedAction::Diagnosis, &message)),
        }
    }
}
