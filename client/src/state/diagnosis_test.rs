use super::*;

fn result(category: &str) -> DiagnosisResult {
    DiagnosisResult {
        id: None,
        category: category.to_owned(),
        analysis: "a".to_owned(),
        solution: "s".to_owned(),
        matched_knowledge_id: None,
        reference_cases: Vec::new(),
    }
}

#[test]
fn apply_result_success_stores_result() {
    let mut state = DiagnosisState::default();
    state.begin();
    assert!(state.pending);
    assert_eq!(state.apply_result(Ok(result("Network"))), None);
    assert!(!state.pending);
    assert_eq!(state.result.as_ref().map(|r| r.category.as_str()), Some("Network"));
}

#[test]
fn apply_result_failure_keeps_previous_result() {
    let mut state = DiagnosisState { result: Some(result("Disk")), pending: true };
    let alert = state.apply_result(Err("alert info required".to_owned()));
    assert_eq!(alert.as_deref(), Some("Diagnosis failed: alert info required"));
    assert!(!state.pending);
    assert_eq!(state.result.as_ref().map(|r| r.category.as_str()), Some("Disk"));
}
