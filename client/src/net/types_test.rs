use super::*;
use serde_json::json;

#[test]
fn category_without_description_deserializes() {
    let category: Category = serde_json::from_value(json!({ "id": 3, "name": "Network" })).unwrap();
    assert_eq!(category.id, 3);
    assert_eq!(category.name, "Network");
    assert!(category.description.is_none());
    assert!(category.created_at.is_none());
}

#[test]
fn category_accepts_float_encoded_id() {
    let category: Category =
        serde_json::from_value(json!({ "id": 7.0, "name": "Disk", "description": "storage" })).unwrap();
    assert_eq!(category.id, 7);
    assert_eq!(category.description.as_deref(), Some("storage"));
}

#[test]
fn category_rejects_fractional_id() {
    let result = serde_json::from_value::<Category>(json!({ "id": 1.5, "name": "x" }));
    assert!(result.is_err());
}

#[test]
fn knowledge_entry_list_shape_deserializes() {
    let entry: KnowledgeEntry = serde_json::from_value(json!({
        "id": 11,
        "title": "Disk full",
        "category_name": "Storage",
        "symptoms": "write errors",
        "solution": "rotate logs",
    }))
    .unwrap();
    assert_eq!(entry.id, 11);
    assert_eq!(entry.category, None);
    assert_eq!(entry.category_name, "Storage");
}

#[test]
fn knowledge_entry_full_shape_deserializes() {
    let entry: KnowledgeEntry = serde_json::from_value(json!({
        "id": 11,
        "category": 2,
        "category_name": "Storage",
        "title": "Disk full",
        "symptoms": "write errors",
        "solution": "rotate logs",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z",
    }))
    .unwrap();
    assert_eq!(entry.category, Some(2));
    assert_eq!(entry.updated_at.as_deref(), Some("2024-01-02T00:00:00Z"));
}

#[test]
fn diagnosis_result_without_reference_cases_defaults_to_empty() {
    let result: DiagnosisResult = serde_json::from_value(json!({
        "category": "Network",
        "analysis": "packet loss",
        "solution": "replace cable",
    }))
    .unwrap();
    assert!(result.reference_cases.is_empty());
    assert_eq!(result.id, None);
    assert_eq!(result.matched_knowledge_id, None);
}

#[test]
fn diagnosis_result_keeps_reference_case_order_and_similarity_text() {
    let result: DiagnosisResult = serde_json::from_value(json!({
        "id": 42,
        "category": "Network",
        "analysis": "packet loss",
        "solution": "replace cable",
        "matched_knowledge_id": null,
        "reference_cases": [
            { "id": 5, "title": "B", "similarity": "87.50%", "category": "Net", "symptoms": "s", "solution": "x" },
            { "title": "A", "similarity": 12.5, "category": "Net", "symptoms": "s", "solution": "y" },
        ],
    }))
    .unwrap();
    assert_eq!(result.id, Some(42));
    assert_eq!(result.reference_cases.len(), 2);
    assert_eq!(result.reference_cases[0].title, "B");
    assert_eq!(result.reference_cases[0].similarity, "87.50%");
    assert_eq!(result.reference_cases[1].title, "A");
    assert_eq!(result.reference_cases[1].similarity, "12.5");
    assert_eq!(result.reference_cases[1].id, None);
}

#[test]
fn diagnosis_request_serializes_three_fields() {
    let request = DiagnosisRequest {
        alert_info: "cpu high".to_owned(),
        metrics_info: "load 12".to_owned(),
        log_info: String::new(),
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({ "alert_info": "cpu high", "metrics_info": "load 12", "log_info": "" })
    );
}

fn analyzed(solution: serde_json::Value) -> Result<DiagnosisResult, serde_json::Error> {
    serde_json::from_value(json!({
        "category": "Network",
        "analysis": "packet loss",
        "solution": solution,
    }))
}

#[test]
fn diagnosis_solution_string_is_kept_verbatim() {
    let result = analyzed(json!("  replace cable  ")).unwrap();
    assert_eq!(result.solution, "  replace cable  ");
}

#[test]
fn diagnosis_solution_list_becomes_lines() {
    let result = analyzed(json!(["restart switch", "replace cable"])).unwrap();
    assert_eq!(result.solution, "restart switch\nreplace cable");
}

#[test]
fn diagnosis_solution_object_becomes_key_value_lines() {
    let result = analyzed(json!({ "immediate": "restart switch", "longterm": ["add redundancy"] })).unwrap();
    assert_eq!(result.solution, "immediate: restart switch\nlongterm: add redundancy");
}

#[test]
fn diagnosis_number_and_null_fields_become_text() {
    let result: DiagnosisResult = serde_json::from_value(json!({
        "category": 404,
        "analysis": null,
        "solution": true,
    }))
    .unwrap();
    assert_eq!(result.category, "404");
    assert_eq!(result.analysis, "");
    assert_eq!(result.solution, "true");
}

#[test]
fn diagnosis_result_missing_solution_is_rejected() {
    let result = serde_json::from_value::<DiagnosisResult>(json!({ "category": "Network", "analysis": "x" }));
    assert!(result.is_err());
}
