//! Typed view models for every rendered list and card.
//!
//! DESIGN
//! ======
//! Records are mapped one-to-one, in backend order, to small display structs.
//! Components render these as text nodes, so nothing the backend returns is
//! ever interpreted as markup.

#[cfg(test)]
#[path = "view_model_test.rs"]
mod view_model_test;

use crate::net::types::{Category, DiagnosisResult, KnowledgeEntry, ReferenceCase};

/// One row of the category list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryFragment {
    pub key: i64,
    pub name: String,
    /// Empty when the category has no description.
    pub description: String,
}

/// One row of the knowledge list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnowledgeFragment {
    pub key: i64,
    pub title: String,
    pub category_name: String,
    pub symptoms: String,
    pub solution: String,
}

/// One `<option>` of a category selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

/// The result card of a diagnosis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosisCard {
    pub category: String,
    pub analysis: String,
    pub solution: String,
    /// Empty when the backend found no similar cases; the section is then hidden.
    pub references: Vec<ReferenceCard>,
}

/// One similar case shown under the diagnosis result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceCard {
    pub title: String,
    pub similarity_badge: String,
    pub category: String,
    pub symptoms: String,
    pub solution: String,
}

pub fn category_fragments(categories: &[Category]) -> Vec<CategoryFragment> {
    categories
        .iter()
        .map(|c| CategoryFragment {
            key: c.id,
            name: c.name.clone(),
            description: c.description.clone().unwrap_or_default(),
        })
        .collect()
}

pub fn knowledge_fragments(entries: &[KnowledgeEntry]) -> Vec<KnowledgeFragment> {
    entries
        .iter()
        .map(|e| KnowledgeFragment {
            key: e.id,
            title: e.title.clone(),
            category_name: e.category_name.clone(),
            symptoms: e.symptoms.clone(),
            solution: e.solution.clone(),
        })
        .collect()
}

pub fn category_options(categories: &[Category]) -> Vec<CategoryOption> {
    categories
        .iter()
        .map(|c| CategoryOption { value: c.id.to_string(), label: c.name.clone() })
        .collect()
}

pub fn diagnosis_card(result: &DiagnosisResult) -> DiagnosisCard {
    DiagnosisCard {
        category: result.category.clone(),
        analysis: result.analysis.clone(),
        solution: result.solution.clone(),
        references: result.reference_cases.iter().map(reference_card).collect(),
    }
}

fn reference_card(case: &ReferenceCase) -> ReferenceCard {
    ReferenceCard {
        title: case.title.clone(),
        similarity_badge: format!("Similarity: {}", case.similarity),
        category: case.category.clone(),
        symptoms: case.symptoms.clone(),
        solution: case.solution.clone(),
    }
}
