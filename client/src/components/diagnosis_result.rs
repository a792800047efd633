//! Result card for the latest diagnosis, with similar reference cases.

use leptos::prelude::*;

use crate::state::diagnosis::DiagnosisState;
use crate::util::view_model::{ReferenceCard, diagnosis_card};

/// Shows the most recent analysis; renders nothing until one succeeds.
#[component]
pub fn DiagnosisResultCard() -> impl IntoView {
    let diagnosis = expect_context::<RwSignal<DiagnosisState>>();
    let card = Memo::new(move |_| diagnosis.with(|s| s.result.as_ref().map(diagnosis_card)));

    view! {
        <div id="diagnosisResult">
            {move || {
                card.get()
                    .map(|card| {
                        let references = card.references;
                        let has_references = !references.is_empty();
                        view! {
                            <div class="card">
                                <div class="card-body">
                                    <h5 class="card-title">"Diagnosis Result"</h5>
                                    <p>
                                        <strong>"Fault category: "</strong>
                                        {card.category}
                                    </p>
                                    <p>
                                        <strong>"Analysis: "</strong>
                                        {card.analysis}
                                    </p>
                                    <p>
                                        <strong>"Solution: "</strong>
                                        {card.solution}
                                    </p>
                                </div>
                            </div>
                            <Show when=move || has_references>
                                <div class="mt-4">
                                    <h5>"Reference Cases"</h5>
                                    {references
                                        .clone()
                                        .into_iter()
                                        .map(|reference| view! { <ReferenceItem reference=reference/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            </Show>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn ReferenceItem(reference: ReferenceCard) -> impl IntoView {
    view! {
        <div class="card mb-3">
            <div class="card-body">
                <h6 class="card-title">
                    {reference.title}
                    " "
                    <span class="badge bg-info">{reference.similarity_badge}</span>
                </h6>
                <p class="card-text">
                    <strong>"Fault category: "</strong>
                    {reference.category}
                </p>
                <p class="card-text">
                    <strong>"Symptoms: "</strong>
                    {reference.symptoms}
                </p>
                <p class="card-text">
                    <strong>"Solution: "</strong>
                    {reference.solution}
                </p>
            </div>
        </div>
    }
}
