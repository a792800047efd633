//! Knowledge list container.

use leptos::prelude::*;

use crate::state::knowledge::KnowledgeState;
use crate::util::view_model::{KnowledgeFragment, knowledge_fragments};

/// Renders one item per knowledge entry, in backend order. Empty list, empty container.
#[component]
pub fn KnowledgeList() -> impl IntoView {
    let knowledge = expect_context::<RwSignal<KnowledgeState>>();
    let fragments = Memo::new(move |_| knowledge.with(|s| knowledge_fragments(&s.entries)));

    view! {
        <div class="list-group" id="knowledgeList">
            {move || {
                fragments
                    .get()
                    .into_iter()
                    .map(|fragment| view! { <KnowledgeItem fragment=fragment/> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn KnowledgeItem(fragment: KnowledgeFragment) -> impl IntoView {
    view! {
        <div class="list-group-item" data-knowledge-id=fragment.key.to_string()>
            <h5>{fragment.title}</h5>
            <p>
                <strong>"Category: "</strong>
                {fragment.category_name}
            </p>
            <p>
                <strong>"Symptoms: "</strong>
                {fragment.symptoms}
            </p>
            <p>
                <strong>"Solution: "</strong>
                {fragment.solution}
            </p>
        </div>
    }
}
