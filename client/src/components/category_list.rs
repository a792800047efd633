//! Category list container.

use leptos::prelude::*;

use crate::state::knowledge::KnowledgeState;
use crate::util::view_model::{CategoryFragment, category_fragments};

/// Renders one item per category, in the order the backend returned them.
#[component]
pub fn CategoryList() -> impl IntoView {
    let knowledge = expect_context::<RwSignal<KnowledgeState>>();
    let fragments = Memo::new(move |_| knowledge.with(|s| category_fragments(&s.categories)));

    view! {
        <div class="list-group" id="categoryList">
            {move || {
                fragments
                    .get()
                    .into_iter()
                    .map(|fragment| view! { <CategoryItem fragment=fragment/> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn CategoryItem(fragment: CategoryFragment) -> impl IntoView {
    view! {
        <div class="list-group-item" data-category-id=fragment.key.to_string()>
            <h5>{fragment.name}</h5>
            <p>{fragment.description}</p>
        </div>
    }
}
