//! Knowledge-base tab: category and knowledge lists with create dialogs.

#[cfg(test)]
#[path = "knowledge_test.rs"]
mod knowledge_test;

use leptos::prelude::*;

use crate::components::category_list::CategoryList;
use crate::components::category_modal::CategoryModal;
use crate::components::knowledge_list::KnowledgeList;
use crate::components::knowledge_modal::KnowledgeModal;
use crate::state::knowledge::KnowledgeState;
use crate::state::ui::UiState;
use crate::util::view_model::category_options;

/// Value of the "All categories" filter option.
const ALL_CATEGORIES: &str = "";

/// Parse the filter selector's value; anything but a category id means no filter.
fn parse_category_filter(value: &str) -> Option<i64> {
    if value == ALL_CATEGORIES {
        return None;
    }
    value.trim().parse::<i64>().ok()
}

#[component]
pub fn KnowledgePanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let knowledge = expect_context::<RwSignal<KnowledgeState>>();

    let categories = Memo::new(move |_| knowledge.with(|s| s.categories.clone()));
    let filter = Memo::new(move |_| knowledge.with(|s| s.category_filter));
    let errors = Memo::new(move |_| knowledge.with(KnowledgeState::load_errors));
    let show_category = Memo::new(move |_| ui.with(|u| u.category_modal_open));
    let show_knowledge = Memo::new(move |_| ui.with(|u| u.knowledge_modal_open));

    let close_category = Callback::new(move |()| ui.update(|u| u.category_modal_open = false));
    let close_knowledge = Callback::new(move |()| ui.update(|u| u.knowledge_modal_open = false));

    view! {
        <div class="tab-pane active knowledge-panel">
            <header class="knowledge-panel__header toolbar">
                <button class="btn" on:click=move |_| ui.update(|u| u.category_modal_open = true)>
                    "+ New Category"
                </button>
                <button class="btn" on:click=move |_| ui.update(|u| u.knowledge_modal_open = true)>
                    "+ New Knowledge"
                </button>
                <span class="toolbar__spacer"></span>
                <select
                    class="form-select knowledge-panel__filter"
                    prop:value=move || filter.get().map(|id| id.to_string()).unwrap_or_default()
                    on:change=move |ev| {
                        let next = parse_category_filter(&event_target_value(&ev));
                        knowledge.update(|s| {
                            s.set_category_filter(next);
                        });
                    }
                >
                    <option value=ALL_CATEGORIES>"All categories"</option>
                    {move || {
                        let current = filter.get().map(|id| id.to_string()).unwrap_or_default();
                        category_options(&categories.get())
                            .into_iter()
                            .map(|option| {
                                let is_selected = option.value == current;
                                view! {
                                    <option value=option.value selected=is_selected>
                                        {option.label}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </header>

            {move || {
                errors
                    .get()
                    .into_iter()
                    .map(|message| view! { <p class="knowledge-panel__error">{message}</p> })
                    .collect::<Vec<_>>()
            }}

            <div class="knowledge-panel__columns">
                <section class="knowledge-panel__column">
                    <h4>"Categories"</h4>
                    <CategoryList/>
                </section>
                <section class="knowledge-panel__column">
                    <h4>"Knowledge"</h4>
                    <KnowledgeList/>
                </section>
            </div>

            <Show when=move || show_category.get()>
                <CategoryModal on_close=close_category/>
            </Show>
            <Show when=move || show_knowledge.get()>
                <KnowledgeModal on_close=close_knowledge/>
            </Show>
        </div>
    }
}
