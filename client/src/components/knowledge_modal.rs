//! Modal dialog for creating a knowledge entry.

#[cfg(all(test, feature = "ssr"))]
#[path = "knowledge_modal_test.rs"]
mod knowledge_modal_test;

use leptos::prelude::*;

use crate::state::forms::KnowledgeForm;
#[cfg(feature = "hydrate")]
use crate::state::forms::{Reload, settle_save};
use crate::state::knowledge::KnowledgeState;
use crate::state::ui::UiState;
use crate::util::view_model::category_options;

/// Create-knowledge dialog with a category selector fed by the latest
/// category fetch.
#[component]
pub fn KnowledgeModal(on_close: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let knowledge = expect_context::<RwSignal<KnowledgeState>>();
    let form = expect_context::<RwSignal<KnowledgeForm>>();

    let categories = Memo::new(move |_| knowledge.with(|s| s.categories.clone()));
    let selected = Memo::new(move |_| form.with(|f| f.category.clone()));

    // Keep the selection valid whenever the option list is replaced.
    Effect::new(move || {
        let categories = categories.get();
        form.update(|f| f.sync_category(&categories));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = form.get_untracked().payload();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let settlement = settle_save(crate::net::api::create_knowledge(&payload).await, Reload::Knowledge);
            if let Some(message) = settlement.alert() {
                crate::util::alert::alert(&message);
                return;
            }
            let categories = knowledge.with_untracked(|k| k.categories.clone());
            form.update(|f| f.reset(&categories));
            ui.update(|u| u.apply_settlement(&settlement));
            knowledge.update(|k| k.apply_settlement(&settlement));
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, ui);
        }
    };

    // Focus on mount; `autofocus` alone only applies during page load.
    let category_ref = NodeRef::<leptos::html::Select>::new();
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(field) = category_ref.get() {
            let _ = field.focus();
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog"
                id="knowledgeModal"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2>"New Knowledge"</h2>
                <form id="knowledgeForm" on:submit=on_submit>
                    <label class="dialog__label">
                        "Category"
                        <select
                            class="dialog__input"
                            id="knowledgeCategory"
                            autofocus=true
                            node_ref=category_ref
                            name="category"
                            prop:value=move || selected.get()
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.category = value);
                            }
                        >
                            {move || {
                                let current = selected.get();
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
                    </label>
                    <label class="dialog__label">
                        "Title"
                        <input
                            class="dialog__input"
                            id="knowledgeTitle"
                            name="title"
                            type="text"
                            prop:value=move || form.with(|f| f.title.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.title = value);
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Symptoms"
                        <textarea
                            class="dialog__input"
                            id="knowledgeSymptoms"
                            name="symptoms"
                            rows="3"
                            prop:value=move || form.with(|f| f.symptoms.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.symptoms = value);
                            }
                        ></textarea>
                    </label>
                    <label class="dialog__label">
                        "Solution"
                        <textarea
                            class="dialog__input"
                            id="knowledgeSolution"
                            name="solution"
                            rows="3"
                            prop:value=move || form.with(|f| f.solution.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.solution = value);
                            }
                        ></textarea>
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" id="saveKnowledge" type="submit">
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
