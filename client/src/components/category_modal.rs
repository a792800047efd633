//! Modal dialog for creating a category.

#[cfg(all(test, feature = "ssr"))]
#[path = "category_modal_test.rs"]
mod category_modal_test;

use leptos::prelude::*;

use crate::state::forms::CategoryForm;
#[cfg(feature = "hydrate")]
use crate::state::forms::{Reload, settle_save};
use crate::state::knowledge::KnowledgeState;
use crate::state::ui::UiState;

/// Create-category dialog. Closing it keeps the typed values; a successful
/// save clears them, hides the dialog and reloads the category list.
#[component]
pub fn CategoryModal(on_close: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let knowledge = expect_context::<RwSignal<KnowledgeState>>();
    let form = expect_context::<RwSignal<CategoryForm>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = form.get_untracked().payload();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let settlement = settle_save(crate::net::api::create_category(&payload).await, Reload::Categories);
            if let Some(message) = settlement.alert() {
                crate::util::alert::alert(&message);
                return;
            }
            form.update(CategoryForm::reset);
            ui.update(|u| u.apply_settlement(&settlement));
            knowledge.update(|k| k.apply_settlement(&settlement));
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, ui, knowledge);
        }
    };

    // Focus on mount; `autofocus` alone only applies during page load.
    let name_ref = NodeRef::<leptos::html::Input>::new();
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(field) = name_ref.get() {
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
                id="categoryModal"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2>"New Category"</h2>
                <form id="categoryForm" on:submit=on_submit>
                    <label class="dialog__label">
                        "Name"
                        <input
                            class="dialog__input"
                            id="categoryName"
                            autofocus=true
                            node_ref=name_ref
                            name="name"
                            type="text"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.name = value);
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__input"
                            id="categoryDescription"
                            name="description"
                            rows="3"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.description = value);
                            }
                        ></textarea>
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" id="saveCategory" type="submit">
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
