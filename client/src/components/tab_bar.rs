//! Tab strip switching between diagnosis and knowledge base.

use leptos::prelude::*;

use crate::state::ui::{Tab, UiState};

#[component]
pub fn TabBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active = Memo::new(move |_| ui.with(|u| u.active_tab));

    view! {
        <ul class="nav nav-tabs" role="tablist">
            <TabButton tab=Tab::Diagnosis label="Diagnosis" active=active ui=ui/>
            <TabButton tab=Tab::Knowledge label="Knowledge Base" active=active ui=ui/>
        </ul>
    }
}

#[component]
fn TabButton(tab: Tab, label: &'static str, active: Memo<Tab>, ui: RwSignal<UiState>) -> impl IntoView {
    view! {
        <li class="nav-item" role="presentation">
            <button
                class="nav-link"
                class:active=move || active.get() == tab
                type="button"
                role="tab"
                aria-selected=move || if active.get() == tab { "true" } else { "false" }
                on:click=move |ev| {
                    ev.prevent_default();
                    ui.update(|u| u.active_tab = tab);
                }
            >
                {label}
            </button>
        </li>
    }
}
