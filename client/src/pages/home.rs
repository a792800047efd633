//! Home page: tab bar over the diagnosis and knowledge-base panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. Mounting it starts the category and knowledge
//! loaders, so both lists are fetched once on page load regardless of which
//! tab is visible.

use leptos::prelude::*;

use crate::components::tab_bar::TabBar;
use crate::pages::diagnosis::DiagnosisPanel;
use crate::pages::knowledge::KnowledgePanel;
use crate::state::knowledge::KnowledgeState;
use crate::state::ui::{Tab, UiState};
use crate::util::loaders::{install_category_loader, install_knowledge_loader};

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let knowledge = expect_context::<RwSignal<KnowledgeState>>();

    install_category_loader(knowledge);
    install_knowledge_loader(knowledge);

    let active = Memo::new(move |_| ui.with(|u| u.active_tab));

    view! {
        <div class="container home-page">
            <h1 class="home-page__title">"Fault Diagnosis"</h1>
            <TabBar/>
            <div class="tab-content">
                <Show
                    when=move || active.get() == Tab::Diagnosis
                    fallback=|| view! { <KnowledgePanel/> }
                >
                    <DiagnosisPanel/>
                </Show>
            </div>
        </div>
    }
}
