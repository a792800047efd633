//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::diagnosis::DiagnosisState;
use crate::state::forms::{CategoryForm, DiagnosisForm, KnowledgeForm};
use crate::state::knowledge::KnowledgeState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
/// Form state lives here so a dialog closed without saving keeps its values.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(UiState::default()));
    provide_context(RwSignal::new(KnowledgeState::default()));
    provide_context(RwSignal::new(DiagnosisState::default()));
    provide_context(RwSignal::new(DiagnosisForm::default()));
    provide_context(RwSignal::new(CategoryForm::default()));
    provide_context(RwSignal::new(KnowledgeForm::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/faultdesk-ui.css"/>
        <Title text="Fault Diagnosis"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
