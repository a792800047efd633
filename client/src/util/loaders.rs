//! List loaders driven by the reload counters in `KnowledgeState`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each loader runs its fetch once on hydration and once more every time its
//! counter is bumped. Each fetch carries the counter value it was issued for,
//! and `KnowledgeState` drops a response once a newer fetch of the same list
//! has been requested. The two lists live in disjoint containers, so their
//! relative order does not matter.

use leptos::prelude::*;

use crate::state::knowledge::KnowledgeState;

/// Fetch the category list whenever `categories_seq` changes.
pub fn install_category_loader(knowledge: RwSignal<KnowledgeState>) {
    let seq = Memo::new(move |_| knowledge.with(|s| s.categories_seq));
    Effect::new(move || {
        let seq = seq.get();
        knowledge.update(|s| s.categories_loading = true);
        leptos::logging::log!("loading categories (seq {seq})");

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_categories().await;
            if let Some(message) = knowledge.try_update(|s| s.apply_categories(seq, result)).flatten() {
                crate::util::alert::alert(&message);
            }
        });
    });
}

/// Fetch the knowledge list whenever `entries_seq` changes, honoring the
/// current category filter.
pub fn install_knowledge_loader(knowledge: RwSignal<KnowledgeState>) {
    let seq = Memo::new(move |_| knowledge.with(|s| s.entries_seq));
    Effect::new(move || {
        let seq = seq.get();
        let filter = knowledge.with_untracked(|s| s.category_filter);
        knowledge.update(|s| s.entries_loading = true);
        leptos::logging::log!("loading knowledge (seq {seq}, filter {filter:?})");

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_knowledge(filter).await;
            if let Some(message) = knowledge.try_update(|s| s.apply_entries(seq, result)).flatten() {
                crate::util::alert::alert(&message);
            }
        });
    });
}
