use super::*;

use leptos::tachys::view::RenderHtml;

/// The opening tag of the element carrying `id`.
fn tag_with_id<'a>(html: &'a str, id: &str) -> &'a str {
    let at = html.find(&format!("id=\"{id}\"")).unwrap();
    let start = html[..at].rfind('<').unwrap();
    let end = at + html[at..].find('>').unwrap();
    &html[start..=end]
}

#[test]
fn name_field_requests_focus_when_opened() {
    let owner = Owner::new();
    let html = owner.with(|| {
        provide_context(RwSignal::new(UiState::default()));
        provide_context(RwSignal::new(KnowledgeState::default()));
        provide_context(RwSignal::new(CategoryForm::default()));
        view! { <CategoryModal on_close=Callback::new(|()| {})/> }.to_html()
    });

    let tag = tag_with_id(&html, "categoryName");
    assert!(tag.starts_with("<input"));
    assert!(tag.contains("autofocus"));
}
