use super::*;

use leptos::tachys::view::RenderHtml;

use crate::net::types::Category;

fn tag_with_id<'a>(html: &'a str, id: &str) -> &'a str {
    let at = html.find(&format!("id=\"{id}\"")).unwrap();
    let start = html[..at].rfind('<').unwrap();
    let end = at + html[at..].find('>').unwrap();
    &html[start..=end]
}

#[test]
fn category_selector_requests_focus_when_opened() {
    let owner = Owner::new();
    let html = owner.with(|| {
        let knowledge = KnowledgeState {
            categories: vec![Category {
                id: 4,
                name: "Storage".to_owned(),
                description: None,
                created_at: None,
                updated_at: None,
            }],
            ..KnowledgeState::default()
        };
        provide_context(RwSignal::new(UiState::default()));
        provide_context(RwSignal::new(knowledge));
        provide_context(RwSignal::new(KnowledgeForm::default()));
        view! { <KnowledgeModal on_close=Callback::new(|()| {})/> }.to_html()
    });

    let tag = tag_with_id(&html, "knowledgeCategory");
    assert!(tag.starts_with("<select"));
    assert!(tag.contains("autofocus"));
    assert!(html.contains("Storage"));
}
