use leptos::*;

use crate::models::review::TagInfo;

#[component]
pub fn TagChip(data: TagInfo, #[prop(optional, into)] class: String) -> impl IntoView {
    let href = format!("/tags/{}", urlencoding::encode(&data.slug_name));
    let label = data.label().to_string();

    view! {
        <a href=href class=format!("badge-tag rounded-1 {class}")>
            <span>{label}</span>
        </a>
    }
}
