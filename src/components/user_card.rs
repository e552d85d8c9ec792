use leptos::*;

use crate::i18n::use_i18n;
use crate::models::review::UserInfo;

/// Avatar plus display name, linking to the user's profile.
#[component]
pub fn BaseUserCard(
    data: Option<UserInfo>,
    #[prop(default = "24")] avatar_size: &'static str,
) -> impl IntoView {
    let Some(user) = data else {
        let anonymous = use_i18n().t("user.anonymous");
        return view! { <span class="me-1 text-secondary">{anonymous}</span> }.into_view();
    };

    let href = format!("/users/{}", urlencoding::encode(&user.username));
    let name = if user.display_name.is_empty() {
        user.username.clone()
    } else {
        user.display_name.clone()
    };
    let avatar = (!user.avatar.is_empty()).then(|| {
        view! {
            <img
                class="rounded me-1"
                src=user.avatar.clone()
                alt=name.clone()
                width=avatar_size
                height=avatar_size
            />
        }
    });

    view! {
        <a href=href class="d-flex align-items-center text-reset user-card">
            {avatar}
            <span class="me-1 text-break">{name}</span>
        </a>
    }
    .into_view()
}
