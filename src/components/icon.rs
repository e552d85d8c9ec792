use leptos::*;

/// Bootstrap icon by name, e.g. `plugin` for `bi-plugin`.
#[component]
pub fn Icon(
    name: &'static str,
    #[prop(optional)] size: Option<&'static str>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let style = size.map(|size| format!("font-size: {size}"));

    view! {
        <i class=format!("bi bi-{name} {class}") style=style aria-hidden="true"></i>
    }
}
