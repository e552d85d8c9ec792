//! Main application entry point for the review queue.
//! Mounts the pending-review page with its queue widget and pending counter.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::api::{HttpReviewBackend, ReviewBackend};
use crate::components::queued_content::QueuedContent;
use crate::config::ClientConfig;
use crate::i18n::{provide_i18n, use_i18n};
use crate::queue::FIRST_PAGE;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let config = ClientConfig::from_env();
    provide_i18n(config.locale);
    provide_context(config);

    view! {
        <Title text="Review"/>
        <Router>
            <main class="container py-4">
                <Routes>
                    <Route path="/" view=ReviewPage/>
                    <Route path="/review" view=ReviewPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn ReviewPage() -> impl IntoView {
    let i18n = use_i18n();
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let backend = HttpReviewBackend::new(config.api_base);

    // Bumped after every decision so the counter re-fetches.
    let (count_version, set_count_version) = create_signal(0u32);
    let pending_count = {
        let backend = backend.clone();
        create_local_resource(
            move || count_version.get(),
            move |_| {
                let backend = backend.clone();
                async move {
                    backend
                        .fetch_pending_page(FIRST_PAGE)
                        .await
                        .map(|page| page.count)
                        .ok()
                }
            },
        )
    };
    let refresh_count = Callback::new(move |_| set_count_version.update(|version| *version += 1));

    let count_label = {
        let i18n = i18n.clone();
        move || {
            pending_count.get().flatten().map(|count| {
                i18n.t_with("page_review.pending_count", &[("count", &count.to_string())])
            })
        }
    };

    view! {
        <div class="d-flex align-items-center justify-content-between mb-4">
            <h3 class="mb-0">{i18n.t("page_review.review")}</h3>
            <span class="badge text-bg-secondary pending-count">{count_label}</span>
        </div>
        <QueuedContent backend=backend refresh_count=refresh_count/>
    }
}
