//! Single-item moderation queue: shows the next flagged post or user and
//! lets the moderator approve or reject it.
use leptos::logging::log;
use leptos::*;

use crate::api::ReviewBackend;
use crate::components::format_time::FormatTime;
use crate::components::icon::Icon;
use crate::components::tag_chip::TagChip;
use crate::components::user_card::BaseUserCard;
use crate::i18n::use_i18n;
use crate::models::review::{ItemLink, ReviewAction, ReviewItem};
use crate::models::status::{ListStatus, ShowStatus};
use crate::queue::{handle_action, query_next_one, ActionOutcome, FetchOutcome, QueueState, FIRST_PAGE};
use crate::utils::scroll::schedule_scroll_to_top;

#[component]
pub fn QueuedContent<Q>(
    backend: Q,
    #[prop(into)] refresh_count: Callback<()>,
) -> impl IntoView
where
    Q: ReviewBackend + Clone + 'static,
{
    let i18n = store_value(use_i18n());
    let t = move |key: &str| i18n.with_value(|i18n| i18n.t(key));

    let state = create_rw_signal(QueueState::default());
    let backend = store_value(backend);

    let load = move |page: u32| {
        let Some(backend) = backend.try_get_value() else {
            return;
        };
        spawn_local(async move {
            if let Ok(FetchOutcome::Displayed { .. } | FetchOutcome::NoTasks) =
                query_next_one(&backend, &state, page).await
            {
                schedule_scroll_to_top();
            }
        });
    };

    let on_action = move |action: ReviewAction| {
        let Some(backend) = backend.try_get_value() else {
            return;
        };
        spawn_local(async move {
            let outcome = handle_action(&backend, &state, action, move || refresh_count.call(())).await;
            if let Ok(ActionOutcome::Advanced(FetchOutcome::Displayed { .. } | FetchOutcome::NoTasks)) = outcome {
                schedule_scroll_to_top();
            }
        });
    };

    let retry = move |_: ev::MouseEvent| {
        let page = state.with_untracked(QueueState::page);
        log!("[QUEUE] Retrying page {}", page);
        state.update(QueueState::clear_error);
        load(page);
    };
    let dismiss = move |_: ev::MouseEvent| state.update(QueueState::clear_error);

    // Runs once on mount, and only in the browser.
    create_effect(move |_| load(FIRST_PAGE));

    let current_item = create_memo(move |_| state.with(|s| s.current_item().cloned()));
    let is_loading = Signal::derive(move || state.with(QueueState::is_loading));
    let last_error = move || state.with(|s| s.last_error().map(str::to_string));

    view! {
        <Show when=move || !state.with(QueueState::no_tasks)>
            {move || last_error().map(|message| view! {
                <div class="alert alert-danger d-flex align-items-center justify-content-between queued-error" role="alert">
                    <div>
                        <span>{t("page_review.load_failed")}</span>
                        <small class="d-block text-secondary">{message}</small>
                    </div>
                    <div class="hstack gap-2">
                        <button type="button" class="btn btn-sm btn-outline-danger" on:click=retry>
                            {t("page_review.retry")}
                        </button>
                        <button type="button" class="btn-close" aria-label=t("page_review.dismiss") on:click=dismiss></button>
                    </div>
                </div>
            })}
            {move || match current_item.get() {
                Some(item) => view! {
                    <QueuedItemCard item=item is_loading=is_loading on_action=Callback::new(on_action)/>
                }
                .into_view(),
                None => view! {
                    <div class="card queued-loading">
                        <div class="card-body small text-secondary">{t("page_review.loading")}</div>
                    </div>
                }
                .into_view(),
            }}
        </Show>
    }
}

#[component]
fn QueuedItemCard(
    item: ReviewItem,
    is_loading: Signal<bool>,
    on_action: Callback<ReviewAction>,
) -> impl IntoView {
    let i18n = use_i18n();
    let link = ItemLink::for_item(&item);

    let (header_key, tip_key) = if item.is_user() {
        ("page_review.queued_post_user", "page_review.approve_user_tip")
    } else {
        ("page_review.queued_post", "page_review.approve_post_tip")
    };

    let submitted = item.submitted_at().map(|time| {
        view! { <FormatTime time=time class="small text-secondary" prefix=i18n.t("page_review.proposed")/> }
    });

    let created = item.created().map(|time| {
        view! {
            <FormatTime
                time=time
                class="text-secondary ms-1 flex-shrink-0 queued-created"
                prefix=i18n.t(link.time_prefix_key)
            />
        }
    });

    let question_details = item.is_question().then(|| {
        let tags = item
            .tags
            .iter()
            .cloned()
            .map(|tag| view! { <TagChip data=tag class="me-1"/> })
            .collect_view();
        view! {
            <h5 class="mb-3 queued-title">{item.title.clone()}</h5>
            <div class="mb-4 queued-tags">{tags}</div>
        }
    });

    let status_badge = item.status().map(|status| {
        view! { <span class=format!("badge {}", status.variant())>{i18n.t(status.label_key())}</span> }
    });
    let unlisted_badge = (item.show_status() == ShowStatus::Unlisted).then(|| {
        let unlisted = ListStatus::Unlisted;
        view! {
            <span class=format!("ms-1 badge {}", unlisted.variant())>{i18n.t(unlisted.label_key())}</span>
        }
    });

    let disabled = move || is_loading.get();

    view! {
        <div class="card queued-card">
            <div class="card-header">{i18n.t(header_key)}</div>
            <div class="card-body p-0">
                <div class="alert alert-info border-0 rounded-0 mb-0" role="alert">
                    <div class="hstack gap-1 align-items-center mb-2">
                        <div class="small d-flex align-items-center">
                            <Icon name="plugin" size="24px" class="me-1"/>
                            <span class="queued-submitter">{item.submitter_display_name.clone()}</span>
                        </div>
                        {submitted}
                    </div>
                    <div class="vstack align-items-start">
                        <p class="mb-0 queued-reason">{item.reason.clone()}</p>
                    </div>
                </div>
                <div class="p-3">
                    <small class="d-block text-secondary mb-4">
                        <span>{i18n.t(item.object_type.label_key())}" "</span>
                        <a href=link.href target="_blank" rel="noreferrer" class="link-secondary queued-link">
                            "#"{link.id}
                        </a>
                    </small>
                    {question_details}
                    <div class="small font-monospace queued-original">{item.original_text.clone()}</div>
                    <div class="d-flex flex-wrap align-items-center justify-content-between mt-4">
                        <div class="queued-badges">{status_badge}{unlisted_badge}</div>
                        <div class="d-flex align-items-center small">
                            <BaseUserCard data=item.author_user_info.clone() avatar_size="24"/>
                            {created}
                        </div>
                    </div>
                </div>
            </div>
            <div class="card-footer p-3">
                <p class="queued-tip">{i18n.t(tip_key)}</p>
                <div class="hstack gap-2">
                    <button
                        type="button"
                        class="btn btn-outline-primary"
                        data-action="approve"
                        disabled=disabled
                        on:click=move |_| on_action.call(ReviewAction::Approve)
                    >
                        {i18n.t("btns.approve")}
                    </button>
                    <button
                        type="button"
                        class="btn btn-outline-primary"
                        data-action="reject"
                        disabled=disabled
                        on:click=move |_| on_action.call(ReviewAction::Reject)
                    >
                        {i18n.t("btns.reject")}
                    </button>
                </div>
            </div>
        </div>
    }
}
