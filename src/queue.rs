//! State of the pending review queue and the fetch/decide flow that drives it.
//!
//! The queue shows one item at a time. "Page" is the item's position in the
//! backend's pending list, so advancing after a decision means asking for the
//! next page, and a page that comes back empty while items remain means the
//! queue shrank underneath us and we start over from the first page.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::logging::{error, log, warn};
use leptos::{RwSignal, SignalUpdate};

use crate::api::{ApiError, ReviewBackend};
use crate::models::review::{ReviewAction, ReviewDecision, ReviewItem, ReviewPage};

pub const FIRST_PAGE: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueuePhase {
    LoadingInitial,
    HasItem,
    ActionPending,
    NoTasks,
}

/// What `QueueState::resolve` did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The page was stale; the cursor is back on the first page and nothing
    /// was displayed.
    RollBack,
    Committed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueueState {
    page: u32,
    response: Option<ReviewPage>,
    no_tasks: bool,
    is_loading: bool,
    last_error: Option<String>,
}

impl Default for QueueState {
    fn default() -> Self {
        Self {
            page: FIRST_PAGE,
            response: None,
            no_tasks: false,
            is_loading: false,
            last_error: None,
        }
    }
}

impl QueueState {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn current_item(&self) -> Option<&ReviewItem> {
        self.response.as_ref().and_then(ReviewPage::first)
    }

    pub fn no_tasks(&self) -> bool {
        self.no_tasks
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn next_page(&self) -> u32 {
        self.page.saturating_add(1)
    }

    pub fn phase(&self) -> QueuePhase {
        if self.no_tasks {
            QueuePhase::NoTasks
        } else if self.current_item().is_none() {
            QueuePhase::LoadingInitial
        } else if self.is_loading {
            QueuePhase::ActionPending
        } else {
            QueuePhase::HasItem
        }
    }

    /// Applies a fetched page for `requested`.
    pub fn resolve(&mut self, response: ReviewPage, requested: u32) -> Resolution {
        if response.list.is_empty() && response.count > 0 && requested != FIRST_PAGE {
            self.page = FIRST_PAGE;
            return Resolution::RollBack;
        }
        if requested != self.page {
            self.page = requested;
        }
        if response.list.is_empty() {
            self.no_tasks = true;
        }
        self.response = Some(response);
        self.last_error = None;
        Resolution::Committed
    }

    /// Marks an action as in flight and builds its payload. Returns `None`
    /// when there is nothing to decide on or a decision is already pending.
    pub fn begin_action(&mut self, action: ReviewAction) -> Option<ReviewDecision> {
        if self.is_loading {
            return None;
        }
        let decision = ReviewDecision::new(action, self.current_item()?);
        self.is_loading = true;
        Some(decision)
    }

    pub fn finish_action(&mut self) {
        self.is_loading = false;
    }

    pub fn record_error(&mut self, err: &ApiError) {
        self.last_error = Some(err.to_string());
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}

/// Somewhere a `QueueState` lives. `None` means the owner is gone and the
/// update was dropped.
pub trait QueueStore {
    fn modify<R>(&self, f: impl FnOnce(&mut QueueState) -> R) -> Option<R>;
}

impl QueueStore for RwSignal<QueueState> {
    fn modify<R>(&self, f: impl FnOnce(&mut QueueState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl QueueStore for Rc<RefCell<QueueState>> {
    fn modify<R>(&self, f: impl FnOnce(&mut QueueState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Displayed { page: u32 },
    NoTasks,
    /// The store went away before the response could be applied.
    Detached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Skipped,
    Advanced(FetchOutcome),
}

/// Fetches `page` and applies it, rolling back to the first page if it was
/// stale.
pub async fn query_next_one<B, S>(backend: &B, store: &S, page: u32) -> Result<FetchOutcome, ApiError>
where
    B: ReviewBackend,
    S: QueueStore,
{
    let mut requested = page;
    loop {
        let response = match backend.fetch_pending_page(requested).await {
            Ok(response) => response,
            Err(err) => {
                error!("[QUEUE] Failed to load page {}: {}", requested, err);
                store.modify(|state| state.record_error(&err));
                return Err(err);
            }
        };
        let Some(resolution) = store.modify(|state| state.resolve(response, requested)) else {
            warn!("[QUEUE] Page {} arrived after the queue was disposed", requested);
            return Ok(FetchOutcome::Detached);
        };
        match resolution {
            // A rollback always lands on the first page, which never rolls back again.
            Resolution::RollBack => {
                log!("[QUEUE] Page {} is stale, rolling back to page {}", requested, FIRST_PAGE);
                requested = FIRST_PAGE;
            }
            Resolution::Committed => {
                let no_tasks = store.modify(|state| state.no_tasks()).unwrap_or(false);
                return Ok(if no_tasks {
                    log!("[QUEUE] No pending reviews left");
                    FetchOutcome::NoTasks
                } else {
                    FetchOutcome::Displayed { page: requested }
                });
            }
        }
    }
}

/// Submits `action` for the displayed item and, on success, notifies
/// `on_success` and moves to the next page.
pub async fn handle_action<B, S, F>(
    backend: &B,
    store: &S,
    action: ReviewAction,
    on_success: F,
) -> Result<ActionOutcome, ApiError>
where
    B: ReviewBackend,
    S: QueueStore,
    F: FnOnce(),
{
    let Some(decision) = store.modify(|state| state.begin_action(action)).flatten() else {
        return Ok(ActionOutcome::Skipped);
    };

    let result = backend.submit_decision(&decision).await;
    store.modify(QueueState::finish_action);

    if let Err(err) = result {
        error!(
            "[QUEUE] Failed to {} review {}: {}",
            action.as_str(),
            decision.review_id,
            err
        );
        store.modify(|state| state.record_error(&err));
        return Err(err);
    }

    log!("[QUEUE] Review {} {}d", decision.review_id, action.as_str());
    on_success();
    let Some(next) = store.modify(|state| state.next_page()) else {
        return Ok(ActionOutcome::Advanced(FetchOutcome::Detached));
    };
    query_next_one(backend, store, next)
        .await
        .map(ActionOutcome::Advanced)
}
