use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use futures::channel::oneshot;
use review_queue::api::{ApiError, ReviewBackend};
use review_queue::models::review::{ObjectType, ReviewDecision, ReviewItem, ReviewPage, TagInfo};

/// In-memory backend for mounting the queue widget in tests.
///
/// Pages are scripted per page number and consumed in order; an unscripted
/// page comes back empty. Submissions can be held open with
/// [`MockBackend::hold_next_submit`] to observe the pending state.
#[derive(Clone, Default)]
pub struct MockBackend {
    inner: Rc<RefCell<MockState>>,
}

#[derive(Default)]
struct MockState {
    pages: HashMap<u32, VecDeque<Result<ReviewPage, ApiError>>>,
    requested: Vec<u32>,
    decisions: Vec<ReviewDecision>,
    gate: Option<oneshot::Receiver<()>>,
}

impl MockBackend {
    pub fn with_page(self, number: u32, page: ReviewPage) -> Self {
        self.push(number, Ok(page));
        self
    }

    pub fn with_error(self, number: u32, err: ApiError) -> Self {
        self.push(number, Err(err));
        self
    }

    fn push(&self, number: u32, response: Result<ReviewPage, ApiError>) {
        self.inner
            .borrow_mut()
            .pages
            .entry(number)
            .or_default()
            .push_back(response);
    }

    /// The next submission waits until the returned sender fires or drops.
    pub fn hold_next_submit(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.inner.borrow_mut().gate = Some(rx);
        tx
    }

    pub fn requested(&self) -> Vec<u32> {
        self.inner.borrow().requested.clone()
    }

    pub fn decisions(&self) -> Vec<ReviewDecision> {
        self.inner.borrow().decisions.clone()
    }
}

impl ReviewBackend for MockBackend {
    async fn fetch_pending_page(&self, page: u32) -> Result<ReviewPage, ApiError> {
        let mut state = self.inner.borrow_mut();
        state.requested.push(page);
        state
            .pages
            .get_mut(&page)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Ok(ReviewPage::default()))
    }

    async fn submit_decision(&self, decision: &ReviewDecision) -> Result<(), ApiError> {
        let gate = {
            let mut state = self.inner.borrow_mut();
            state.decisions.push(decision.clone());
            state.gate.take()
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        Ok(())
    }
}

pub fn review_item(flag_id: &str, object_type: ObjectType) -> ReviewItem {
    ReviewItem {
        flag_id: flag_id.to_string(),
        object_type,
        question_id: "101".to_string(),
        answer_id: "202".to_string(),
        object_status: 1,
        object_show_status: 1,
        reason: format!("Reason for {flag_id}"),
        submitter_display_name: format!("Submitter {flag_id}"),
        submit_at: 1_700_000_000,
        original_text: format!("Original text of {flag_id}"),
        title: format!("Title of {flag_id}"),
        url_title: "some-title".to_string(),
        tags: vec![TagInfo {
            slug_name: "rust".to_string(),
            display_name: "Rust".to_string(),
        }],
        created_at: 1_699_000_000,
        ..ReviewItem::default()
    }
}

pub fn page_of(count: u64, items: Vec<ReviewItem>) -> ReviewPage {
    ReviewPage { count, list: items }
}
