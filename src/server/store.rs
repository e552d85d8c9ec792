use std::path::Path;

use leptos::logging::log;
use thiserror::Error;

use crate::models::review::{ReviewDecision, ReviewItem, ReviewPage};

/// Fixture served when `REVIEW_QUEUE_FIXTURES` is unset.
const BUNDLED_FIXTURES: &str = include_str!("../../fixtures/pending_reviews.json");

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not read fixtures: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse fixtures: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("review {0} is not pending")]
    NotFound(String),
}

/// In-memory pending review queue backing the development server.
#[derive(Debug, Clone, Default)]
pub struct PendingStore {
    items: Vec<ReviewItem>,
}

impl PendingStore {
    pub fn new(items: Vec<ReviewItem>) -> Self {
        Self { items }
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Loads fixtures from `path`, or the bundled set when there is none.
    pub fn load(path: Option<&Path>) -> Result<Self, StoreError> {
        let store = match path {
            Some(path) => {
                log!("[SERVER] Loading review fixtures from {}", path.display());
                Self::from_json(&std::fs::read_to_string(path)?)?
            }
            None => Self::from_json(BUNDLED_FIXTURES)?,
        };
        log!("[SERVER] {} pending review(s) loaded", store.len());
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One-based page of `page_size` items. Page 0 is treated as page 1.
    pub fn page(&self, page: u32, page_size: usize) -> ReviewPage {
        let index = page.max(1) as usize - 1;
        let list = self
            .items
            .iter()
            .skip(index.saturating_mul(page_size))
            .take(page_size)
            .cloned()
            .collect();
        ReviewPage {
            count: self.items.len() as u64,
            list,
        }
    }

    /// Removes the decided item from the queue and returns it.
    pub fn decide(&mut self, decision: &ReviewDecision) -> Result<ReviewItem, StoreError> {
        let position = self
            .items
            .iter()
            .position(|item| item.flag_id == decision.review_id)
            .ok_or_else(|| StoreError::NotFound(decision.review_id.clone()))?;
        Ok(self.items.remove(position))
    }
}
