use actix_web::{web, HttpResponse};
use leptos::logging::log;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::api::Envelope;
use crate::models::review::ReviewDecision;
use crate::queue::FIRST_PAGE;
use crate::server::store::{PendingStore, StoreError};

/// The queue shows one item per page.
pub const PAGE_SIZE: usize = 1;

pub type SharedStore = web::Data<Arc<Mutex<PendingStore>>>;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "first_page")]
    pub page: u32,
}

fn first_page() -> u32 {
    FIRST_PAGE
}

/// Registers the review routes under whatever scope the caller mounts.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/review/pending/post/page", web::get().to(get_pending_page))
        .route("/review/pending/post", web::put().to(put_review_action));
}

pub async fn get_pending_page(store: SharedStore, query: web::Query<PageQuery>) -> HttpResponse {
    let store = store.lock().await;
    let page = store.page(query.page, PAGE_SIZE);
    log!(
        "[SERVER] Page {} -> {} item(s), {} pending",
        query.page,
        page.list.len(),
        page.count
    );
    HttpResponse::Ok().json(Envelope::success(page))
}

pub async fn put_review_action(
    store: SharedStore,
    decision: web::Json<ReviewDecision>,
) -> HttpResponse {
    let mut store = store.lock().await;
    match store.decide(&decision) {
        Ok(item) => {
            log!(
                "[SERVER] Review {} {}d ({:?})",
                item.flag_id,
                decision.status.as_str(),
                item.object_type
            );
            HttpResponse::Ok().json(Envelope::<()>::without_data(200, "base.success", "Success."))
        }
        Err(err @ StoreError::NotFound(_)) => {
            leptos::logging::error!("[SERVER] {}", err);
            HttpResponse::NotFound().json(Envelope::<()>::without_data(
                404,
                "review.not_found",
                err.to_string(),
            ))
        }
        Err(err) => {
            leptos::logging::error!("[SERVER] Failed to apply decision: {}", err);
            HttpResponse::InternalServerError().json(Envelope::<()>::without_data(
                500,
                "base.unknown",
                err.to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::review::{ReviewAction, ReviewPage};
    use actix_web::{test, App};

    fn shared_store() -> Arc<Mutex<PendingStore>> {
        Arc::new(Mutex::new(PendingStore::load(None).unwrap()))
    }

    #[actix_web::test]
    async fn test_get_page_wraps_data_in_envelope() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(shared_store()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/review/pending/post/page?page=2")
            .to_request();
        let body: Envelope<ReviewPage> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.code, 200);
        let page = body.into_data().unwrap();
        assert_eq!(page.count, 4);
        assert_eq!(page.list[0].flag_id, "10030000000000002");
    }

    #[actix_web::test]
    async fn test_decision_removes_item_from_queue() {
        let store = shared_store();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store.clone()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/review/pending/post")
            .set_json(ReviewDecision {
                status: ReviewAction::Reject,
                review_id: "10030000000000001".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert_eq!(store.lock().await.len(), 3);
    }

    #[actix_web::test]
    async fn test_unknown_decision_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(shared_store()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/review/pending/post")
            .set_json(ReviewDecision {
                status: ReviewAction::Approve,
                review_id: "missing".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 404);
    }
}
