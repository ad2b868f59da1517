// Write and read paths of the frontend review table. The payload is opaque;
// only the `ReviewId` key is checked.

use crate::modules::reviews::adapters::outbound::frontend_review_store::FrontendReviewStore;
use crate::modules::reviews::core::frontend_review::{FRONTEND_REVIEW_KEY, FrontendReview};
use crate::modules::reviews::use_cases::errors::ApplicationError;
use serde_json::Value;
use std::sync::Arc;

pub struct FrontendReviewsHandler {
    store: Arc<dyn FrontendReviewStore>,
}

impl FrontendReviewsHandler {
    pub fn new(store: Arc<dyn FrontendReviewStore>) -> Self {
        Self { store }
    }

    pub async fn add(&self, body: Option<Value>) -> Result<String, ApplicationError> {
        let body = body.ok_or_else(|| ApplicationError::BadRequest("Request body is missing".into()))?;
        let review = FrontendReview::from_payload(body).ok_or_else(|| {
            ApplicationError::BadRequest(format!("Missing {FRONTEND_REVIEW_KEY}"))
        })?;
        let review_id = review.review_id.clone();
        self.store.put(review).await?;

        tracing::info!(%review_id, "frontend review added");
        Ok(review_id)
    }

    pub async fn get(&self, review_id: Option<String>) -> Result<Value, ApplicationError> {
        let review_id = review_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ApplicationError::BadRequest(format!("Missing {FRONTEND_REVIEW_KEY}")))?;

        self.store
            .get(&review_id)
            .await?
            .map(FrontendReview::into_value)
            .ok_or_else(|| ApplicationError::NotFound("Review not found".into()))
    }
}
