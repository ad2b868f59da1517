// Port over the frontend review table, keyed by the `ReviewId` string.

use crate::modules::reviews::adapters::outbound::review_store::StoreError;
use crate::modules::reviews::core::frontend_review::FrontendReview;
use async_trait::async_trait;

#[async_trait]
pub trait FrontendReviewStore: Send + Sync {
    async fn put(&self, review: FrontendReview) -> Result<(), StoreError>;

    async fn get(&self, review_id: &str) -> Result<Option<FrontendReview>, StoreError>;
}
