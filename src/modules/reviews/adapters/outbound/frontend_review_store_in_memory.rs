use crate::modules::reviews::adapters::outbound::frontend_review_store::FrontendReviewStore;
use crate::modules::reviews::adapters::outbound::review_store::StoreError;
use crate::modules::reviews::core::frontend_review::FrontendReview;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryFrontendReviewStore {
    rows: RwLock<HashMap<String, FrontendReview>>,
    is_offline: bool,
}

impl InMemoryFrontendReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl FrontendReviewStore for InMemoryFrontendReviewStore {
    async fn put(&self, review: FrontendReview) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Frontend review store offline".into()));
        }
        self.rows
            .write()
            .await
            .insert(review.review_id.clone(), review);
        Ok(())
    }

    async fn get(&self, review_id: &str) -> Result<Option<FrontendReview>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Frontend review store offline".into()));
        }
        Ok(self.rows.read().await.get(review_id).cloned())
    }
}
