// In memory review table.
//
// Purpose
// - Run the service and its tests without a database.
//
// Responsibilities
// - Store reviews in an ordered map keyed by (movieId, reviewId).
// - Keep the conditional update under a single write lock.

use crate::modules::reviews::adapters::outbound::review_store::{ReviewStore, StoreError};
use crate::modules::reviews::core::review::{MovieId, Review, ReviewFields, ReviewId};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryReviewStore {
    rows: RwLock<BTreeMap<(MovieId, ReviewId), Review>>,
    is_offline: bool,
}

impl InMemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reviews(reviews: impl IntoIterator<Item = Review>) -> Self {
        let rows = reviews.into_iter().map(|r| (r.key(), r)).collect();
        Self {
            rows: RwLock::new(rows),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Review store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ReviewStore for InMemoryReviewStore {
    async fn put(&self, review: Review) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.rows.write().await.insert(review.key(), review);
        Ok(())
    }

    async fn get_by_composite_key(
        &self,
        movie_id: MovieId,
        review_id: ReviewId,
    ) -> Result<Option<Review>, StoreError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(&(movie_id, review_id)).cloned())
    }

    async fn query_by_movie(&self, movie_id: MovieId) -> Result<Vec<Review>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .rows
            .read()
            .await
            .range((movie_id, ReviewId::MIN)..=(movie_id, ReviewId::MAX))
            .map(|(_, review)| review.clone())
            .collect())
    }

    async fn update_if_exists(
        &self,
        movie_id: MovieId,
        review_id: ReviewId,
        fields: ReviewFields,
    ) -> Result<Review, StoreError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let review = guard
            .get_mut(&(movie_id, review_id))
            .ok_or(StoreError::NotFound {
                movie_id,
                review_id,
            })?;
        review.apply(fields);
        Ok(review.clone())
    }
}
