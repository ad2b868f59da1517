// Port over the review table, keyed by (movieId, reviewId).
//
// Adapters implement this trait; the use cases only see the trait object.

use crate::modules::reviews::core::review::{MovieId, Review, ReviewFields, ReviewId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no record for movie {movie_id} and review {review_id}")]
    NotFound {
        movie_id: MovieId,
        review_id: ReviewId,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Inserts the review, overwriting any record with the same composite key.
    async fn put(&self, review: Review) -> Result<(), StoreError>;

    async fn get_by_composite_key(
        &self,
        movie_id: MovieId,
        review_id: ReviewId,
    ) -> Result<Option<Review>, StoreError>;

    /// All reviews of one movie. Callers must not rely on the order.
    async fn query_by_movie(&self, movie_id: MovieId) -> Result<Vec<Review>, StoreError>;

    /// Overwrites the mutable fields only when the record exists. The existence
    /// check and the write are a single atomic step.
    async fn update_if_exists(
        &self,
        movie_id: MovieId,
        review_id: ReviewId,
        fields: ReviewFields,
    ) -> Result<Review, StoreError>;
}
