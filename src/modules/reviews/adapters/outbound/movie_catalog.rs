// Ports over the movie table and the cast table.

use crate::modules::reviews::adapters::outbound::review_store::StoreError;
use crate::modules::reviews::core::movie::{CastRecord, Movie};
use crate::modules::reviews::core::review::MovieId;
use async_trait::async_trait;

#[async_trait]
pub trait MovieCatalog: Send + Sync {
    async fn get_movie(&self, movie_id: MovieId) -> Result<Option<Movie>, StoreError>;
}

#[async_trait]
pub trait CastLookup: Send + Sync {
    /// Cast entries of one movie, empty when none are known.
    async fn query_cast_by_movie(&self, movie_id: MovieId) -> Result<Vec<CastRecord>, StoreError>;
}
