// In memory movie and cast tables.

use crate::modules::reviews::adapters::outbound::movie_catalog::{CastLookup, MovieCatalog};
use crate::modules::reviews::adapters::outbound::review_store::StoreError;
use crate::modules::reviews::core::movie::{CastRecord, Movie};
use crate::modules::reviews::core::review::MovieId;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryMovieCatalog {
    movies: RwLock<HashMap<MovieId, Movie>>,
    cast: RwLock<HashMap<MovieId, Vec<CastRecord>>>,
    is_offline: bool,
    is_cast_offline: bool,
}

impl InMemoryMovieCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(
        movies: impl IntoIterator<Item = Movie>,
        cast: impl IntoIterator<Item = CastRecord>,
    ) -> Self {
        let movies = movies.into_iter().map(|m| (m.id, m)).collect();
        let mut by_movie: HashMap<MovieId, Vec<CastRecord>> = HashMap::new();
        for record in cast {
            by_movie.entry(record.movie_id).or_default().push(record);
        }
        Self {
            movies: RwLock::new(movies),
            cast: RwLock::new(by_movie),
            is_offline: false,
            is_cast_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Takes only the cast table offline; movie lookups keep working.
    pub fn toggle_cast_offline(&mut self) {
        self.is_cast_offline = !self.is_cast_offline;
    }
}

#[async_trait::async_trait]
impl MovieCatalog for InMemoryMovieCatalog {
    async fn get_movie(&self, movie_id: MovieId) -> Result<Option<Movie>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Movie catalog offline".into()));
        }
        Ok(self.movies.read().await.get(&movie_id).cloned())
    }
}

#[async_trait::async_trait]
impl CastLookup for InMemoryMovieCatalog {
    async fn query_cast_by_movie(&self, movie_id: MovieId) -> Result<Vec<CastRecord>, StoreError> {
        if self.is_offline || self.is_cast_offline {
            return Err(StoreError::Backend("Cast table offline".into()));
        }
        Ok(self
            .cast
            .read()
            .await
            .get(&movie_id)
            .cloned()
            .unwrap_or_default())
    }
}
