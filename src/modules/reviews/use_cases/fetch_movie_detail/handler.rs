use crate::modules::reviews::adapters::outbound::movie_catalog::{CastLookup, MovieCatalog};
use crate::modules::reviews::core::identifiers::parse_id;
use crate::modules::reviews::core::movie::MovieDetail;
use crate::modules::reviews::use_cases::errors::ApplicationError;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchMovieDetail {
    pub movie_id: Option<String>,
    pub include_cast: bool,
}

pub struct FetchMovieDetailHandler {
    movies: Arc<dyn MovieCatalog>,
    cast: Arc<dyn CastLookup>,
}

impl FetchMovieDetailHandler {
    pub fn new(movies: Arc<dyn MovieCatalog>, cast: Arc<dyn CastLookup>) -> Self {
        Self { movies, cast }
    }

    /// A failing cast lookup fails the whole request.
    pub async fn handle(&self, query: FetchMovieDetail) -> Result<MovieDetail, ApplicationError> {
        let movie_id = parse_id(query.movie_id.as_deref())
            .ok_or_else(|| ApplicationError::BadRequest("Missing movieId".into()))?;

        let movie = self
            .movies
            .get_movie(movie_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound("Invalid movieId".into()))?;

        let cast = if query.include_cast {
            Some(self.cast.query_cast_by_movie(movie_id).await?)
        } else {
            None
        };

        Ok(MovieDetail { movie, cast })
    }
}

#[cfg(test)]
mod fetch_movie_detail_handler_tests {
    use super::*;
    use crate::modules::reviews::adapters::outbound::movie_catalog_in_memory::InMemoryMovieCatalog;
    use crate::shell::seed;
    use rstest::{fixture, rstest};

    fn handler_for(catalog: InMemoryMovieCatalog) -> FetchMovieDetailHandler {
        let catalog = Arc::new(catalog);
        FetchMovieDetailHandler::new(catalog.clone(), catalog)
    }

    #[fixture]
    fn catalog() -> InMemoryMovieCatalog {
        InMemoryMovieCatalog::with_data(seed::movies(), seed::cast())
    }

    fn query(movie_id: &str, include_cast: bool) -> FetchMovieDetail {
        FetchMovieDetail {
            movie_id: Some(movie_id.into()),
            include_cast,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_the_movie_without_cast_by_default(catalog: InMemoryMovieCatalog) {
        let detail = handler_for(catalog)
            .handle(query("1234", false))
            .await
            .unwrap();
        assert_eq!(detail.movie.id, 1234);
        assert_eq!(detail.cast, None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_attach_the_cast_when_asked(catalog: InMemoryMovieCatalog) {
        let detail = handler_for(catalog)
            .handle(query("1234", true))
            .await
            .unwrap();
        let cast = detail.cast.expect("cast attached");
        assert!(!cast.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_attach_an_empty_cast_for_a_movie_without_one() {
        let catalog = InMemoryMovieCatalog::with_data(seed::movies(), Vec::new());
        let detail = handler_for(catalog).handle(query("2", true)).await.unwrap();
        assert_eq!(detail.cast, Some(Vec::new()));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_not_found_for_an_unknown_movie(catalog: InMemoryMovieCatalog) {
        let result = handler_for(catalog).handle(query("77", false)).await;
        assert_eq!(
            result,
            Err(ApplicationError::NotFound("Invalid movieId".into()))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_an_invalid_movie_id(catalog: InMemoryMovieCatalog) {
        let result = handler_for(catalog).handle(query("x1", false)).await;
        assert!(matches!(result, Err(ApplicationError::BadRequest(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn a_failing_cast_lookup_fails_the_request(mut catalog: InMemoryMovieCatalog) {
        catalog.toggle_cast_offline();
        let handler = handler_for(catalog);
        assert!(handler.handle(query("1234", false)).await.is_ok());
        let result = handler.handle(query("1234", true)).await;
        assert!(matches!(result, Err(ApplicationError::Internal(_))));
    }
}
