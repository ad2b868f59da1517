use crate::modules::reviews::adapters::outbound::review_store::ReviewStore;
use crate::modules::reviews::core::identifiers::parse_id;
use crate::modules::reviews::core::review::Review;
use crate::modules::reviews::use_cases::errors::ApplicationError;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReviewsByMovie {
    pub movie_id: Option<String>,
    pub review_id: Option<String>,
    pub reviewer_id: Option<String>,
}

fn supplied(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().filter(|value| !value.trim().is_empty())
}

impl FetchReviewsByMovie {
    /// A review passes when it satisfies every filter that was supplied.
    /// Blank filter values count as not supplied.
    fn matches(&self, review: &Review) -> bool {
        let review_id_matches = supplied(&self.review_id)
            .is_none_or(|wanted| review.review_id.to_string() == wanted);
        let reviewer_matches =
            supplied(&self.reviewer_id).is_none_or(|wanted| review.reviewer_id == wanted);
        review_id_matches && reviewer_matches
    }
}

pub struct FetchReviewsByMovieHandler {
    store: Arc<dyn ReviewStore>,
}

impl FetchReviewsByMovieHandler {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: FetchReviewsByMovie) -> Result<Vec<Review>, ApplicationError> {
        let movie_id = parse_id(query.movie_id.as_deref())
            .ok_or_else(|| ApplicationError::BadRequest("Missing movieId".into()))?;

        let reviews = self.store.query_by_movie(movie_id).await?;
        Ok(reviews
            .into_iter()
            .filter(|review| query.matches(review))
            .collect())
    }
}

#[cfg(test)]
mod fetch_reviews_by_movie_handler_tests {
    use super::*;
    use crate::modules::reviews::adapters::outbound::review_store_in_memory::InMemoryReviewStore;
    use crate::tests::fixtures::review::ReviewBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn handler() -> FetchReviewsByMovieHandler {
        let store = InMemoryReviewStore::with_reviews([
            ReviewBuilder::new().review_id(102).reviewer_id("jane").build(),
            ReviewBuilder::new().review_id(201).reviewer_id("alex").build(),
            ReviewBuilder::new().review_id(202).reviewer_id("alex").build(),
            ReviewBuilder::new().movie_id(3).review_id(301).build(),
        ]);
        FetchReviewsByMovieHandler::new(Arc::new(store))
    }

    fn query(movie_id: &str) -> FetchReviewsByMovie {
        FetchReviewsByMovie {
            movie_id: Some(movie_id.to_string()),
            ..Default::default()
        }
    }

    fn ids(reviews: &[Review]) -> Vec<i64> {
        let mut ids: Vec<_> = reviews.iter().map(|r| r.review_id).collect();
        ids.sort();
        ids
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_every_review_of_the_movie(handler: FetchReviewsByMovieHandler) {
        let reviews = handler.handle(query("2")).await.unwrap();
        assert_eq!(ids(&reviews), vec![102, 201, 202]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_narrow_by_review_id(handler: FetchReviewsByMovieHandler) {
        let reviews = handler
            .handle(FetchReviewsByMovie {
                review_id: Some("201".into()),
                ..query("2")
            })
            .await
            .unwrap();
        assert_eq!(ids(&reviews), vec![201]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_narrow_by_reviewer(handler: FetchReviewsByMovieHandler) {
        let reviews = handler
            .handle(FetchReviewsByMovie {
                reviewer_id: Some("alex".into()),
                ..query("2")
            })
            .await
            .unwrap();
        assert_eq!(ids(&reviews), vec![201, 202]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_require_every_filter_to_match(handler: FetchReviewsByMovieHandler) {
        let reviews = handler
            .handle(FetchReviewsByMovie {
                review_id: Some("102".into()),
                reviewer_id: Some("alex".into()),
                ..query("2")
            })
            .await
            .unwrap();
        assert!(reviews.is_empty());
    }

    #[rstest]
    #[case(Some(""), None)]
    #[case(None, Some(""))]
    #[case(Some("  "), Some(" "))]
    #[tokio::test]
    async fn it_should_ignore_blank_filters(
        handler: FetchReviewsByMovieHandler,
        #[case] review_id: Option<&str>,
        #[case] reviewer_id: Option<&str>,
    ) {
        let reviews = handler
            .handle(FetchReviewsByMovie {
                review_id: review_id.map(String::from),
                reviewer_id: reviewer_id.map(String::from),
                ..query("2")
            })
            .await
            .unwrap();
        assert_eq!(ids(&reviews), vec![102, 201, 202]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_an_empty_list_for_a_movie_without_reviews(
        handler: FetchReviewsByMovieHandler,
    ) {
        assert!(handler.handle(query("42")).await.unwrap().is_empty());
    }

    #[rstest]
    #[case(None)]
    #[case(Some("abc"))]
    #[case(Some("0"))]
    #[tokio::test]
    async fn it_should_reject_a_missing_or_invalid_movie_id(
        handler: FetchReviewsByMovieHandler,
        #[case] movie_id: Option<&str>,
    ) {
        let result = handler
            .handle(FetchReviewsByMovie {
                movie_id: movie_id.map(String::from),
                ..Default::default()
            })
            .await;
        assert_eq!(
            result,
            Err(ApplicationError::BadRequest("Missing movieId".into()))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_an_offline_store_as_internal() {
        let mut store = InMemoryReviewStore::new();
        store.toggle_offline();
        let handler = FetchReviewsByMovieHandler::new(Arc::new(store));
        let result = handler.handle(query("2")).await;
        assert!(matches!(result, Err(ApplicationError::Internal(_))));
    }
}
