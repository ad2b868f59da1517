use crate::modules::reviews::adapters::outbound::review_store::ReviewStore;
use crate::modules::reviews::core::identifiers::parse_id;
use crate::modules::reviews::core::review::Review;
use crate::modules::reviews::core::validation::ReviewValidator;
use crate::modules::reviews::use_cases::errors::ApplicationError;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateReview {
    pub movie_id: Option<String>,
    pub review_id: Option<String>,
    pub body: Option<Value>,
    pub authorized: bool,
}

pub struct UpdateReviewHandler {
    store: Arc<dyn ReviewStore>,
    validator: ReviewValidator,
}

impl UpdateReviewHandler {
    pub fn new(store: Arc<dyn ReviewStore>, validator: ReviewValidator) -> Self {
        Self { store, validator }
    }

    /// Overwrites reviewer, date and content of an existing review. Nothing is
    /// written unless every check passes and the review exists.
    pub async fn handle(&self, command: UpdateReview) -> Result<Review, ApplicationError> {
        let (Some(movie_id), Some(review_id)) = (
            parse_id(command.movie_id.as_deref()),
            parse_id(command.review_id.as_deref()),
        ) else {
            return Err(ApplicationError::BadRequest(
                "Missing movieId or reviewId in path parameters".into(),
            ));
        };
        let Some(body) = command.body else {
            return Err(ApplicationError::BadRequest("Missing request body".into()));
        };
        if !command.authorized {
            return Err(ApplicationError::Unauthorized);
        }

        let fields = self.validator.validate(&body)?;
        let updated = self
            .store
            .update_if_exists(movie_id, review_id, fields)
            .await?;

        tracing::info!(movie_id, review_id, "review updated");
        Ok(updated)
    }
}
