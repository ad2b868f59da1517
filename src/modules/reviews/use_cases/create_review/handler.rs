use crate::modules::reviews::adapters::outbound::review_store::ReviewStore;
use crate::modules::reviews::core::review::{REVIEW_DATE_FORMAT, Review, ReviewId};
use crate::modules::reviews::use_cases::create_review::command::{CreateReview, NewReview};
use crate::modules::reviews::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::{Clock, IdGenerator};
use std::sync::Arc;

pub struct CreateReviewHandler {
    store: Arc<dyn ReviewStore>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl CreateReviewHandler {
    pub fn new(
        store: Arc<dyn ReviewStore>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { store, ids, clock }
    }

    /// Validates the request, assigns a fresh review id and today's date and
    /// stores the review. Returns the generated id.
    pub async fn handle(&self, command: CreateReview) -> Result<ReviewId, ApplicationError> {
        let new_review = NewReview::from_body(command.body.as_ref())?;
        if !command.authorized {
            return Err(ApplicationError::Unauthorized);
        }

        let review = Review {
            movie_id: new_review.movie_id,
            review_id: self.ids.next_id(),
            reviewer_id: new_review.reviewer_id,
            review_date: self.clock.today().format(REVIEW_DATE_FORMAT).to_string(),
            content: new_review.content,
        };
        let (movie_id, review_id) = review.key();
        self.store.put(review).await?;

        tracing::info!(movie_id, review_id, "review created");
        Ok(review_id)
    }
}
