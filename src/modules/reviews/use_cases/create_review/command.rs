use crate::modules::reviews::core::identifiers::{id_from_json, non_empty_str};
use crate::modules::reviews::core::review::MovieId;
use crate::modules::reviews::use_cases::errors::ApplicationError;
use serde_json::Value;

/// A create request as it arrives: the decoded body, if any, and whether the
/// caller presented credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateReview {
    pub body: Option<Value>,
    pub authorized: bool,
}

/// The client-supplied part of a new review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub movie_id: MovieId,
    pub reviewer_id: String,
    pub content: String,
}

impl NewReview {
    pub fn from_body(body: Option<&Value>) -> Result<Self, ApplicationError> {
        let Some(body) = body else {
            return Err(ApplicationError::BadRequest(
                "Request body is missing".into(),
            ));
        };
        let movie_id = id_from_json(body.get("movieId"));
        let reviewer_id = non_empty_str(body.get("reviewerId"));
        let content = non_empty_str(body.get("content"));

        match (movie_id, reviewer_id, content) {
            (Some(movie_id), Some(reviewer_id), Some(content)) => Ok(Self {
                movie_id,
                reviewer_id: reviewer_id.to_string(),
                content: content.to_string(),
            }),
            _ => Err(ApplicationError::BadRequest(
                "Missing required fields".into(),
            )),
        }
    }
}
