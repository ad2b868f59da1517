use serde::{Deserialize, Serialize};

pub type MovieId = i64;
pub type ReviewId = i64;

/// Date layout used for `reviewDate`.
pub const REVIEW_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub movie_id: MovieId,
    pub review_id: ReviewId,
    pub reviewer_id: String,
    pub review_date: String,
    pub content: String,
}

/// The part of a review an update overwrites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewFields {
    pub reviewer_id: String,
    pub review_date: String,
    pub content: String,
}

impl Review {
    pub fn key(&self) -> (MovieId, ReviewId) {
        (self.movie_id, self.review_id)
    }

    pub fn apply(&mut self, fields: ReviewFields) {
        self.reviewer_id = fields.reviewer_id;
        self.review_date = fields.review_date;
        self.content = fields.content;
    }
}
