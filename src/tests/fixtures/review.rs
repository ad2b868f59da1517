// Shared test fixture for reviews.
// The defaults mirror one of the seeded reviews of movie 2.

use crate::modules::reviews::core::review::{Review, ReviewFields};

pub struct ReviewBuilder {
    inner: Review,
}

impl Default for ReviewBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ReviewBuilder {
    pub fn new() -> Self {
        Self {
            inner: Review {
                movie_id: 2,
                review_id: 102,
                reviewer_id: "jane.smith@example.com".to_string(),
                review_date: "2025-03-12".to_string(),
                content: "The storyline was engaging, but the pacing felt a bit slow.".to_string(),
            },
        }
    }

    pub fn movie_id(mut self, v: i64) -> Self {
        self.inner.movie_id = v;
        self
    }

    pub fn review_id(mut self, v: i64) -> Self {
        self.inner.review_id = v;
        self
    }

    pub fn reviewer_id(mut self, v: impl Into<String>) -> Self {
        self.inner.reviewer_id = v.into();
        self
    }

    pub fn review_date(mut self, v: impl Into<String>) -> Self {
        self.inner.review_date = v.into();
        self
    }

    pub fn content(mut self, v: impl Into<String>) -> Self {
        self.inner.content = v.into();
        self
    }

    pub fn build(self) -> Review {
        self.inner
    }

    pub fn fields(self) -> ReviewFields {
        ReviewFields {
            reviewer_id: self.inner.reviewer_id,
            review_date: self.inner.review_date,
            content: self.inner.content,
        }
    }
}

#[cfg(test)]
mod review_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let review = ReviewBuilder::new()
            .movie_id(9)
            .review_id(99)
            .reviewer_id("tester")
            .review_date("2025-01-01")
            .content("desc")
            .build();

        assert_eq!(review.movie_id, 9);
        assert_eq!(review.review_id, 99);
        assert_eq!(review.reviewer_id, "tester");
        assert_eq!(review.review_date, "2025-01-01");
        assert_eq!(review.content, "desc");
    }
}
