use crate::modules::reviews::adapters::outbound::review_store::ReviewStore;
use crate::modules::reviews::adapters::outbound::translation::{
    SOURCE_LANGUAGE, TranslationService,
};
use crate::modules::reviews::core::identifiers::parse_id;
use crate::modules::reviews::use_cases::errors::ApplicationError;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslateReview {
    pub review_id: Option<String>,
    pub movie_id: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedReview {
    pub original_review: String,
    pub translated_review: String,
    pub language: String,
}

pub struct TranslateReviewHandler {
    store: Arc<dyn ReviewStore>,
    translator: Arc<dyn TranslationService>,
}

impl TranslateReviewHandler {
    pub fn new(store: Arc<dyn ReviewStore>, translator: Arc<dyn TranslationService>) -> Self {
        Self { store, translator }
    }

    pub async fn handle(&self, query: TranslateReview) -> Result<TranslatedReview, ApplicationError> {
        let review_id = parse_id(query.review_id.as_deref());
        let movie_id = parse_id(query.movie_id.as_deref());
        let language = query
            .language
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());
        let (Some(review_id), Some(movie_id), Some(language)) = (review_id, movie_id, language)
        else {
            return Err(ApplicationError::BadRequest(
                "Missing required parameters".into(),
            ));
        };

        let review = self
            .store
            .get_by_composite_key(movie_id, review_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound("Review not found".into()))?;

        let translated = self
            .translator
            .translate(&review.content, SOURCE_LANGUAGE, &language)
            .await?;

        tracing::debug!(movie_id, review_id, %language, "review translated");
        Ok(TranslatedReview {
            original_review: review.content,
            translated_review: translated,
            language,
        })
    }
}
