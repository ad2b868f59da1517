use crate::modules::reviews::core::review::MovieId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub overview: String,
    pub release_date: String,
    pub original_language: String,
    /// Anything else the catalog knows about the movie, passed through as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastRecord {
    pub movie_id: MovieId,
    pub actor_name: String,
    pub role_name: String,
    pub role_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast: Option<Vec<CastRecord>>,
}
