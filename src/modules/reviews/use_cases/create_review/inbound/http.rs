use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::reviews::adapters::inbound::http_support::{is_authorized, json_body};
use crate::modules::reviews::use_cases::create_review::command::CreateReview;
use crate::shell::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewResponse {
    pub message: &'static str,
    pub review_id: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let body = match json_body(&body) {
        Ok(body) => body,
        Err(e) => return e.into_response(),
    };
    let command = CreateReview {
        body,
        authorized: is_authorized(&headers),
    };

    match state.create_review.handle(command).await {
        Ok(review_id) => (
            StatusCode::CREATED,
            Json(CreateReviewResponse {
                message: "Review added successfully",
                review_id,
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod create_review_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/movies/reviews", post(handle))
            .with_state(state)
    }

    fn request(body: &'static str, authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::post("/movies/reviews").header("content-type", "application/json");
        if let Some(token) = authorization {
            builder = builder.header("authorization", token);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn it_should_return_201_with_review_id_on_valid_request() {
        let body = r#"{"movieId":2,"reviewerId":"a@b.com","content":"Great"}"#;

        let response = app(AppState::in_memory())
            .oneshot(request(body, Some("Bearer token")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["reviewId"].as_i64().is_some());
        assert_eq!(json["message"], "Review added successfully");
    }

    #[tokio::test]
    async fn it_should_return_400_when_the_body_is_missing() {
        let response = app(AppState::in_memory())
            .oneshot(request("", Some("Bearer token")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_400_on_invalid_json() {
        let response = app(AppState::in_memory())
            .oneshot(request("not-json", Some("Bearer token")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_401_without_authorization() {
        let body = r#"{"movieId":2,"reviewerId":"a@b.com","content":"Great"}"#;

        let response = app(AppState::in_memory())
            .oneshot(request(body, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
