use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::reviews::use_cases::create_review::inbound::http as create_http;
use crate::modules::reviews::use_cases::fetch_movie_detail::inbound::http as movie_detail_http;
use crate::modules::reviews::use_cases::fetch_reviews_by_movie::inbound::http as reviews_by_movie_http;
use crate::modules::reviews::use_cases::frontend_reviews::inbound::http as frontend_http;
use crate::modules::reviews::use_cases::translate_review::inbound::http as translate_http;
use crate::modules::reviews::use_cases::update_review::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/movies/reviews", post(create_http::handle))
        .route("/movies/reviews/{movieId}", get(reviews_by_movie_http::handle))
        .route("/movies/{movieId}", get(movie_detail_http::handle))
        .route(
            "/movies/{movieId}/reviews/{reviewId}",
            put(update_http::handle),
        )
        .route(
            "/reviews/{reviewId}/{movieId}/translation",
            get(translate_http::handle),
        )
        .route(
            "/frontendreviews",
            get(frontend_http::get).post(frontend_http::add),
        )
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-amz-date"),
        ])
}
