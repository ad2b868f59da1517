use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use movie_reviews::modules::reviews::adapters::outbound::translation_http::HttpTranslator;
use movie_reviews::shell::config::{AppConfig, TranslatorConfig};
use movie_reviews::shell::http::router;
use movie_reviews::shell::state::{AppState, Dependencies};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_reviews=info,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;

    let mut deps = Dependencies::in_memory(config.seed_data);
    if let TranslatorConfig::Http {
        base_url,
        api_key,
        timeout,
    } = &config.translator
    {
        tracing::info!(%base_url, "using HTTP translator");
        deps.translator = Arc::new(HttpTranslator::new(base_url, api_key.clone(), *timeout));
    }

    let app = router(AppState::new(deps));

    let addr = config.addr();
    tracing::info!(%addr, seed_data = config.seed_data, "movie reviews API listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
