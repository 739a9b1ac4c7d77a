use std::sync::Arc;

use tokio::net::TcpListener;

use intake::application::ports::WordTokenizer;
use intake::infrastructure::nlp::UnicodeWordTokenizer;
use intake::infrastructure::observability::{TracingConfig, init_tracing};
use intake::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::from_settings(environment.as_str(), &settings.logging),
        settings.server.port,
    );

    let tokenizer: Arc<dyn WordTokenizer> = Arc::new(UnicodeWordTokenizer);
    let addr = format!("{}:{}", settings.server.host, settings.server.port);

    let state = AppState::from_settings(settings, tokenizer);
    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, router).await?;

    Ok(())
}
