use mock_api::{
    Config, build,
    telemetry::{get_subscriber, init_subscriber},
};

/// Mock character API server
///
/// Environment variables can be set directly or loaded from a .env file in
/// the project root. All are optional:
/// - IP_ADDRESS: bind address (default 127.0.0.1)
/// - PORT: server port (default 8000, 0 for an os-assigned port)
/// - ALLOWED_ORIGINS: CORS origins, "*" or a comma-separated list
///   (default "*")
///
/// Example development command:
/// cargo run -p mock-api
///
/// Then point the ui at it:
/// cd ui && CHARACTER_API_URL=http://127.0.0.1:8000/api trunk serve
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Silently ignored if there is no .env file
    let _ = dotenvy::dotenv();

    init_subscriber(get_subscriber("info"))?;

    let mut config = Config::from_env()?;
    let server = build(&mut config)?;
    tracing::info!(
        "Character API listening on http://{}:{}/api",
        config.ip,
        config.port
    );
    server.await?;
    Ok(())
}
