use sakila_api::{app, ensure_tables, AppConfig, AppState, Store, TokenService};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sakila_api=info")),
        )
        .init();

    let config = AppConfig::from_env();
    let store = Store::new(&config.db);
    ensure_tables(&store).await?;

    let state = AppState {
        store,
        tokens: TokenService::new(&config.auth.secret, config.auth.token_expire_minutes),
    };

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
