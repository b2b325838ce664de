use blackturtle_api::api::{build_router, AppState};
use blackturtle_api::config::Config;
use blackturtle_api::infrastructure::database;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("blackturtle_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let pool = database::connect(&config).await?;
    if config.run_migrations {
        database::run_migrations(&pool).await?;
    }

    let app = build_router(AppState::postgres(pool));

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
