use dotenv::dotenv;
use log::{error, info};

use game_service::{create_routes, AppState, Config, GameServiceImpl, GameStore, MemberDirectory};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env()?;
    let members = MemberDirectory::parse(&config.member_tokens)?;
    if members.is_empty() {
        info!("no MEMBER_TOKENS configured, every authenticated request will be rejected");
    } else {
        info!("loaded {} member tokens", members.len());
    }

    let game_service = GameServiceImpl::new(GameStore::new());
    let app = create_routes(AppState::new(game_service, members), config.cors_layer());

    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    info!("HTTP API server listening on http://{}", config.http_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server finished");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
