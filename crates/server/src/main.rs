use std::net::SocketAddr;

use server::{app, logging, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = config::Args::parse_args();
    args.load_env_file();

    let state = AppState::new()?;
    // Extract values we need before handing state to the router
    let environment = state.config.environment;
    let level = state.config.log.effective_level(environment).to_string();
    let bind_host = state.config.server.bind_host.clone();
    let port = state.config.server.port;
    logging::init(&state.config)?;

    let app = app::create_app(state);
    let addr: SocketAddr = format!("{}:{}", bind_host, port).parse()?;
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Environment: {}", environment);
    tracing::info!("Log level: {}", level);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
