mod config;
mod routes;
mod services;
mod state;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Session(#[from] services::session::SessionError),
    #[error(transparent)]
    Routes(#[from] routes::RouteError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    // `.env` is optional.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "authapp failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = config::ServerConfig::from_env()?;

    let session = services::session::source_from_config(&config.auth)?;
    match &config.auth.session_url {
        Some(url) => tracing::info!(%url, "session provider configured"),
        None => tracing::warn!("AUTH_SESSION_URL not set; every visitor is treated as signed out"),
    }
    if config.auth.login_url.is_none() || config.auth.register_url.is_none() {
        tracing::warn!("AUTH_LOGIN_URL / AUTH_REGISTER_URL not set; sign-in hand-off disabled");
    }

    let port = config.port;
    let state = state::AppState::new(session, config.auth);
    let app = routes::app(state)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(%port, "authapp listening");
    axum::serve(listener, app).await?;
    Ok(())
}
