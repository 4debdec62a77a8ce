use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use relieve_server::{routes, AppError, AppState, Settings};
use std::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[actix_web::main]
async fn main() -> relieve_server::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = Settings::new()?;

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    info!("Configuration loaded for {} environment", config.environment);

    let state = AppState::connect(config.clone()).await?;
    let state = web::Data::new(state);
    info!("Database pool ready");

    let listener = TcpListener::bind(format!("{}:{}", config.server.host, config.server.port))?;
    info!("Listening on {}:{}", config.server.host, config.server.port);

    let app_state = state.clone();
    let cors_config = config.cors.clone();
    HttpServer::new(move || {
        let cors = if cors_config.enabled && cors_config.allow_any_origin {
            Cors::default()
                .allow_any_origin()
                .allowed_methods(vec!["GET", "POST"])
                .allow_any_header()
                .max_age(cors_config.max_age as usize)
        } else {
            // Same-origin only
            Cors::default()
        };

        App::new()
            .wrap(cors)
            .wrap(routes::default_headers())
            .wrap(Logger::new("%a \"%r\" %s %b %Dms"))
            .app_data(app_state.clone())
            .configure(routes::configure)
    })
    .listen(listener)?
    .workers(config.server.workers as usize)
    .run()
    .await
    .map_err(|e| AppError::InternalError(e.to_string()))?;

    state.shutdown().await;
    info!("Server stopped");

    Ok(())
}
