use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use tracing::{error, info};

use mock_classifier::{configure, telemetry, AppState, Settings};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = Settings::parse();
    let _guard = telemetry::init_tracing(settings.log_dir.as_deref());

    let uploads = settings.upload_settings();
    std::fs::create_dir_all(&uploads.dir).map_err(|e| {
        error!(dir = %uploads.dir.display(), "Failed to create upload directory: {}", e);
        e
    })?;

    let route_patterns = settings.route_patterns();
    info!("Starting mock classifier v{}", env!("CARGO_PKG_VERSION"));
    info!("Upload directory: {}", uploads.dir.display());
    info!(
        "Server running at http://{}:{}{}",
        settings.host, settings.port, route_patterns[0]
    );

    let state = web::Data::new(AppState::new(uploads));

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .configure(configure(state.clone(), route_patterns.clone()))
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await
}
