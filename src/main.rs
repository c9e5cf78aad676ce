use actix_web::{middleware, web, App, HttpServer};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use demand_forecast::handlers::{configure, AppState};
use demand_forecast::{ForecastService, ServiceConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    // Artifacts must all load before the listener is bound
    let service = match ForecastService::load(&config.artifacts) {
        Ok(service) => service,
        Err(e) => {
            error!("Failed to load artifacts: {}", e);
            std::process::exit(1);
        }
    };
    info!("Artifacts loaded");

    let app_state = web::Data::new(AppState { service });
    let addr = config.bind_addr();

    info!("Starting demand forecast API at http://{}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(&addr)?
    .run()
    .await
}
