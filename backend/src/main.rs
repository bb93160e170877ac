use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use engine::ProcessLauncher;
use service::{MoveService, RequestGate};

mod config;

use config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let launcher = ProcessLauncher::new(&config.engine_path).with_args(config.engine_args.clone());
    log::info!("Using engine binary {}", launcher.program().display());

    let moves = web::Data::new(MoveService::new(RequestGate::default(), Arc::new(launcher)));

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(moves.clone())
            .configure(api::configure)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let server = server.bind((config.host.as_str(), config.port))?;
    log::info!("Server running on port {}", config.port);
    server.run().await
}
