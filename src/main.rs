mod api;
mod blockchain;
mod config;
mod error;
mod transaction;

use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use log::info;

use api::AppState;
use blockchain::Ledger;
use config::Settings;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Settings {
        host,
        port,
        node_id,
    } = Settings::from_env();

    println!("⛓️ Starting ledger node {node_id} at http://{host}:{port}");

    let ledger = Ledger::new();
    info!(
        "genesis block created (difficulty={} leading zeros)",
        ledger.difficulty()
    );
    let state = web::Data::new(AppState::new(node_id, ledger));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
