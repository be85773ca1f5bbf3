mod chain;
mod health;
mod mining;
pub mod models;
mod tx;

use actix_web::error::InternalError;
use actix_web::web::{self, ServiceConfig};
use actix_web::HttpResponse;
use log::warn;

use crate::error::LedgerError;
use models::MessageResponse;

pub use models::AppState;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(json_config())
            .service(health::health_check)
            .service(health::node_info)
            .service(chain::get_chain)
            .service(chain::get_last_block)
            .service(chain::validate_chain)
            .service(
                web::resource("/mine/")
                    .app_data(mine_json_config())
                    .route(web::post().to(mining::mine)),
            )
            .service(tx::post_transaction)
            .service(tx::get_pending),
    );
}

/// Malformed or wrongly-typed JSON bodies become a 400 validation error.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        warn!("{} {} - malformed body: {}", req.method(), req.path(), err);
        let message = LedgerError::Validation(err.to_string()).to_string();
        let resp = HttpResponse::BadRequest().json(MessageResponse::new(message));
        InternalError::from_response(err, resp).into()
    })
}

/// `/mine/` answers every unreadable body with the same "Bad request" it
/// gives for absent fields.
fn mine_json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        warn!("{} {} - malformed body: {}", req.method(), req.path(), err);
        let resp = HttpResponse::BadRequest().json(MessageResponse::new("Bad request"));
        InternalError::from_response(err, resp).into()
    })
}
