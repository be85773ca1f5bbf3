use actix_web::{HttpResponse, Responder, get, web};
use log::warn;

use super::models::{AppState, ChainResponse, LastBlockResponse, ValidateResponse};

/// Get the full blockchain.
#[get("/chain/")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    let chain = ledger.chain_snapshot();
    HttpResponse::Ok().json(ChainResponse {
        length: chain.len(),
        chain,
    })
}

#[get("/last_block/")]
pub async fn get_last_block(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(LastBlockResponse {
        last_block: ledger.last_block(),
    })
}

/// Validate the whole chain.
#[get("/validate/")]
pub async fn validate_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    let reason = match ledger.validate_chain() {
        Ok(()) => None,
        Err(e) => {
            warn!("GET /validate/ - {}", e);
            Some(e.to_string())
        }
    };
    HttpResponse::Ok().json(ValidateResponse {
        valid: reason.is_none(),
        length: ledger.len(),
        reason,
    })
}
