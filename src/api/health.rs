use actix_web::{HttpResponse, Responder, get, web};

use super::models::{AppState, NodeResponse};

#[get("/health/")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("API is up and running 🦀")
}

/// This node's identifier and chain summary.
#[get("/node/")]
pub async fn node_info(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(NodeResponse {
        node_id: state.node_id.clone(),
        length: ledger.len(),
        difficulty: ledger.difficulty(),
    })
}
