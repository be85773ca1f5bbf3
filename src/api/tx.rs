use actix_web::{HttpResponse, Responder, get, post, web};
use log::{debug, info, warn};

use super::models::{AppState, MessageResponse, NewTxRequest, NewTxResponse, PendingResponse};

/// Submit a new transaction into the pending pool.
#[post("/transactions/new/")]
pub async fn post_transaction(
    state: web::Data<AppState>,
    body: web::Json<NewTxRequest>,
) -> impl Responder {
    let (sender, recipient, amount) = match body.into_inner().into_parts() {
        Ok(parts) => parts,
        Err(e) => {
            warn!("POST /transactions/new/ - rejected: {}", e);
            return HttpResponse::BadRequest().json(MessageResponse::new(e.to_string()));
        }
    };

    let queued = {
        let mut ledger = state.ledger.lock().expect("mutex poisoned");
        ledger.new_transaction(&sender, &recipient, amount.clone())
    };

    match queued {
        Ok(index) => {
            info!(
                "POST /transactions/new/ - {} -> {} ({}) queued for block #{}",
                sender, recipient, amount, index
            );
            HttpResponse::Created().json(NewTxResponse {
                message: format!("Transaction will be added to Block {}", index),
                index,
            })
        }
        Err(e) => {
            warn!("POST /transactions/new/ - rejected: {}", e);
            HttpResponse::BadRequest().json(MessageResponse::new(e.to_string()))
        }
    }
}

/// List transactions waiting for the next block.
#[get("/transactions/pending/")]
pub async fn get_pending(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    let pending = ledger.pending_transactions();
    debug!("GET /transactions/pending/ - {} waiting", pending.len());
    HttpResponse::Ok().json(PendingResponse {
        size: pending.len(),
        transactions: pending,
    })
}
