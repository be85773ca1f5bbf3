use actix_web::{HttpResponse, Responder, web};
use log::{debug, info, warn};

use super::models::{AppState, MessageResponse, MineRequest, MineResponse};
use crate::error::LedgerError;

/// `POST /mine/`: submit a nonce found by an external miner for the current
/// last block.
///
/// The whole check-and-seal runs under the ledger lock, so two racing
/// submissions can never both extend the same block.
pub async fn mine(state: web::Data<AppState>, req: web::Json<MineRequest>) -> impl Responder {
    let MineRequest { miner_id, proof } = req.into_inner();
    let (miner_id, proof) = match (miner_id, proof) {
        (Some(id), Some(proof)) => (id, proof),
        _ => {
            warn!("POST /mine/ - rejected: id and proof are required");
            return HttpResponse::BadRequest().json(MessageResponse::new("Bad request"));
        }
    };

    let sealed = {
        let mut ledger = state.ledger.lock().expect("mutex poisoned");
        ledger.seal_block(proof, Some(miner_id.as_str()))
    };

    match sealed {
        Ok(block) => {
            info!(
                "MINER - {} sealed block #{} (proof={})",
                miner_id, block.index, block.proof
            );
            HttpResponse::Created().json(MineResponse {
                message: "New Block Forged".to_string(),
                block,
            })
        }
        Err(LedgerError::InvalidProof { proof }) => {
            debug!("MINER - {} submitted invalid proof {}", miner_id, proof);
            HttpResponse::Ok().json(MessageResponse::new("Incorrect proof. Try again!"))
        }
        Err(e @ LedgerError::Validation(_)) => {
            warn!("POST /mine/ - rejected: {}", e);
            HttpResponse::BadRequest().json(MessageResponse::new("Bad request"))
        }
        Err(e) => {
            warn!("POST /mine/ - failed: {}", e);
            HttpResponse::InternalServerError().json(MessageResponse::new(e.to_string()))
        }
    }
}
