use crate::blockchain::{Block, Ledger};
use crate::error::LedgerError;
use crate::transaction::Transaction;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::sync::Mutex;

/// Shared application state: the single ledger plus this node's identifier.
pub struct AppState {
    pub ledger: Mutex<Ledger>,
    pub node_id: String,
}

impl AppState {
    pub fn new(node_id: String, ledger: Ledger) -> Self {
        Self {
            ledger: Mutex::new(ledger),
            node_id,
        }
    }
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/* ---------- Node API Models ---------- */

#[derive(Serialize)]
pub struct NodeResponse {
    pub node_id: String,
    pub length: usize,
    pub difficulty: usize,
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub length: usize,
    pub chain: &'a [Block],
}

#[derive(Serialize)]
pub struct LastBlockResponse<'a> {
    pub last_block: &'a Block,
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/* ---------- Mining API Models ---------- */

#[derive(Deserialize)]
pub struct MineRequest {
    #[serde(alias = "id")]
    pub miner_id: Option<String>,
    pub proof: Option<u64>,
}

#[derive(Serialize)]
pub struct MineResponse {
    pub message: String,
    pub block: Block,
}

/* ---------- TX API Models ---------- */

#[derive(Deserialize)]
pub struct NewTxRequest {
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub amount: Option<Number>,
}

impl NewTxRequest {
    /// Unpack the three required fields.
    pub fn into_parts(self) -> Result<(String, String, Number), LedgerError> {
        let missing = |field: &str| LedgerError::Validation(format!("missing field: {}", field));
        Ok((
            self.sender.ok_or_else(|| missing("sender"))?,
            self.recipient.ok_or_else(|| missing("recipient"))?,
            self.amount.ok_or_else(|| missing("amount"))?,
        ))
    }
}

#[derive(Serialize)]
pub struct NewTxResponse {
    pub message: String,
    pub index: u64,
}

#[derive(Serialize)]
pub struct PendingResponse<'a> {
    pub size: usize,
    pub transactions: &'a [Transaction],
}
