use log::{debug, info, warn};
use serde_json::Number;

use super::block::now_secs;
use super::{Block, MINING_REWARD, ProofOfWork};
use crate::error::{LedgerError, Result};
use crate::transaction::Transaction;

/// In-memory append-only chain plus the pool of transactions waiting for
/// the next block.
///
/// Callers sharing a ledger across threads must serialize every call
/// (the HTTP shell keeps it behind one `Mutex`).
#[derive(Debug)]
pub struct Ledger {
    chain: Vec<Block>,
    pending: Vec<Transaction>,
    pow: ProofOfWork,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Initialize a ledger holding only a genesis block stamped now.
    pub fn new() -> Self {
        Self::with_proof_of_work(ProofOfWork::default())
    }

    pub fn with_proof_of_work(pow: ProofOfWork) -> Self {
        Self::with_genesis_timestamp(pow, now_secs())
    }

    pub fn with_genesis_timestamp(pow: ProofOfWork, timestamp: f64) -> Self {
        Self {
            chain: vec![Block::genesis(timestamp)],
            pending: Vec::new(),
            pow,
        }
    }

    /// Queue a transaction for the next block. Returns the index of the
    /// block it will be recorded in.
    pub fn new_transaction(
        &mut self,
        sender: &str,
        recipient: &str,
        amount: impl Into<Number>,
    ) -> Result<u64> {
        let tx = Transaction::new(sender, recipient, amount)?;
        let next = self.last_block().index + 1;
        debug!(
            "LEDGER - queued tx {:?} -> {:?} ({}); pool size {}, next block #{}",
            tx.sender,
            tx.recipient,
            tx.amount,
            self.pending.len() + 1,
            next
        );
        self.pending.push(tx);
        Ok(next)
    }

    /// Return the last block in the chain.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("ledger should always have at least the genesis block")
    }

    /// Check `proof` against the last block and, if it holds, seal the pool
    /// into a new block. On error nothing is mutated.
    ///
    /// With a `miner_id`, a reward transaction is queued afterwards so it is
    /// recorded in the block following the one just sealed.
    pub fn seal_block(&mut self, proof: u64, miner_id: Option<&str>) -> Result<Block> {
        // Build the reward up front so a bad id cannot fail after the append.
        let reward = miner_id
            .map(|id| Transaction::reward(id, MINING_REWARD))
            .transpose()?;

        let last = self.last_block();
        let serialization = last.canonical_serialize()?;
        if !self.pow.is_valid(&serialization, proof) {
            debug!("LEDGER - rejected proof {} for block #{}", proof, last.index);
            return Err(LedgerError::InvalidProof { proof });
        }

        let previous_hash = last.canonical_hash()?;
        let index = last.index + 1;
        let block = Block::new(
            index,
            now_secs(),
            std::mem::take(&mut self.pending),
            proof,
            previous_hash,
        );
        self.chain.push(block.clone());

        if let Some(tx) = reward {
            self.pending.push(tx);
        }

        info!(
            "LEDGER - sealed block #{} (proof={}, txs={}, rewards={}, prev={})",
            block.index,
            block.proof,
            block.transactions.len(),
            block.transactions.iter().filter(|t| t.is_reward()).count(),
            block.previous_hash
        );
        Ok(block)
    }

    /// Read-only view of the full chain.
    pub fn chain_snapshot(&self) -> &[Block] {
        &self.chain
    }

    pub fn pending_transactions(&self) -> &[Transaction] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn difficulty(&self) -> usize {
        self.pow.difficulty()
    }

    /// Validate the entire chain: genesis shape, index continuity, hash
    /// linkage and each block's proof against its predecessor.
    pub fn validate_chain(&self) -> Result<()> {
        let genesis = self.chain.first().ok_or_else(|| LedgerError::BrokenChain {
            index: 0,
            reason: "chain is empty".into(),
        })?;
        if !genesis.is_genesis() {
            return Err(LedgerError::BrokenChain {
                index: genesis.index,
                reason: "first block is not a genesis block".into(),
            });
        }

        for pair in self.chain.windows(2) {
            let (prev, current) = (&pair[0], &pair[1]);
            let broken = |reason: &str| LedgerError::BrokenChain {
                index: current.index,
                reason: reason.to_string(),
            };

            if current.index != prev.index + 1 {
                warn!("LEDGER - non-monotonic index at #{}", current.index);
                return Err(broken("index does not follow previous block"));
            }
            if current.previous_hash != prev.canonical_hash()? {
                return Err(broken("previous_hash mismatch"));
            }
            if !self.pow.is_valid(&prev.canonical_serialize()?, current.proof) {
                return Err(broken("proof does not meet difficulty"));
            }
        }

        Ok(())
    }
}
