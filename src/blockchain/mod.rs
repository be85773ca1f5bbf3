pub mod block;
pub mod canonical;
pub mod model;
pub mod pow;

pub use block::Block;
pub use model::Ledger;
pub use pow::ProofOfWork;

/// Required number of leading zero hex digits in a valid proof hash.
pub const DIFFICULTY: usize = 6;

/// Proof recorded on the genesis block.
pub const GENESIS_PROOF: u64 = 100;

/// Stand-in for `previous_hash` on the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "1";

/// Amount credited to a miner, queued for the block after the one it seals.
pub const MINING_REWARD: u64 = 1;
