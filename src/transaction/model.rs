use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::{LedgerError, Result};

/// Sender recorded on mining-reward transactions (no real account).
pub const REWARD_SENDER: &str = "0";

/// A value transfer waiting in the pool or recorded in a block.
///
/// `amount` keeps the submitted JSON number as-is: integers stay integers
/// (`5`) and decimals stay decimals (`5.5`) in the canonical encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub recipient: String,
    pub amount: Number,
}

impl Transaction {
    /// Build a transaction, rejecting blank parties. Parties are stored
    /// exactly as submitted.
    pub fn new(sender: &str, recipient: &str, amount: impl Into<Number>) -> Result<Self> {
        if sender.trim().is_empty() {
            return Err(LedgerError::Validation("sender required".into()));
        }
        if recipient.trim().is_empty() {
            return Err(LedgerError::Validation("recipient required".into()));
        }

        Ok(Self {
            sender: sender.to_string(),
            recipient: recipient.to_string(),
            amount: amount.into(),
        })
    }

    /// Reward record credited to `miner_id` for sealing a block.
    pub fn reward(miner_id: &str, amount: u64) -> Result<Self> {
        Self::new(REWARD_SENDER, miner_id, amount)
    }

    pub fn is_reward(&self) -> bool {
        self.sender == REWARD_SENDER
    }
}

#[cfg(test)]
mod tests {
    use super::Transaction;
    use crate::error::LedgerError;
    use serde_json::Number;

    #[test]
    fn keeps_parties_as_submitted() {
        let tx = Transaction::new("  alice ", "bob\n", 5).unwrap();
        assert_eq!(tx.sender, "  alice ");
        assert_eq!(tx.recipient, "bob\n");
        assert_eq!(tx.amount, Number::from(5));
        assert!(!tx.is_reward());
    }

    #[test]
    fn keeps_decimal_amounts() {
        let amount = Number::from_f64(5.5).unwrap();
        let tx = Transaction::new("alice", "bob", amount.clone()).unwrap();
        assert_eq!(tx.amount, amount);
        assert_eq!(tx.amount.as_f64(), Some(5.5));
    }

    #[test]
    fn rejects_blank_sender_or_recipient() {
        assert!(matches!(
            Transaction::new("", "bob", 1),
            Err(LedgerError::Validation(_))
        ));
        assert!(matches!(
            Transaction::new("alice", "   ", 1),
            Err(LedgerError::Validation(_))
        ));
    }

    #[test]
    fn reward_uses_sentinel_sender() {
        let tx = Transaction::reward("miner-1", 1).unwrap();
        assert_eq!(tx.sender, "0");
        assert_eq!(tx.recipient, "miner-1");
        assert!(tx.is_reward());
    }
}
