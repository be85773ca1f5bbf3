use std::fmt;

/// Errors produced by the ledger core.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerError {
    /// A submission was missing a field or carried a value of the wrong type.
    Validation(String),
    /// The submitted nonce does not satisfy the proof-of-work target.
    InvalidProof { proof: u64 },
    /// `validate_chain` found a block that breaks linkage, ordering or PoW.
    BrokenChain { index: u64, reason: String },
    Serialization(String),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LedgerError::Validation(msg) => write!(f, "Validation error: {}", msg),
            LedgerError::InvalidProof { proof } => write!(f, "Invalid proof: {}", proof),
            LedgerError::BrokenChain { index, reason } => {
                write!(f, "Broken chain at block #{}: {}", index, reason)
            }
            LedgerError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for LedgerError {}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::LedgerError;

    #[test]
    fn display_messages() {
        let e = LedgerError::Validation("missing field: sender".into());
        assert_eq!(e.to_string(), "Validation error: missing field: sender");

        let e = LedgerError::InvalidProof { proof: 42 };
        assert_eq!(e.to_string(), "Invalid proof: 42");

        let e = LedgerError::BrokenChain {
            index: 3,
            reason: "previous_hash mismatch".into(),
        };
        assert_eq!(e.to_string(), "Broken chain at block #3: previous_hash mismatch");
    }

    #[test]
    fn converts_json_errors() {
        let err = serde_json::from_str::<u64>("not json").unwrap_err();
        let e: LedgerError = err.into();
        assert!(matches!(e, LedgerError::Serialization(_)));
    }
}
