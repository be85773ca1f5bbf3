use sha2::{Digest, Sha256};

use super::DIFFICULTY;

/// Proof-of-Work admission predicate.
///
/// A nonce is valid for a block serialization when
/// `sha256(serialization ++ decimal(proof))` rendered as hex starts with
/// `difficulty` zero digits. Holds no mutable state; safe to share across
/// miner threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofOfWork {
    difficulty: usize,
}

impl Default for ProofOfWork {
    fn default() -> Self {
        Self {
            difficulty: DIFFICULTY,
        }
    }
}

impl ProofOfWork {
    pub fn new(difficulty: usize) -> Self {
        Self { difficulty }
    }

    pub fn difficulty(&self) -> usize {
        self.difficulty
    }

    /// Hex digest of the guess `serialization ++ decimal(proof)`.
    pub fn guess_hash(serialization: &[u8], proof: u64) -> String {
        let mut hasher = Sha256::new();
        hasher.update(serialization);
        hasher.update(proof.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }

    pub fn is_valid(&self, serialization: &[u8], proof: u64) -> bool {
        Self::guess_hash(serialization, proof)
            .chars()
            .take(self.difficulty)
            .all(|c| c == '0')
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::ProofOfWork;

    /// Genesis serialization for a ledger pinned at `GENESIS_TS`.
    pub(crate) const GENESIS_TS: f64 = 1_700_000_000.5;
    pub(crate) const GENESIS_JSON: &str = r#"{"index": 1, "previous_hash": "1", "proof": 100, "timestamp": 1700000000.5, "transactions": []}"#;
    /// First nonce whose guess hash has at least six leading zeros.
    pub(crate) const SIX_ZERO_PROOF: u64 = 18_302_671;
    /// First nonce whose guess hash has exactly five leading zeros.
    pub(crate) const FIVE_ZERO_PROOF: u64 = 1_986_972;

    /// Brute-force nonce search for cheap test difficulties.
    pub(crate) fn find_proof(pow: &ProofOfWork, serialization: &[u8]) -> u64 {
        (0..).find(|p| pow.is_valid(serialization, *p)).unwrap()
    }

    #[test]
    fn default_difficulty_is_six() {
        assert_eq!(ProofOfWork::default().difficulty(), 6);
    }

    #[test]
    fn accepts_six_leading_zeros() {
        let pow = ProofOfWork::default();
        let h = ProofOfWork::guess_hash(GENESIS_JSON.as_bytes(), SIX_ZERO_PROOF);
        assert!(h.starts_with("000000"));
        assert!(pow.is_valid(GENESIS_JSON.as_bytes(), SIX_ZERO_PROOF));
    }

    #[test]
    fn rejects_five_leading_zeros() {
        let pow = ProofOfWork::default();
        let h = ProofOfWork::guess_hash(GENESIS_JSON.as_bytes(), FIVE_ZERO_PROOF);
        assert!(h.starts_with("00000"));
        assert!(!h.starts_with("000000"));
        assert!(!pow.is_valid(GENESIS_JSON.as_bytes(), FIVE_ZERO_PROOF));
        // A lower target would have accepted it.
        assert!(ProofOfWork::new(5).is_valid(GENESIS_JSON.as_bytes(), FIVE_ZERO_PROOF));
    }

    #[test]
    fn deterministic() {
        let pow = ProofOfWork::default();
        let s = GENESIS_JSON.as_bytes();
        for p in [0, 1, 100, FIVE_ZERO_PROOF, SIX_ZERO_PROOF] {
            assert_eq!(pow.is_valid(s, p), pow.is_valid(s, p));
            assert_eq!(ProofOfWork::guess_hash(s, p), ProofOfWork::guess_hash(s, p));
        }
    }

    #[test]
    fn nonce_is_appended_as_decimal_text() {
        // "abc" ++ "12" hashes the same as "abc1" ++ "2".
        assert_eq!(
            ProofOfWork::guess_hash(b"abc", 12),
            ProofOfWork::guess_hash(b"abc1", 2)
        );
    }

    #[test]
    fn search_helper_finds_low_difficulty_nonce() {
        let pow = ProofOfWork::new(2);
        let p = find_proof(&pow, b"payload");
        assert!(pow.is_valid(b"payload", p));
        assert!(ProofOfWork::guess_hash(b"payload", p).starts_with("00"));
    }
}
