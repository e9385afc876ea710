//! Code check that reveals the admin overlay.
//!
//! Codes are compared as SHA-256 digests with a branch-free fold, so the
//! comparison time does not depend on where the first mismatch is.

use sha2::{Digest, Sha256};

pub type CodeDigest = [u8; 32];

pub fn digest_code(code: &str) -> CodeDigest {
    Sha256::digest(code.as_bytes()).into()
}

#[derive(Clone, PartialEq, Eq)]
pub struct AdminGate {
    expected: CodeDigest,
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate")
            .field("expected", &"[REDACTED]")
            .finish()
    }
}

impl AdminGate {
    pub fn from_digest(expected: CodeDigest) -> Self {
        Self { expected }
    }

    pub fn from_code(code: &str) -> Self {
        Self::from_digest(digest_code(code))
    }

    /// Exact match against the configured code. No attempt limit.
    pub fn check(&self, candidate: &str) -> bool {
        constant_time_eq(&digest_code(candidate), &self.expected)
    }
}

fn constant_time_eq(left: &CodeDigest, right: &CodeDigest) -> bool {
    left.iter()
        .zip(right.iter())
        .fold(0u8, |acc, (l, r)| acc | (l ^ r))
        == 0
}
