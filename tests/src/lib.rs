//! Testing utilities and benchmarks for the teacrypt library
pub mod vectors;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic pseudo-random bytes for reproducible tests and benches
pub fn seeded_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = vec![0u8; len];
    rng.fill_bytes(&mut out);
    out
}

/// Run every known-answer vector, returning a description of each mismatch
pub fn run_vector_tests() -> Vec<String> {
    let mut failures = Vec::new();
    failures.extend(vectors::check_block_vectors());
    failures.extend(vectors::check_ecb_vectors());
    failures.extend(vectors::check_cbc_vectors());
    failures
}
