//! Known-answer vectors
//!
//! The all-zero block vector is the published TEA reference value; the rest
//! were produced by an independent implementation of the same arithmetic and
//! cover non-default round counts and both modes with the legacy padding.

use teacrypt_algorithms::{cbc_decrypt, cbc_encrypt, decrypt_block, ecb_transform, encrypt_block, Direction};

/// Single-block vector
#[derive(Debug, Clone, Copy)]
pub struct BlockVector {
    pub key: [u32; 4],
    pub rounds: u32,
    pub plaintext: u64,
    pub ciphertext: u64,
}

/// ECB vector; `plaintext` and `ciphertext` are hex
#[derive(Debug, Clone, Copy)]
pub struct EcbVector {
    pub key: [u32; 4],
    pub plaintext: &'static str,
    pub ciphertext: &'static str,
}

/// CBC vector; `ciphertext` includes the IV prefix
#[derive(Debug, Clone, Copy)]
pub struct CbcVector {
    pub key: [u32; 4],
    pub iv: &'static str,
    pub plaintext: &'static str,
    pub ciphertext: &'static str,
}

const K_ZERO: [u32; 4] = [0; 4];
const K_ONE: [u32; 4] = [0, 0, 0, 1];
const K_SEQ: [u32; 4] = [0x0123_4567, 0x89ab_cdef, 0xfedc_ba98, 0x7654_3210];
const K_BEEF: [u32; 4] = [0xdead_beef, 0x0123_4567, 0x89ab_cdef, 0xfeed_face];
const K_ONES: [u32; 4] = [u32::MAX; 4];

pub const BLOCK_VECTORS: &[BlockVector] = &[
    BlockVector {
        key: K_ZERO,
        rounds: 32,
        plaintext: 0,
        ciphertext: 0x41ea_3a0a_94ba_a940,
    },
    BlockVector {
        key: K_ONE,
        rounds: 32,
        plaintext: 0,
        ciphertext: 0x0c6d_2a1d_930c_3fab,
    },
    BlockVector {
        key: K_SEQ,
        rounds: 32,
        plaintext: 0x0123_4567_89ab_cdef,
        ciphertext: 0x17b5_ba51_9858_1091,
    },
    BlockVector {
        key: K_BEEF,
        rounds: 32,
        plaintext: 0x4142_4344_4546_4748,
        ciphertext: 0x2daa_0a2e_17d6_5235,
    },
    BlockVector {
        key: K_ONES,
        rounds: 32,
        plaintext: u64::MAX,
        ciphertext: 0x319b_befb_016a_bdb2,
    },
    BlockVector {
        key: K_SEQ,
        rounds: 1,
        plaintext: 0x0123_4567_89ab_cdef,
        ciphertext: 0x331d_9508_1fb9_e950,
    },
    BlockVector {
        key: K_ZERO,
        rounds: 16,
        plaintext: 0,
        ciphertext: 0xa889_f798_182d_8083,
    },
];

pub const ECB_VECTORS: &[EcbVector] = &[
    EcbVector {
        key: K_BEEF,
        plaintext: "",
        ciphertext: "09d0eddfbfc0c975",
    },
    EcbVector {
        key: K_BEEF,
        plaintext: "414243",
        ciphertext: "401f5e176e126298",
    },
    EcbVector {
        key: K_BEEF,
        plaintext: "4142434445464748",
        ciphertext: "2daa0a2e17d6523509d0eddfbfc0c975",
    },
    EcbVector {
        key: [1, 2, 3, 4],
        // "The quick brown fox!"
        plaintext: "54686520717569636b2062726f776e20666f7821",
        ciphertext: "c42f874779e5bf65a688aac7cac6c4ec7c6ba3eb43c27d54",
    },
];

pub const CBC_VECTORS: &[CbcVector] = &[
    CbcVector {
        key: K_SEQ,
        iv: "0001020304050607",
        // "grayscale pixels"
        plaintext: "677261797363616c6520706978656c73",
        ciphertext: "0001020304050607aebb123d6b280f0e958a5394b0829d79",
    },
    CbcVector {
        key: K_SEQ,
        iv: "0001020304050607",
        plaintext: "616263",
        ciphertext: "0001020304050607f171e94001d7e616",
    },
    CbcVector {
        key: K_ZERO,
        iv: "ffffffffffffffff",
        plaintext: "000000000000000000000000000000000000000000000000",
        ciphertext: "fffffffffffffffff6f4bf6e1335b5b88767ad4a09a2b94d37aa8c0e129aed4a",
    },
];

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap_or_default()
}

/// Check every block vector in both directions
pub fn check_block_vectors() -> Vec<String> {
    let mut failures = Vec::new();
    for (i, v) in BLOCK_VECTORS.iter().enumerate() {
        let ct = encrypt_block(v.plaintext, &v.key, v.rounds);
        if ct != v.ciphertext {
            failures.push(format!("block #{}: encrypt gave {:016x}", i, ct));
        }
        let pt = decrypt_block(v.ciphertext, &v.key, v.rounds);
        if pt != v.plaintext {
            failures.push(format!("block #{}: decrypt gave {:016x}", i, pt));
        }
    }
    failures
}

/// Check ECB encryption vectors
pub fn check_ecb_vectors() -> Vec<String> {
    let mut failures = Vec::new();
    for (i, v) in ECB_VECTORS.iter().enumerate() {
        match ecb_transform(&unhex(v.plaintext), &v.key, Direction::Encrypt) {
            Ok(ct) if hex::encode(&ct) == v.ciphertext => {}
            Ok(ct) => failures.push(format!("ecb #{}: got {}", i, hex::encode(ct))),
            Err(e) => failures.push(format!("ecb #{}: {}", i, e)),
        }
    }
    failures
}

/// Check CBC vectors in both directions
///
/// Decryption must return the plaintext zero-padded to a whole block.
pub fn check_cbc_vectors() -> Vec<String> {
    let mut failures = Vec::new();
    for (i, v) in CBC_VECTORS.iter().enumerate() {
        let plaintext = unhex(v.plaintext);
        match cbc_encrypt(&plaintext, &v.key, &unhex(v.iv)) {
            Ok(ct) if hex::encode(&ct) == v.ciphertext => {}
            Ok(ct) => failures.push(format!("cbc #{}: got {}", i, hex::encode(ct))),
            Err(e) => failures.push(format!("cbc #{}: {}", i, e)),
        }

        let mut expected = plaintext;
        expected.resize(expected.len().div_ceil(8) * 8, 0);
        match cbc_decrypt(&unhex(v.ciphertext), &v.key) {
            Ok(pt) if pt == expected => {}
            Ok(pt) => failures.push(format!("cbc #{} decrypt: got {}", i, hex::encode(pt))),
            Err(e) => failures.push(format!("cbc #{} decrypt: {}", i, e)),
        }
    }
    failures
}
