//! Property-based tests for the TEA block function

use proptest::prelude::*;
use teacrypt_algorithms::{
    decrypt_block, encrypt_block, BlockCipher, Tea, TeaKey, DEFAULT_ROUNDS,
};

proptest! {
    #[test]
    fn block_roundtrip(key in any::<[u32; 4]>(), block in any::<u64>()) {
        let ct = encrypt_block(block, &key, DEFAULT_ROUNDS);
        prop_assert_eq!(decrypt_block(ct, &key, DEFAULT_ROUNDS), block);
    }

    #[test]
    fn block_roundtrip_any_rounds(
        key in any::<[u32; 4]>(),
        block in any::<u64>(),
        rounds in 1u32..=64
    ) {
        let ct = encrypt_block(block, &key, rounds);
        prop_assert_eq!(decrypt_block(ct, &key, rounds), block);
    }

    #[test]
    fn byte_interface_matches_word_interface(key in any::<[u32; 4]>(), block in any::<u64>()) {
        let cipher = Tea::new(&TeaKey::new(key));
        let mut bytes = block.to_be_bytes();
        cipher.encrypt_block(&mut bytes).unwrap();
        prop_assert_eq!(u64::from_be_bytes(bytes), encrypt_block(block, &key, DEFAULT_ROUNDS));

        cipher.decrypt_block(&mut bytes).unwrap();
        prop_assert_eq!(u64::from_be_bytes(bytes), block);
    }

    #[test]
    fn distinct_blocks_distinct_ciphertexts(
        key in any::<[u32; 4]>(),
        a in any::<u64>(),
        b in any::<u64>()
    ) {
        prop_assume!(a != b);
        // a permutation never collides
        prop_assert_ne!(
            encrypt_block(a, &key, DEFAULT_ROUNDS),
            encrypt_block(b, &key, DEFAULT_ROUNDS)
        );
    }

    #[test]
    fn single_bit_flip_avalanches(
        key in any::<[u32; 4]>(),
        block in any::<u64>(),
        bit in 0u32..64
    ) {
        let a = encrypt_block(block, &key, DEFAULT_ROUNDS);
        let b = encrypt_block(block ^ (1u64 << bit), &key, DEFAULT_ROUNDS);
        let flipped = (a ^ b).count_ones();
        // expected 32; bounds are loose enough never to trip on a fair cipher
        prop_assert!((8..=56).contains(&flipped), "only {} bits changed", flipped);
    }
}
