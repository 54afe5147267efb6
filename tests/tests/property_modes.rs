//! Property-based tests for the ECB and CBC modes

use proptest::prelude::*;
use teacrypt_algorithms::{cbc_decrypt, cbc_encrypt, ecb_transform, Direction};

fn zero_padded(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    out.resize(data.len().div_ceil(8) * 8, 0);
    out
}

proptest! {
    #[test]
    fn cbc_roundtrip_is_zero_padded_input(
        key in any::<[u32; 4]>(),
        iv in any::<[u8; 8]>(),
        data in prop::collection::vec(any::<u8>(), 0..=200)
    ) {
        let ct = cbc_encrypt(&data, &key, &iv).unwrap();
        prop_assert_eq!(&ct[..8], &iv[..]);
        prop_assert_eq!(ct.len(), 8 + zero_padded(&data).len());

        let pt = cbc_decrypt(&ct, &key).unwrap();
        prop_assert_eq!(pt, zero_padded(&data));
    }

    #[test]
    fn ecb_output_always_grows(
        key in any::<[u32; 4]>(),
        data in prop::collection::vec(any::<u8>(), 0..=200)
    ) {
        let ct = ecb_transform(&data, &key, Direction::Encrypt).unwrap();
        prop_assert_eq!(ct.len() % 8, 0);
        prop_assert_eq!(ct.len(), (data.len() / 8 + 1) * 8);

        let pt = ecb_transform(&ct, &key, Direction::Decrypt).unwrap();
        prop_assert_eq!(&pt[..data.len()], &data[..]);
        prop_assert!(pt[data.len()..ct.len()].iter().all(|&b| b == 0));
    }

    #[test]
    fn ecb_identical_blocks_identical_ciphertext(
        key in any::<[u32; 4]>(),
        block in any::<[u8; 8]>(),
        other in any::<[u8; 8]>()
    ) {
        prop_assume!(block != other);
        let data = [block, other, block].concat();
        let ct = ecb_transform(&data, &key, Direction::Encrypt).unwrap();

        prop_assert_eq!(&ct[0..8], &ct[16..24]);
        prop_assert_ne!(&ct[0..8], &ct[8..16]);
    }

    #[test]
    fn cbc_block_two_depends_on_block_one(
        key in any::<[u32; 4]>(),
        iv in any::<[u8; 8]>(),
        data in any::<[u8; 24]>(),
        byte in 0usize..8,
        mask in 1u8..=255
    ) {
        let ct = cbc_encrypt(&data, &key, &iv).unwrap();
        let mut tampered = ct.clone();
        tampered[8 + byte] ^= mask;

        let pt = cbc_decrypt(&tampered, &key).unwrap();
        prop_assert_eq!(pt[8 + byte], data[8 + byte] ^ mask);
        prop_assert_ne!(&pt[8..16], &data[8..16]);
        prop_assert_eq!(&pt[16..24], &data[16..24]);
    }

    #[test]
    fn cbc_rejects_unaligned_ciphertext(
        key in any::<[u32; 4]>(),
        len in (1usize..100).prop_filter("unaligned", |l| l % 8 != 0)
    ) {
        prop_assert!(cbc_decrypt(&vec![0u8; len], &key).is_err());
    }
}
