//! End-to-end flows from configuration text to ciphertext and back

use teacrypt_api::Error;
use teacrypt_symmetric::adapter::{blocks_from_bytes, blocks_to_bytes, key_to_hex};
use teacrypt_symmetric::{
    parse_iv_hex, parse_key_hex, CipherConfig, Mode, Padding, SymmetricCipher, TeaCipher,
};
use teacrypt_tests::{run_vector_tests, seeded_bytes};

#[test]
fn test_known_answer_vectors() {
    let failures = run_vector_tests();
    assert!(failures.is_empty(), "{:#?}", failures);
}

#[test]
fn test_zero_key_roundtrip_vector() {
    let key = parse_key_hex("00000000000000000000000000000001").unwrap();
    let ct = teacrypt_algorithms::encrypt_block(0, key.words(), 32);
    assert_eq!(teacrypt_algorithms::decrypt_block(ct, key.words(), 32), 0);
    assert_eq!(ct, 0x0c6d_2a1d_930c_3fab);
}

#[test]
fn test_config_to_cbc_matches_vector() {
    let config = CipherConfig::parse(
        "cbc\n0123456789abcdeffedcba9876543210\n0001020304050607\npixels.png\n",
    )
    .unwrap();
    let cipher = TeaCipher::from_config(&config);

    let ct = cipher.encrypt(b"grayscale pixels").unwrap();
    assert_eq!(
        hex::encode(&ct),
        "0001020304050607aebb123d6b280f0e958a5394b0829d79"
    );
}

#[test]
fn test_image_sized_roundtrip() {
    let pixels = seeded_bytes(11, 64 * 48 + 5);
    let key = parse_key_hex("feedfacecafebeef").unwrap();
    let iv = parse_iv_hex("0x8badf00d").unwrap();

    for cipher in [TeaCipher::ecb(key.clone()), TeaCipher::cbc(key.clone(), iv.clone())] {
        let ct = cipher.encrypt(&pixels).unwrap();
        let pt = cipher.decrypt(&ct).unwrap();
        assert!(pt.len() >= pixels.len());
        assert_eq!(&pt[..pixels.len()], &pixels[..], "{}", cipher.name());
        assert!(pt[pixels.len()..].iter().all(|&b| b == 0));
    }
}

#[test]
fn test_pkcs7_recovers_exact_length() {
    let pixels = seeded_bytes(5, 333);
    let key = parse_key_hex("1").unwrap();
    let iv = parse_iv_hex("2").unwrap();

    for cipher in [
        TeaCipher::ecb(key.clone()).with_padding(Padding::Pkcs7),
        TeaCipher::cbc(key.clone(), iv.clone()).with_padding(Padding::Pkcs7),
    ] {
        let ct = cipher.encrypt(&pixels).unwrap();
        assert_eq!(cipher.decrypt(&ct).unwrap(), pixels);
    }
}

#[test]
fn test_ecb_and_cbc_disagree_on_aligned_padding() {
    let key = parse_key_hex("0").unwrap();
    let iv = parse_iv_hex("0").unwrap();
    let data = [0x11u8; 16];

    let ecb = TeaCipher::ecb(key.clone()).encrypt(&data).unwrap();
    let cbc = TeaCipher::cbc(key, iv).encrypt(&data).unwrap();
    assert_eq!(ecb.len(), 24);
    assert_eq!(cbc.len(), 8 + 16);
}

#[test]
fn test_error_kinds() {
    let err = CipherConfig::parse("xts\n0\n0\na.png").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));

    let err = CipherConfig::parse("ecb\n0\n0").unwrap_err();
    assert!(err.is_configuration());

    let err = CipherConfig::from_file("/nonexistent/teacrypt/input.txt").unwrap_err();
    assert!(matches!(err, Error::Resource { .. }));

    let cipher = TeaCipher::cbc(parse_key_hex("1").unwrap(), parse_iv_hex("1").unwrap());
    let err = cipher.decrypt(&[0u8; 13]).unwrap_err();
    assert!(matches!(err, Error::InvalidLength { actual: 13, .. }));
}

#[test]
fn test_adapter_roundtrips_text() {
    let key = parse_key_hex("0123456789ABCDEFfedcba9876543210").unwrap();
    assert_eq!(key_to_hex(&key), "0123456789abcdeffedcba9876543210");
    assert_eq!("CbC".parse::<Mode>().unwrap(), Mode::Cbc);

    let bytes = seeded_bytes(1, 32);
    assert_eq!(blocks_to_bytes(&blocks_from_bytes(&bytes).unwrap()), bytes);
}
