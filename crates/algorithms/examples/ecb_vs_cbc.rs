//! Encrypts a striped "image" in both modes and reports how many
//! ciphertext blocks repeat. ECB leaks the stripe pattern; CBC does not.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use teacrypt_algorithms::{cbc_encrypt, ecb_transform, Direction, Iv, TeaKey};

fn distinct_blocks(data: &[u8]) -> usize {
    data.chunks(8).collect::<HashSet<_>>().len()
}

fn main() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let key = TeaKey::generate(&mut rng);
    let iv = Iv::random(&mut rng);

    // 64x64 pixels in four horizontal bands
    let pixels: Vec<u8> = (0..64 * 64).map(|i| ((i / 1024) * 64) as u8).collect();

    let ecb = ecb_transform(&pixels, key.words(), Direction::Encrypt).unwrap();
    let cbc = cbc_encrypt(&pixels, key.words(), &iv[..]).unwrap();

    println!("plaintext blocks: {} distinct of {}", distinct_blocks(&pixels), pixels.len() / 8);
    println!("ECB ciphertext:   {} distinct of {}", distinct_blocks(&ecb), ecb.len() / 8);
    println!("CBC ciphertext:   {} distinct of {}", distinct_blocks(&cbc[8..]), (cbc.len() - 8) / 8);
}
