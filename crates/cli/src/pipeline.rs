//! Config file to encrypted and decrypted images

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::rngs::OsRng;
use teacrypt_symmetric::{CipherConfig, Iv, Padding, SymmetricCipher, TeaCipher};

use crate::raster::GrayImage;

/// Settings for one run
#[derive(Debug, Clone)]
pub struct Options {
    pub config: PathBuf,
    pub out_dir: PathBuf,
    pub random_iv: bool,
    pub padding: Padding,
    pub quiet: bool,
}

/// Files written by a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outputs {
    pub encrypted: PathBuf,
    pub decrypted: PathBuf,
}

/// Encrypt the configured image, then decrypt the result, saving both
pub fn run(opts: &Options) -> Result<Outputs> {
    let config = CipherConfig::from_file(&opts.config)
        .with_context(|| format!("failed to load configuration {}", opts.config.display()))?;

    let image = GrayImage::open(&config.path)
        .with_context(|| format!("failed to load image {}", config.path.display()))?;

    let mut cipher = TeaCipher::from_config(&config).with_padding(opts.padding);
    if opts.random_iv && config.mode.uses_iv() {
        cipher = cipher.with_iv(Iv::random(&mut OsRng));
    }

    let encrypted = cipher
        .encrypt(image.pixels())
        .with_context(|| format!("{} encryption failed", cipher.name()))?;
    let enc_image = GrayImage::from_stream(&encrypted, image.width())?;
    let enc_path = output_path(&opts.out_dir, "enc", &config);
    save(&enc_image, encrypted.len(), &enc_path, opts.quiet)?;

    let decrypted = cipher
        .decrypt(&encrypted)
        .with_context(|| format!("{} decryption failed", cipher.name()))?;
    let dec_image = GrayImage::with_dimensions(&decrypted, image.width(), image.height())?;
    let dec_path = output_path(&opts.out_dir, "dec", &config);
    save(&dec_image, decrypted.len(), &dec_path, opts.quiet)?;

    Ok(Outputs {
        encrypted: enc_path,
        decrypted: dec_path,
    })
}

fn output_path(dir: &Path, direction: &str, config: &CipherConfig) -> PathBuf {
    dir.join(format!("{}_{}.bmp", direction, config.mode))
}

fn save(image: &GrayImage, data_len: usize, path: &Path, quiet: bool) -> Result<()> {
    if !quiet {
        println!("width * height : {}", image.pixel_count());
        println!("length of data : {}", data_len);
    }
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
