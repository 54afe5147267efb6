//! `teacrypt`: encrypt and decrypt a grayscale image with TEA
//!
//! Reads the four-line configuration file (mode, key, IV, image path),
//! encrypts the image's pixels in the configured mode, decrypts the result
//! again and writes both as `enc_<mode>.bmp` and `dec_<mode>.bmp`.

mod pipeline;
mod raster;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use teacrypt_symmetric::Padding;

use crate::pipeline::Options;

/// Padding scheme selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PaddingArg {
    /// Zero padding, bit-compatible with the legacy tool
    Legacy,
    /// PKCS#7, removed again on decrypt
    Pkcs7,
}

impl From<PaddingArg> for Padding {
    fn from(arg: PaddingArg) -> Self {
        match arg {
            PaddingArg::Legacy => Padding::Legacy,
            PaddingArg::Pkcs7 => Padding::Pkcs7,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "teacrypt",
    version,
    about = "Encrypt and decrypt a image as grayscale with TEA in ECB or CBC mode"
)]
struct Cli {
    /// Configuration file: mode, key, IV and image path on four lines
    #[arg(short, long, default_value = "input.txt")]
    config: PathBuf,

    /// Directory for enc_<mode>.bmp and dec_<mode>.bmp
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Ignore the configured IV and draw a random one (CBC only)
    #[arg(long)]
    random_iv: bool,

    /// Padding scheme
    #[arg(long, value_enum, default_value = "legacy")]
    padding: PaddingArg,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

impl From<Cli> for Options {
    fn from(cli: Cli) -> Self {
        Options {
            config: cli.config,
            out_dir: cli.out_dir,
            random_iv: cli.random_iv,
            padding: cli.padding.into(),
            quiet: cli.quiet,
        }
    }
}

fn main() -> Result<()> {
    let opts = Options::from(Cli::parse());
    let outputs = pipeline::run(&opts)?;
    if !opts.quiet {
        println!("encrypted image: {}", outputs.encrypted.display());
        println!("decrypted image: {}", outputs.decrypted.display());
    }
    Ok(())
}
