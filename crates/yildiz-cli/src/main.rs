//! Command-line interface for the Yildiz cipher.

#![forbid(unsafe_code)]

mod avalanche;
mod console;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use yildiz_core::{Mode, YildizCipher};

use crate::console::Console;

/// Yildiz cipher CLI.
#[derive(Parser)]
#[command(
    name = "yildiz",
    version,
    author,
    about = "Yildiz 128-bit SPN cipher (ECB/CBC). Not for protecting real data."
)]
struct Cli {
    /// Defaults to the interactive console.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu: encrypt, decrypt and avalanche test.
    Console {
        /// Key text; prompted for when omitted.
        #[arg(long)]
        key: Option<String>,
        /// Block mode.
        #[arg(long, default_value_t = Mode::Ecb)]
        mode: Mode,
    },
    /// Encrypt text or a file to hex.
    Enc {
        #[command(flatten)]
        cipher: CipherArgs,
        /// Plaintext given inline.
        #[arg(long, conflicts_with = "input", required_unless_present = "input")]
        text: Option<String>,
        /// Read plaintext bytes from a file.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Write the hex ciphertext here instead of stdout.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Decrypt hex ciphertext.
    Dec {
        #[command(flatten)]
        cipher: CipherArgs,
        /// Ciphertext given inline.
        #[arg(
            long,
            value_name = "HEX",
            conflicts_with = "input",
            required_unless_present = "input"
        )]
        hex: Option<String>,
        /// Read the hex ciphertext from a file.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Write raw plaintext bytes here instead of printing UTF-8 text.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Measure how much the ciphertext changes when one plaintext bit flips.
    Avalanche {
        #[command(flatten)]
        cipher: CipherArgs,
        /// Text to test.
        #[arg(long)]
        text: String,
    },
    /// Run a local demo: encrypt a fixed message in both modes and decrypt it back.
    Demo {
        /// Optional RNG seed for a reproducible CBC IV.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct CipherArgs {
    /// Key text (any length).
    #[arg(long)]
    key: String,
    /// Block mode.
    #[arg(long, default_value_t = Mode::Ecb)]
    mode: Mode,
}

impl CipherArgs {
    fn build(&self) -> (YildizCipher, Mode) {
        (YildizCipher::new(&self.key), self.mode)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Console {
        key: None,
        mode: Mode::Ecb,
    }) {
        Commands::Console { key, mode } => cmd_console(key, mode),
        Commands::Enc {
            cipher,
            text,
            input,
            output,
        } => cmd_enc(&cipher, text, input.as_ref(), output.as_ref()),
        Commands::Dec {
            cipher,
            hex,
            input,
            output,
        } => cmd_dec(&cipher, hex, input.as_ref(), output.as_ref()),
        Commands::Avalanche { cipher, text } => cmd_avalanche(&cipher, &text),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_console(key: Option<String>, mode: Mode) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock(), mode).run(key)
}

fn cmd_enc(
    args: &CipherArgs,
    text: Option<String>,
    input: Option<&PathBuf>,
    output: Option<&PathBuf>,
) -> Result<()> {
    let (cipher, mode) = args.build();
    let plaintext = match (text, input) {
        (Some(text), _) => text.into_bytes(),
        (None, Some(path)) => fs::read(path).with_context(|| format!("read {}", path.display()))?,
        (None, None) => bail!("either --text or --input is required"),
    };
    let ciphertext = cipher.encrypt(&plaintext, mode);
    match output {
        Some(path) => {
            fs::write(path, ciphertext).with_context(|| format!("write {}", path.display()))?
        }
        None => println!("{ciphertext}"),
    }
    Ok(())
}

fn cmd_dec(
    args: &CipherArgs,
    hex: Option<String>,
    input: Option<&PathBuf>,
    output: Option<&PathBuf>,
) -> Result<()> {
    let (cipher, mode) = args.build();
    let ciphertext = match (hex, input) {
        (Some(hex), _) => hex,
        (None, Some(path)) => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
        }
        (None, None) => bail!("either --hex or --input is required"),
    };
    let ciphertext = ciphertext.trim();
    match output {
        Some(path) => {
            let plaintext = cipher
                .decrypt(ciphertext, mode)
                .with_context(|| format!("decrypt {mode} ciphertext"))?;
            fs::write(path, plaintext).with_context(|| format!("write {}", path.display()))?;
        }
        None => {
            let plaintext = cipher
                .decrypt_text(ciphertext, mode)
                .with_context(|| format!("decrypt {mode} ciphertext"))?;
            println!("{plaintext}");
        }
    }
    Ok(())
}

fn cmd_avalanche(args: &CipherArgs, text: &str) -> Result<()> {
    let (cipher, mode) = args.build();
    let report = avalanche::analyze(&cipher, text, mode);
    let mut out = io::stdout().lock();
    writeln!(out, "text 1:   {}", report.original)?;
    writeln!(out, "text 2:   {}", report.modified)?;
    writeln!(out, "output 1: {}", report.first)?;
    writeln!(out, "output 2: {}", report.second)?;
    writeln!(
        out,
        "differing: {} / {} ({:.2}%)",
        report.differing,
        report.total,
        report.ratio()
    )?;
    let verdict = if report.is_strong() { "strong" } else { "weak" };
    writeln!(out, "avalanche: {verdict}")?;
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    const DEMO_KEY: &str = "TestKey123";
    const DEMO_TEXT: &str = "Hello World";

    let cipher = YildizCipher::new(DEMO_KEY);
    let mut rng = seeded_rng(seed);

    println!("key: {DEMO_KEY}");
    println!("round key 0: {}", hex::encode(cipher.round_keys().get(0)));
    println!("plaintext: {DEMO_TEXT}");
    for mode in [Mode::Ecb, Mode::Cbc] {
        let ciphertext = cipher.encrypt_with_rng(DEMO_TEXT, mode, &mut rng);
        let decrypted = cipher
            .decrypt_text(&ciphertext, mode)
            .with_context(|| format!("decrypt {mode} demo ciphertext"))?;
        println!("{mode} ciphertext: {ciphertext}");
        println!("{mode} decrypted: {decrypted}");
        if decrypted != DEMO_TEXT {
            bail!("{mode} demo roundtrip failed");
        }
    }
    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}
