//! BIP-39 Mnemonic Generation CLI
//!
//! Generates mnemonic sentences from the operating system CSPRNG.
//! Mnemonics go to stdout; logs and metrics go to stderr.

use bip39_mnemonic::{
    config::{FileConfig, OutputConfig},
    metrics::MetricsRegistry,
    Mnemonic, MnemonicEncoder, WordCount,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

/// Generate BIP-39 mnemonic sentences.
#[derive(Debug, Parser)]
#[command(name = "bip39-mnemonic", version, about)]
struct Cli {
    /// Words per mnemonic: 12, 15, 18, 21, or 24.
    #[arg(short, long)]
    words: Option<usize>,

    /// Number of mnemonics to generate.
    #[arg(short = 'n', long)]
    count: Option<u32>,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print one numbered word per line.
    #[arg(long)]
    numbered: bool,

    /// Write Prometheus metrics to stderr when done.
    #[arg(long)]
    metrics: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    // Command-line flags override the file
    if let Some(words) = cli.words {
        config.mnemonic.word_count = WordCount::try_from(words)?;
    }
    if let Some(count) = cli.count {
        config.output.count = count;
    }
    config.output.numbered |= cli.numbered;
    config.output.metrics |= cli.metrics;
    config.validate()?;

    debug!(?config, "Resolved configuration");
    info!(
        "BIP-39 mnemonic generator v{}: {} x {} words",
        bip39_mnemonic::VERSION,
        config.output.count,
        config.mnemonic.word_count
    );

    let mut encoder = MnemonicEncoder::from_os_entropy();

    for i in 0..config.output.count {
        let mnemonic = encoder.generate(config.mnemonic.word_count)?;
        print_mnemonic(&mnemonic, &config.output, i);
    }

    info!(
        "Done. Entropy drawn: {} bytes",
        encoder.stats().entropy_bytes_drawn
    );

    if config.output.metrics {
        let registry = MetricsRegistry::new()?;
        registry.update(&encoder.stats());
        eprint!("{}", registry.encode()?);
    }

    Ok(())
}

fn print_mnemonic(mnemonic: &Mnemonic, output: &OutputConfig, index: u32) {
    if !output.numbered {
        println!("{}", mnemonic);
        return;
    }

    if index > 0 {
        println!();
    }
    for (i, word) in mnemonic.words().enumerate() {
        println!("{:>2}. {}", i + 1, word);
    }
}
