mod convert;
mod export;
mod parser;
mod record;

use std::path::Path;

use clap::Parser;

const INPUT_FILE: &str = "kasperesky_passwords.txt";
const OUTPUT_FILE: &str = "apple_passwords.csv";

/// Reads `kasperesky_passwords.txt` from the working directory and writes
/// `apple_passwords.csv` next to it, overwriting any existing file.
#[derive(Parser)]
#[command(
    name = "pwexport2csv",
    version,
    about = "Convert a Kaspersky Password Manager text export into a password-import CSV"
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let _ = Cli::parse();
    let output = Path::new(OUTPUT_FILE);
    let summary = convert::run(Path::new(INPUT_FILE), output)?;
    if summary.written {
        println!("Converted {} entries to {}", summary.entries, output.display());
    }
    Ok(())
}
