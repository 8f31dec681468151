use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use einvoice::{render, InvoiceCollection, Result};

#[derive(Parser)]
#[command(name = "einvoice")]
#[command(version, about = "Print Big5 e-invoice exports as indented text", long_about = None)]
struct Cli {
    /// Pipe-delimited invoice files to read, printed in order
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    for path in &cli.files {
        let collection = InvoiceCollection::from_file(path)?;
        print!("{}", render(&collection));
    }

    Ok(())
}
