use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::info;

use tg_id_guide::{build_document, content};

/// Renders the Telegram ID instruction PDF.
///
/// The document content is fixed; the only choice is where to write the
/// output file.
#[derive(Parser)]
#[command(author, version, about = "Renders the Telegram ID instruction PDF")]
struct Cli {
    /// Output file path.
    #[arg(value_name = "OUTPUT", default_value = content::DEFAULT_OUTPUT_FILE)]
    output: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = build_document(&cli.output) {
        eprintln!("Error: {}", err);
        print_error_sources(&err);
        process::exit(1);
    }
    info!("Generated {}", cli.output.display());
    println!("Generated {}", cli.output.display());
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
