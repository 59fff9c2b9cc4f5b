//! tiledata CLI - convert the tile table CSV into a JSON catalog
//!
//! ```bash
//! tiledata                        # reads $TILEDATA_SOURCE or ./data.csv, prints JSON
//! tiledata tiles.csv -o tiles.json
//! tiledata tiles.csv --indent 2 --quiet
//! ```

use clap::Parser;
use std::path::PathBuf;
use tiledata::logs::{log_error, log_success, LOGGER};
use tiledata::{convert_file, resolve_source, write_output, ConvertOptions};

#[derive(Parser)]
#[command(name = "tiledata")]
#[command(about = "Convert tile definition CSV into a JSON tile catalog", long_about = None)]
struct Cli {
    /// Input CSV file (default: $TILEDATA_SOURCE, then data.csv)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Spaces per indentation level
    #[arg(long, default_value = "3")]
    indent: usize,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    LOGGER.set_quiet(cli.quiet);

    if let Err(e) = run(cli) {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = ConvertOptions {
        indent: cli.indent,
        ..ConvertOptions::default()
    };

    let source = resolve_source(cli.input.as_deref());
    let result = convert_file(&source, &options)?;

    write_output(&result.json, cli.output.as_deref())?;
    if let Some(path) = &cli.output {
        log_success(format!("Output written to: {}", path.display()));
    }

    Ok(())
}
