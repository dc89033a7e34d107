use std::path::PathBuf;

use clap::Parser;
use form_spec::{load_form, render_outline};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Prints a human-readable outline of a form-designer JSON export",
    long_about = "Reads a form definition document (pages, sections, controls, visibility \
                  rules) and prints a summary outline followed by a detailed per-control \
                  listing"
)]
struct Cli {
    /// Path to the form definition JSON file.
    form_json: PathBuf,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    let form = load_form(&cli.form_json)?;
    println!("{}", render_outline(&form));
    Ok(())
}
