#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "jsonschema2jsdoc", about = "Convert JSON Schema to JSDoc typedefs")]
struct Cli {
    /// Path to the JSON Schema input
    #[arg(value_name = "JSONSCHEMA")]
    input: Option<PathBuf>,

    /// Path to the JSDoc output file
    #[arg(value_name = "JSDOC")]
    output: Option<PathBuf>,

    /// Suffix appended to top-level property names to form typedef names
    #[arg(long, default_value = "Type")]
    type_suffix: String,

    /// Log each processed property to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[cfg(feature = "cli")]
fn main() {
    use colored::Colorize;
    use jsonschema_jsdoc::converter::{convert_jsons_to_jsdoc, JsonToJsdocConverter, RenderOptions};
    use tracing_subscriber::filter::LevelFilter;

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        })
        .init();

    let Some(input) = cli.input else {
        eprintln!("{}", "An input path and an output path are required.".red());
        std::process::exit(1);
    };
    let Some(output) = cli.output else {
        eprintln!("{}", "An output path is required.".red());
        std::process::exit(1);
    };

    let options = RenderOptions {
        type_suffix: cli.type_suffix,
        ..RenderOptions::default()
    };
    let converter =
        JsonToJsdocConverter::with_options(options).with_logger(|msg| tracing::debug!("{msg}"));

    if let Err(e) = convert_jsons_to_jsdoc(&input, &output, &converter) {
        eprintln!("{} {e}", "Error:".red());
        std::process::exit(1);
    }

    println!(
        "{}",
        format!("Converted JSON schema to JSDoc file: {}", output.display()).blue()
    );
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This binary is only available with the `cli` feature enabled.");
    std::process::exit(1);
}
