use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use py2cpp::codegen::generate_cpp;

/// Fixed path the generated program is written to.
const OUTPUT_FILE: &str = "output.cpp";

#[derive(Parser, Debug)]
#[command(name = "py2cpp", version, about = "Translate a small Python subset into C++")]
struct CliArgs {
    /// Python source file to translate
    input: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();

    let args = CliArgs::parse();

    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("could not open file {}", args.input.display()))?;

    let cpp_code = generate_cpp(&source);

    fs::write(OUTPUT_FILE, cpp_code)
        .with_context(|| format!("could not create output file {}", OUTPUT_FILE))?;

    println!("Generated C++ code saved to {}", OUTPUT_FILE);
    Ok(())
}

/// Install a stderr tracing subscriber when RUST_LOG is set. Stdout carries
/// only the success message, so trace output never mixes into it.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_err() {
        return;
    }
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
