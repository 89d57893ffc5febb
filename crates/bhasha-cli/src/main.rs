//! Batch runner: execute a program from a file (or stdin) and print what it
//! printed. The translation front end that produces these programs lives
//! upstream; this binary only runs its output.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use argh::FromArgs;

/// Run a bhasha program and print its captured output.
#[derive(FromArgs)]
struct Args {
    /// program file to execute; reads stdin when omitted
    #[argh(positional)]
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args: Args = argh::from_env();

    let source = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let result = bhasha_lang::execute(&source);
    if !result.output.is_empty() {
        println!("{}", result.output);
    }
    if let Some(err) = result.error {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
    Ok(())
}

/// Enable debug output with `RUST_LOG=bhasha_lang=debug`. Quiet by default.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}
