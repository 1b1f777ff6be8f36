use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use jsxsugar_cli::args::CliArgs;
use jsxsugar_cli::{driver, tracing_config};

fn main() -> Result<()> {
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let outputs = driver::run(&args)?;
    let rendered = driver::render(&outputs, args.emit_map)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(&rendered).context("failed to write output")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}
