use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use whitelist_tools::{
    compute::Totals, data::MINT_WHITELIST, logging, read::read_records, write::write_totals,
};

/// Sums the ETH each address spent on whitelist mints, biggest spender first.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Transaction export to read.
    #[arg(long, default_value = "./mint_whitelist.csv")]
    input: PathBuf,

    /// Where to write the per-address totals.
    #[arg(long, default_value = "result.csv")]
    output: PathBuf,

    /// Method name whose calls are counted.
    #[arg(long, default_value = MINT_WHITELIST)]
    method: String,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    logging::init()?;

    let input = std::fs::File::open(&cli.input)
        .with_context(|| format!("cannot open {}", cli.input.display()))?;
    let mut totals = Totals::new(cli.method);
    read_records(input, &mut totals)
        .with_context(|| format!("cannot read {}", cli.input.display()))?;
    let grand_total = totals.grand_total();
    let totals = totals.into_sorted();
    info!(addresses = totals.len(), ?grand_total, "aggregated whitelist mints");

    let output = std::fs::File::create(&cli.output)
        .with_context(|| format!("cannot create {}", cli.output.display()))?;
    write_totals(output, &totals)?;
    Ok(())
}
