use clap::Parser;
use whitelist_tools::{logging, merkle::MerkleTree};

/// Computes the Merkle root of a mint whitelist.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Whitelisted addresses, in leaf order.
    #[arg(required = true)]
    addresses: Vec<String>,

    /// Also print the inclusion proof for this address.
    #[arg(long)]
    proof_for: Option<String>,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    logging::init()?;

    let tree = MerkleTree::new(&cli.addresses);
    println!("Root hash: {}", tree.root_hex());
    if let Some(address) = &cli.proof_for {
        println!("Proof: {:?}", tree.hex_proof(address)?);
    }
    Ok(())
}
