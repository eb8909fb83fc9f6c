//! whoip - who owns this IP address?
//!
//! Thin shim over the lookup engine: parse one address argument, run one
//! lookup, print the JSON result. A failed lookup prints the documented
//! `{"error": ...}` object on stdout; it is output, not a process failure.

use anyhow::Result;
use clap::Parser;
use whoip_client::RdapClient;

/// Look up the owner and network block of an IP address via the RIR RDAP
/// directories.
#[derive(Parser)]
#[command(name = "whoip", version, about)]
struct Args {
    /// IP address to look up (passed to the registries as-is)
    ip: String,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let client = RdapClient::new();
    let result = client.lookup_json(&args.ip).await;

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{result}");
    }

    Ok(())
}
