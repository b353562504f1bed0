//! # Mesh Runtime
//!
//! ```text
//! mesh-runtime [--data-dir DIR] [--codec json|bincode] [--regenerate-on-corrupt] <COMMAND>
//!
//!   show                                  print the persisted state
//!   destinations <NODE_UUID> [--key IDX] [--address ADDR]
//!                                         list heartbeat candidates, optionally select
//!   reset                                 delete the record and bootstrap again
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mesh_destinations::HeartbeatDestinationApi;
use mesh_runtime::report::{render_candidates, render_destination, render_state};
use mesh_runtime::{MeshContext, RuntimeConfig};
use mesh_state::{Address, Codec, KeyIndex};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "mesh-runtime")]
#[command(about = "Bootstrap and inspect a persisted mesh network state")]
struct Cli {
    /// Directory holding the state record (overrides MESH_DATA_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Record encoding (overrides MESH_CODEC)
    #[arg(long)]
    codec: Option<Codec>,

    /// Replace an undecodable record with a fresh state
    #[arg(long)]
    regenerate_on_corrupt: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the persisted state
    Show,

    /// List heartbeat destination candidates for a node
    Destinations {
        node: Uuid,

        /// Network key index to publish with
        #[arg(long)]
        key: Option<KeyIndex>,

        /// Destination address, e.g. 0xC000
        #[arg(long, value_parser = parse_address)]
        address: Option<Address>,
    },

    /// Delete the persisted state and bootstrap again
    Reset,
}

impl Cli {
    fn apply(&self, mut config: RuntimeConfig) -> RuntimeConfig {
        if let Some(dir) = &self.data_dir {
            config.store.data_dir = dir.clone();
        }
        if let Some(codec) = self.codec {
            config.store.codec = codec;
        }
        if self.regenerate_on_corrupt {
            config.regenerate_on_corrupt = true;
        }
        config
    }
}

fn parse_address(value: &str) -> Result<Address, String> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    u16::from_str_radix(digits, 16)
        .map(Address::new)
        .map_err(|e| format!("'{}' is not a 16-bit hex address: {}", value, e))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.apply(RuntimeConfig::from_env());
    info!(
        "Mesh data directory {} ({})",
        config.store.data_dir.display(),
        config.store.codec
    );

    let mut context = MeshContext::open(&config).with_context(|| {
        format!(
            "failed to open mesh state in {}",
            config.store.data_dir.display()
        )
    })?;

    match cli.command {
        Command::Show => {
            print!("{}", render_state(context.state()));
        }
        Command::Destinations { node, key, address } => {
            let mut resolver = context
                .resolver_for(&node)
                .with_context(|| format!("cannot list destinations for {}", node))?;
            print!("{}", render_candidates(resolver.candidates()));

            if let Some(index) = key {
                resolver.select_key(index).context("key selection rejected")?;
            }
            if let Some(address) = address {
                let change = resolver
                    .select_address(address)
                    .context("destination selection rejected")?;
                println!("\nSelected {}", render_destination(&change.selected));
            }
            if let Some(resolved) = resolver.resolved() {
                println!(
                    "Heartbeat: network key {} → {}",
                    resolved.network_key, resolved.address
                );
            }
        }
        Command::Reset => {
            context.reset().context("failed to reset mesh state")?;
            println!("Mesh state reset");
            print!("{}", render_state(context.state()));
        }
    }

    Ok(())
}
