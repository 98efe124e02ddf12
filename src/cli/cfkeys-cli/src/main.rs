//! cfkeys CLI - local lifecycle invocation harness.
//!
//! Reads a lifecycle event from a JSON file (or stdin), runs the handler
//! against an in-memory parameter store, and delivers the result callback
//! to the event's response URL over HTTP.
//!
//! The store is fresh on every run and discarded on exit, so an `Update`
//! always takes the not-found provisioning path and a `Delete` retains
//! nothing observable; the harness is for exercising event handling and
//! callback delivery, not for inspecting stored state across runs.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cfkeys_handler::{HttpCallbackSink, LifecycleEvent, LifecycleHandler};
use cfkeys_keygen::RsaKeyGenerator;
use cfkeys_store_memory::MemoryStore;

#[derive(Parser)]
#[command(name = "cfkeys")]
#[command(about = "cfkeys - CDN signing key lifecycle handler")]
#[command(version)]
struct Cli {
    /// Lifecycle event JSON file ("-" reads stdin)
    #[arg(short, long, default_value = "-")]
    event: String,

    /// RSA modulus size in bits
    #[arg(long, default_value_t = 2048, env = "CFKEYS_KEY_BITS")]
    key_bits: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let raw = if cli.event == "-" {
        std::io::read_to_string(std::io::stdin()).context("failed to read event from stdin")?
    } else {
        std::fs::read_to_string(&cli.event)
            .with_context(|| format!("failed to read event file: {}", cli.event))?
    };

    // A parse failure here means no response URL is known, so there is
    // nothing to call back; exit non-zero instead.
    let event: LifecycleEvent =
        serde_json::from_str(&raw).context("failed to parse lifecycle event")?;

    let generator = RsaKeyGenerator::new(cli.key_bits)?;
    let handler = LifecycleHandler::new(
        Arc::new(MemoryStore::new()),
        Arc::new(generator),
        Arc::new(HttpCallbackSink::default()),
    );

    handler.handle(&event).await;

    tracing::info!("Lifecycle event processed");
    Ok(())
}
