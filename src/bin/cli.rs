//! bankstore CLI
//!
//! Interactive menu over an account record file.

use std::io;

use bankstore::config::{Config, DuplicatePolicy, SyncStrategy};
use bankstore::session::Session;
use bankstore::RecordStore;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// bankstore
#[derive(Parser, Debug)]
#[command(name = "bankstore")]
#[command(about = "Bank account records in a fixed-width binary file")]
#[command(version)]
struct Args {
    /// Account record file
    #[arg(short, long, default_value = "accounts.dat")]
    file: String,

    /// fsync after every append or update
    #[arg(long)]
    sync: bool,

    /// Refuse to create an account whose number already exists
    #[arg(long)]
    reject_duplicates: bool,
}

fn main() {
    // Logs go to stderr so they never interleave with the menu
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("bankstore v{}", bankstore::VERSION);
    tracing::info!("Store file: {}", args.file);

    let config = Config::builder()
        .store_path(&args.file)
        .sync_strategy(if args.sync {
            SyncStrategy::EveryWrite
        } else {
            SyncStrategy::OsManaged
        })
        .duplicate_policy(if args.reject_duplicates {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::Allow
        })
        .build();

    let store = RecordStore::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(store, stdin.lock(), stdout.lock());

    if let Err(e) = session.run() {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }
}
