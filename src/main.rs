use anyhow::{Context, Result};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::env;
use std::path::PathBuf;
use tx_insights::store::{SourceFormat, TransactionStore};

/// Dataset used when no source file is given on the command line.
const EMBEDDED_TRANSACTIONS: &[u8] = include_bytes!("../data/transactions.json");

const DEFAULT_CLIENT: &str = "Tom Shelby";

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    log::debug!("Application started");

    let store = load_store()?;
    let client = env::args_os()
        .nth(2)
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_CLIENT.to_owned());
    log::debug!("Running queries for client {client:?}");

    print_report(&store, &client);

    log::debug!("Application finished");

    Ok(())
}

fn load_store() -> Result<TransactionStore> {
    match env::args_os().nth(1) {
        None => {
            log::debug!("No source given, using the embedded dataset");
            TransactionStore::from_reader(EMBEDDED_TRANSACTIONS, SourceFormat::Json)
                .context("embedded dataset is invalid")
        }
        Some(file_path) => {
            let path = PathBuf::from(file_path);
            log::debug!("Extracted filepath from args: {path:?}");
            TransactionStore::load(&path)
                .with_context(|| format!("failed to load transactions from {}", path.display()))
        }
    }
}

fn print_report(store: &TransactionStore, client: &str) {
    println!("Total Transaction Amount: {}", store.total_amount());
    println!(
        "Total Amount Sent by {client}: {}",
        store.total_amount_sent_by(client)
    );
    println!("Max Transaction Amount: {}", store.max_amount());
    println!("Unique Clients Count: {}", store.unique_client_count());
    println!(
        "{client} has open compliance issues: {}",
        store.has_open_compliance_issue(client)
    );

    println!("Transactions by Beneficiary:");
    for (beneficiary, transactions) in store.transactions_by_beneficiary().iter() {
        println!("  {beneficiary}:");
        for tx in transactions {
            println!("    {tx}");
        }
    }

    println!("Unsolved Issue IDs: {:?}", store.unsolved_issue_ids());
    println!("Solved Issue Messages: {:?}", store.solved_issue_messages());

    println!("Top 3 Transactions by Amount:");
    for tx in store.top3_by_amount() {
        println!("  {tx}");
    }

    println!(
        "Top Sender: {}",
        store.top_sender().unwrap_or("No sender found")
    );
}
