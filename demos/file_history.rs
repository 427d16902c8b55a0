//! File History
//!
//! This example persists conversion history to disk and reads it back
//! as a fresh process would.
//!
//! Key concepts:
//! - File-backed store keyed by a single fixed key
//! - JSON for readability, binary for compactness
//! - Corrupt content reads as an empty history
//!
//! Run with: cargo run --example file_history

use std::fs;
use thermoscope::core::{convert, Unit};
use thermoscope::history::{ConversionRecord, FileStore, HistoryLog, StoreConfig, StoreFormat};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("=== File History Example ===\n");

    let dir = std::env::temp_dir().join("thermoscope-demo");

    for format in [StoreFormat::Json, StoreFormat::Binary] {
        let config = StoreConfig::default().with_format(format);
        let mut log = HistoryLog::new(FileStore::new(&dir, config.clone()));
        log.clear();

        for celsius in [-40.0, 0.0, 100.0] {
            let output = convert(celsius, Unit::Celsius, Unit::Fahrenheit)?;
            log.append(ConversionRecord::from_conversion(celsius, Unit::Celsius, output));
        }

        let path = log.store().path();
        println!("{:?} snapshot at {}", format, path.display());
        println!("  {} bytes on disk", fs::metadata(&path)?.len());

        let reopened = HistoryLog::new(FileStore::new(&dir, config));
        for record in reopened.list() {
            println!("  {}", record);
        }
        println!();
    }

    let config = StoreConfig::default();
    let store = FileStore::new(&dir, config);
    fs::write(store.path(), "{ not a snapshot")?;
    let log = HistoryLog::new(store);
    println!("After corrupting the JSON file: {} entries", log.len());

    println!("\n=== Example Complete ===");
    Ok(())
}
