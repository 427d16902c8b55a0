//! Widget Session
//!
//! This example drives the converter widget the way a user would: typing
//! on the keypad, pressing shortcut keys, and clearing the history.
//!
//! Key concepts:
//! - Pure conversion core behind a thin shell
//! - Injected in-memory history store
//! - Display sink receiving formatted results and history
//!
//! Run with: RUST_LOG=debug cargo run --example widget_session

use thermoscope::history::{ConversionRecord, HistoryLog, MemoryStore};
use thermoscope::shell::{DisplaySink, Status, Widget};
use tracing_subscriber::EnvFilter;

struct Terminal;

impl DisplaySink for Terminal {
    fn show_result(&mut self, message: &str, status: Status) {
        match status {
            Status::Success => println!("  Result: {}", message),
            Status::Error => println!("  Error:  {}", message),
        }
    }

    fn show_history(&mut self, records: &[ConversionRecord]) {
        println!("  History ({} entries):", records.len());
        for record in records {
            println!("    {}", record);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("=== Widget Session Example ===\n");

    let mut widget = Widget::new(HistoryLog::new(MemoryStore::new()), Terminal);

    let session: [(&str, &str); 5] = [
        ("37", "Enter"),
        ("212", "c"),
        ("0", "k"),
        ("abc", "f"),
        ("", "f"),
    ];

    for (text, key) in session {
        println!("Input {:?}, key {:?}", text, key);
        widget.input_mut().set_text(text);
        widget.press_key(key);
        println!();
    }

    println!("Clearing history");
    widget.clear_history();

    println!("\n=== Example Complete ===");
}
