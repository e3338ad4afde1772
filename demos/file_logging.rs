//! File logging example
//!
//! Demonstrates loading the sink configuration from JSON, periodic flushing,
//! and the day-stamped files it produces.
//!
//! Run with: cargo run --example file_logging

use daylog::prelude::*;
use daylog::{info, warning};
use std::thread;

fn main() -> Result<()> {
    println!("=== daylog - File Logging Example ===\n");

    let log_dir = std::env::temp_dir().join("daylog-files");
    std::fs::create_dir_all(&log_dir)?;

    // Any serde format works; missing fields take their defaults
    let document = serde_json::json!({
        "base_path": log_dir,
        "name": "application",
        "level": "DBG",
    });
    let config: SinkConfig = serde_json::from_value(document)
        .map_err(|e| LoggerError::config("SinkConfig", e.to_string()))?;
    let logger = Logger::with_config(config)?;

    println!("1. Logging from several threads:");
    thread::scope(|scope| {
        for worker in 0..3 {
            let logger = &logger;
            scope.spawn(move || {
                for item in 1..=5 {
                    info!(logger, "worker ", worker, " processing item ", item, "/5");
                    if item == 3 {
                        warning!(logger, "worker ", worker, ": item 3 took longer than expected");
                    }
                }
            });
        }
    });

    println!("   {} entries waiting for the flush task", logger.pending());

    println!("\n2. Waiting for the periodic flush:");
    thread::sleep(logger.config().flush_period() * 2);
    println!("   {} lines written so far", logger.metrics().written());

    logger.close();

    println!("\n3. Files:");
    for entry in std::fs::read_dir(&log_dir)? {
        println!("   {}", entry?.path().display());
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
