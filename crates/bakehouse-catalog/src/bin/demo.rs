//! # Order Flow Demo
//!
//! Builds a catalog, submits a representative order, and prints the receipt.
//!
//! ## Usage
//! ```bash
//! # Use the built-in sample catalog
//! cargo run -p bakehouse-catalog --bin demo
//!
//! # Load a catalog from a JSON document
//! cargo run -p bakehouse-catalog --bin demo -- --config ./catalog.json
//! ```
//!
//! ## Demo Order
//! The submitted order is the classic scenario:
//! - 10 x VS5 (Vegemite Scroll)
//! - 14 x MB11 (Blueberry Muffin)
//! - 13 x CF (Croissant)

use std::env;

use bakehouse_catalog::{build_catalog, sample_catalog, CatalogConfig};
use bakehouse_core::{ItemRequest, OrderManager, Submission};
use tracing_subscriber::EnvFilter;

/// The demo order lines: (code, quantity as it arrives from intake).
const DEMO_ORDER: &[(&str, &str)] = &[("VS5", "10"), ("MB11", "14"), ("CF", "13")];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Bakehouse Order Flow Demo");
                println!();
                println!("Usage: demo [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>  Catalog JSON document (default: built-in sample)");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let catalog = match &config_path {
        Some(path) => {
            let config = CatalogConfig::from_path(path)?;
            build_catalog(&config)?
        }
        None => sample_catalog()?,
    };

    println!("Bakehouse Order Flow Demo");
    println!("=========================");
    println!("Catalog: {} products", catalog.len());
    for product in catalog.products() {
        let packs: Vec<String> = product
            .packs()
            .iter()
            .map(|p| format!("{} @ {}", p.size, p.price()))
            .collect();
        println!("  {:<5} {:<20} [{}]", product.code, product.name, packs.join(", "));
    }
    println!();

    let mut manager = OrderManager::new(catalog);

    let items: Vec<ItemRequest> = DEMO_ORDER
        .iter()
        .map(|&(code, qty)| ItemRequest::new(code, qty))
        .collect();

    println!("Submitting order ORD-1:");
    for item in &items {
        println!("  {} x {}", item.quantity, item.code);
    }
    println!();

    match manager.submit_order("ORD-1", &items)? {
        Submission::Priced(receipt) => {
            println!("Receipt for {}:", receipt.order_id);
            for line in &receipt.lines {
                let breakdown: Vec<String> =
                    line.packs.iter().map(|p| format!("1 x {}", p.size)).collect();
                println!(
                    "  {:>3} {:<5} {:>8}   ({})",
                    line.quantity,
                    line.code,
                    line.price.to_string(),
                    breakdown.join(", ")
                );
            }
            println!("  Total: {}", receipt.total);
        }
        Submission::Empty => {
            println!("No items submitted.");
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bakehouse=trace` - Show trace for bakehouse crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bakehouse=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
