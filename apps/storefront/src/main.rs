//! # Storefront Entry Point
//!
//! Wires the storefront together and runs a scripted demo session
//! against the in-process command layer.
//!
//! ## Module Organization
//! ```text
//! storefront/
//! ├── main.rs         ◄─── You are here (startup + demo session)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Immutable catalog handle
//! │   ├── cart.rs     ◄─── Cart state management
//! │   └── config.rs   ◄─── Store configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Browse / search / lookup
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   └── checkout.rs ◄─── Checkout + payment stub
//! └── error.rs        ◄─── StoreError for commands
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Build the seeded catalog (validated once, immutable afterwards)
//! 3. Create state objects (CatalogState, CartState, StoreConfig)
//! 4. Run the scripted session

mod commands;
mod error;
mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use bookmart_core::Catalog;
use commands::cart::{add_to_cart, get_cart, remove_from_cart, update_cart_line};
use commands::catalog::{browse_catalog, BrowseRequest};
use commands::checkout::{checkout, StubPaymentProvider};
use state::{CartState, CatalogState, StoreConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Bookmart storefront");

    // Build all shared state up front and pass it explicitly:
    // no ambient globals, no singleton providers.
    let config = StoreConfig::from_env();
    let catalog = CatalogState::new(Catalog::seeded());
    let cart = CartState::new();

    info!(books = catalog.inner().len(), store = %config.store_name, "State initialized");

    run_demo_session(&catalog, &cart, &config)?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Trace for the app only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// A scripted browse → search → cart → checkout session.
///
/// Stands in for the mobile UI this core was built to serve; every call
/// below is one the presentation layer would make.
fn run_demo_session(
    catalog: &CatalogState,
    cart: &CartState,
    config: &StoreConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Browse: cheapest fiction first
    let request = BrowseRequest {
        category: Some("fiction".to_string()),
        sort: Some("priceAsc".to_string()),
        ..BrowseRequest::default()
    };
    let fiction = browse_catalog(catalog, &request)?;

    println!("Fiction, cheapest first:");
    for book in &fiction {
        println!(
            "  [{}] {} — {} ({})",
            book.id,
            book.title,
            book.author,
            config.format_currency(book.price_cents)
        );
    }

    // Search across the whole catalog
    let request = BrowseRequest {
        search: Some("quantum".to_string()),
        ..BrowseRequest::default()
    };
    let matches = browse_catalog(catalog, &request)?;
    println!("\nSearch 'quantum': {} result(s)", matches.len());

    // Fill the cart: two copies of the cheapest fiction title, one search hit
    let first = fiction.first().expect("seed catalog has fiction");
    add_to_cart(catalog, cart, first.id)?;
    add_to_cart(catalog, cart, first.id)?;
    add_to_cart(catalog, cart, matches[0].id)?;

    // Adjust a quantity, then remove an id that was never added (no-op)
    update_cart_line(cart, first.id, 3)?;
    remove_from_cart(cart, 999_999);

    let response = get_cart(cart);
    println!("\nCart ({} lines):", response.lines.len());
    for line in &response.lines {
        println!(
            "  {} x{} = {}",
            line.title,
            line.quantity,
            config.format_currency(line.line_total_cents)
        );
    }
    println!(
        "Total: {}",
        config.format_currency(response.totals.total_cents)
    );

    // Checkout through the stubbed payment provider
    let summary = checkout(cart, config, &StubPaymentProvider)?;
    println!("\nCheckout summary:");
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
