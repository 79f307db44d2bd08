//! Basic usage example for wayfarer-rs
//!
//! This example demonstrates how to:
//! - Load the bundled destination dataset
//! - Walk countries, cities, temples and beaches
//! - Run a search and print result cards with local time

use wayfarer_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== Wayfarer Basic Usage Example ===\n");

    println!("Loading travel dataset...");
    let db = DefaultDataset::load()?;
    println!("✓ Dataset loaded successfully\n");

    // Example 1: Walk the dataset
    println!("--- Example 1: Countries and cities ---");
    for country in db.countries() {
        println!("{} ({} cities)", country.name(), country.cities().len());
        for city in country.cities() {
            println!("  - {}", city.name());
        }
    }
    println!();

    println!("--- Example 2: Temples and beaches ---");
    for temple in db.temples() {
        println!("Temple: {}", temple.name());
    }
    for beach in db.beaches() {
        println!("Beach: {}", beach.name());
    }
    println!();

    // Example 3: Search and render
    println!("--- Example 3: Search for 'beach' ---");
    let results: Vec<SearchResult> = search(&db, "beach").iter().map(|h| h.to_result()).collect();
    let cards = build_cards(results, &ZoneTable::default(), chrono::Utc::now());
    println!("{}", results_heading(cards.len()));
    for card in &cards {
        println!("- {} [{}]", card.result.name, card.result.kind);
        println!("  {}", card.time_display);
    }
    println!();

    // Example 4: Local time for a single destination
    println!("--- Example 4: Local time ---");
    if let Some(hit) = search(&db, "Tokyo").first() {
        println!("{}", resolve_time(hit));
    }

    Ok(())
}
