//! Keyword search example for wayfarer-rs
//!
//! Shows how different kinds of queries are classified and what they return.

use wayfarer_rs::prelude::*;
use wayfarer_rs::search::QueryProfile;

fn main() -> Result<()> {
    println!("=== Wayfarer Keyword Search Example ===\n");

    let db = DefaultDataset::load()?;
    let queries = [
        "beach",
        "beaches",
        "temples",
        "country",
        "Australia",
        "Tokyo",
        "sao paulo",
        "coastal towns",
        "xyzzynotreal",
    ];

    for query in queries {
        let profile = QueryProfile::analyze(query);
        let hits = search(&db, query);
        println!(
            "--- {query:?} (categories: {:?}, exact: {}) ---",
            profile.categories, profile.exact_category
        );
        if hits.is_empty() {
            println!("  no results");
        }
        for hit in &hits {
            match hit.country_name() {
                Some(country) => println!("  [{}] {} ({country})", hit.kind, hit.name()),
                None => println!("  [{}] {}", hit.kind, hit.name()),
            }
        }
        println!();
    }

    Ok(())
}
