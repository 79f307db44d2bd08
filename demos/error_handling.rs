//! Error handling example for wayfarer-rs
//!
//! This example demonstrates proper error handling and edge cases

use wayfarer_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== Wayfarer Error Handling Example ===\n");

    // Example 1: Handling dataset load errors
    println!("--- Example 1: Loading a dataset that does not exist ---");
    match DefaultDataset::load_from_path("does/not/exist.json") {
        Ok(_) => println!("✓ Unexpectedly loaded"),
        Err(e) => {
            println!("✗ {e}");
            println!("  Shown to the visitor: {}", e.user_message());
        }
    }
    println!();

    // Example 2: Malformed JSON
    println!("--- Example 2: Malformed dataset ---");
    if let Err(e) = DefaultDataset::from_json_str("{ \"countries\": [") {
        println!("✗ {e}");
    }
    println!();

    // Example 3: A catalog that recovers on the next attempt
    println!("--- Example 3: Lazy catalog with retry ---");
    let mut first = true;
    let mut catalog = Catalog::new(|| {
        if std::mem::take(&mut first) {
            Err(TravelError::NotFound("simulated network failure".into()))
        } else {
            DefaultDataset::load()
        }
    });
    for attempt in 1..=2 {
        match catalog.search("temple") {
            Ok(results) => println!("  attempt {attempt}: {} temples", results.len()),
            Err(e) => println!("  attempt {attempt}: {e}"),
        }
    }
    println!();

    // Example 4: No matches is not an error
    println!("--- Example 4: Searching for something that is not there ---");
    let db = DefaultDataset::load()?;
    if search(&db, "xyzzynotreal").is_empty() {
        println!("  {}", NoResults::for_term("xyzzynotreal").message);
    }
    println!();

    // Example 5: Time lookup never fails
    println!("--- Example 5: Unknown zone ---");
    let zones = ZoneTable::empty().with_country(
        "Atlantis",
        wayfarer_rs::time::ZoneRule::Single("Ocean/Atlantis".into()),
    );
    println!("  {}", zones.resolve(&("Poseidonia", Some("Atlantis"))));

    Ok(())
}
