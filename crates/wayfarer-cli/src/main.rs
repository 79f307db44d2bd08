//! wayfarer: Command-line interface for wayfarer-core
//!
//! Usage examples
//! --------------
//!
//! - Show dataset stats
//!   $ wayfarer stats
//!
//! - Search by category, country, city or any word of a description
//!   $ wayfarer search beaches
//!   $ wayfarer search japan --explain
//!
//! - Local time at a destination
//!   $ wayfarer time "Bora Bora, French Polynesia"
//!
//! Data source
//! -----------
//!
//! By default the CLI reads the dataset bundled with `wayfarer-core`. Use
//! `--input <path>` to point to another `.json` or `.json.gz` file.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::bail;
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wayfarer_core::contact::ContactForm;
use wayfarer_core::present::{build_cards, results_heading, NoResults};
use wayfarer_core::search::QueryProfile;
use wayfarer_core::{Catalog, DefaultDataset, ZoneTable};

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    // Determine input file (default JSON inside wayfarer-core)
    let input_path = args.input.unwrap_or_else(|| {
        let dir = DefaultDataset::default_data_dir();
        let filename = DefaultDataset::default_dataset_filename();
        dir.join(filename).to_string_lossy().to_string()
    });
    let mut catalog = Catalog::new(|| DefaultDataset::load_from_path(&input_path));

    match args.command {
        Commands::Stats => {
            let stats = catalog.ensure_loaded()?.stats();
            println!("Dataset statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Cities: {}", stats.cities);
            println!("  Temples: {}", stats.temples);
            println!("  Beaches: {}", stats.beaches);
        }

        Commands::Countries => {
            let db = catalog.ensure_loaded()?;
            for c in db.countries() {
                println!("{}", c.name());
                for city in c.cities() {
                    println!("  - {}", city.name());
                }
            }
        }

        Commands::Search {
            query,
            explain,
            json,
        } => {
            if query.trim().is_empty() {
                bail!("Please enter a search term");
            }
            if explain {
                let profile = QueryProfile::analyze(&query);
                println!("Query: {:?}", profile.query);
                println!("Categories: {:?}", profile.categories);
                println!("Exact category: {}", profile.exact_category);
                println!();
            }

            let results = match catalog.search(&query) {
                Ok(results) => results,
                Err(e) => {
                    eprintln!("{}", e.user_message());
                    return Err(e.into());
                }
            };
            let cards = build_cards(results, &ZoneTable::default(), Utc::now());

            if json {
                println!("{}", serde_json::to_string_pretty(&cards)?);
            } else if cards.is_empty() {
                let none = NoResults::for_term(query.trim());
                println!("{}", none.title);
                println!("{}", none.message);
                println!("Try searching for:");
                for (label, examples) in &none.suggestions {
                    println!("  • {label}: {examples}");
                }
            } else {
                println!("{}", results_heading(cards.len()));
                for card in &cards {
                    println!();
                    println!("[{}] {}", card.result.kind, card.result.name);
                    println!("  {}", card.result.description);
                    if let Some(country) = &card.result.country {
                        println!("  📍 {country}");
                    }
                    println!("  {}", card.time_display);
                    println!("  {}", card.display_image_url);
                }
            }
        }

        Commands::Time { name, country } => {
            let info = wayfarer_core::resolve_time(&(name.as_str(), country.as_deref()));
            println!("{info}");
            println!("  Time zone: {}", info.time_zone);
        }

        Commands::Contact {
            name,
            email,
            message,
        } => match ContactForm::new(name, email, message).submit() {
            Ok(receipt) => println!("{}", receipt.confirmation),
            Err(errors) => {
                for e in &errors.errors {
                    eprintln!("{:?}: {}", e.field, e.message);
                }
                bail!("contact form has {} invalid field(s)", errors.errors.len());
            }
        },
    }

    Ok(())
}
