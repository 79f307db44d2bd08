//! wayfarer-wasm: WebAssembly bindings for wayfarer-core
//!
//! This crate is the browser side of the travel site. The page fetches the
//! dataset JSON itself and hands the text to [`TravelSite::from_json`]; from
//! then on every query and clock lookup runs in Rust and comes back as plain
//! JS objects ready to be turned into cards.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { TravelSite } from 'wayfarer-wasm';
//!
//! async function main() {
//!   await init();
//!   const text = await (await fetch('travel_recommendation_api.json')).text();
//!   const site = TravelSite.from_json(text);
//!
//!   const view = site.search('beach');
//!   // view.heading, view.cards (beaches, temples, cities) or view.noResults
//!   console.log(view);
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - A failed fetch or parse leaves no `TravelSite`; create one again on the
//!   next search attempt.
//! - Card timestamps are computed on every call; nothing is cached.

use std::sync::Arc;
use wasm_bindgen::prelude::*;

use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use serde_wasm_bindgen::Serializer;
use wayfarer_core::contact::{ContactForm, FieldError};
use wayfarer_core::present::{self, NoResults, ResultCard};
use wayfarer_core::{search, DefaultDataset, SearchResult, ZoneTable};

/// Plain JS objects rather than `Map`s, so flattened cards read naturally.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(JsValue::from)
}

fn console_log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log("Initializing wayfarer WASM module...");
}

/// Everything a results panel needs for one query.
#[derive(Debug, Serialize)]
pub struct SearchView {
    pub term: String,
    pub heading: Option<String>,
    pub cards: Vec<ResultCard>,
    #[serde(rename = "noResults")]
    pub no_results: Option<NoResults>,
}

/// Outcome of validating the contact form.
#[derive(Debug, Serialize)]
pub struct ContactView {
    pub ok: bool,
    pub errors: Vec<FieldError>,
    pub confirmation: Option<String>,
}

/// A loaded dataset plus the zone table used to stamp cards.
#[wasm_bindgen]
pub struct TravelSite {
    dataset: Arc<DefaultDataset>,
    zones: ZoneTable,
}

impl TravelSite {
    pub fn from_dataset(dataset: DefaultDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            zones: ZoneTable::default(),
        }
    }

    /// Parse the dataset text; the error carries the visitor-facing message.
    pub fn parse(json: &str) -> Result<Self, String> {
        match DefaultDataset::from_json_str(json) {
            Ok(db) => {
                let stats = db.stats();
                console_log(&format!(
                    "✓ Travel data loaded: {} countries, {} temples, {} beaches",
                    stats.countries, stats.temples, stats.beaches
                ));
                Ok(Self::from_dataset(db))
            }
            Err(e) => {
                console_log(&format!("Error fetching travel data: {e}"));
                Err(e.user_message().to_string())
            }
        }
    }

    pub fn dataset(&self) -> &DefaultDataset {
        &self.dataset
    }

    /// Run a query and shape the answer for display.
    pub fn search_view(&self, query: &str) -> Result<SearchView, String> {
        let term = query.trim();
        if term.is_empty() {
            return Err("Please enter a search term".to_string());
        }

        let results: Vec<SearchResult> = search(&*self.dataset, term)
            .iter()
            .map(|hit| hit.to_result())
            .collect();
        console_log(&format!("Searching for: {term} ({} found)", results.len()));

        let cards = present::build_cards(results, &self.zones, Utc::now());
        let view = if cards.is_empty() {
            SearchView {
                term: term.to_string(),
                heading: None,
                cards,
                no_results: Some(NoResults::for_term(term)),
            }
        } else {
            SearchView {
                term: term.to_string(),
                heading: Some(present::results_heading(cards.len())),
                cards,
                no_results: None,
            }
        };
        Ok(view)
    }
}

#[wasm_bindgen]
impl TravelSite {
    #[wasm_bindgen(js_name = from_json)]
    pub fn from_json(json: &str) -> Result<TravelSite, JsValue> {
        Self::parse(json).map_err(|msg| JsValue::from_str(&msg))
    }

    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        let view = self.search_view(query).map_err(|msg| JsValue::from_str(&msg))?;
        to_js(&view)
    }

    /// Cards only, as a JS array in display order.
    pub fn search_cards(&self, query: &str) -> Result<js_sys::Array, JsValue> {
        let view = self.search_view(query).map_err(|msg| JsValue::from_str(&msg))?;
        let array = js_sys::Array::new();
        for card in &view.cards {
            array.push(&to_js(card)?);
        }
        Ok(array)
    }

    pub fn stats(&self) -> Result<JsValue, JsValue> {
        let stats = self.dataset.stats();
        let stats = json!({
            "countries": stats.countries,
            "cities": stats.cities,
            "temples": stats.temples,
            "beaches": stats.beaches
        });
        to_js(&stats)
    }

    pub fn local_time(&self, name: &str, country: Option<String>) -> Result<JsValue, JsValue> {
        let info = self.zones.resolve(&(name, country.as_deref()));
        to_js(&info)
    }
}

/* --------------------------------------------------------------------------
   Stateless helpers
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn validate_contact(name: &str, email: &str, message: &str) -> Result<JsValue, JsValue> {
    to_js(&contact_view(name, email, message))
}

pub fn contact_view(name: &str, email: &str, message: &str) -> ContactView {
    match ContactForm::new(name, email, message).submit() {
        Ok(receipt) => ContactView {
            ok: true,
            errors: Vec::new(),
            confirmation: Some(receipt.confirmation),
        },
        Err(errors) => ContactView {
            ok: false,
            errors: errors.errors,
            confirmation: None,
        },
    }
}

#[wasm_bindgen]
pub fn results_heading(count: usize) -> String {
    present::results_heading(count)
}

/// The empty-results panel for `term`.
#[wasm_bindgen]
pub fn no_results(term: &str) -> Result<JsValue, JsValue> {
    to_js(&NoResults::for_term(term.trim()))
}

#[wasm_bindgen]
pub fn booking_message(name: &str) -> String {
    present::booking_message(name)
}

#[wasm_bindgen]
pub fn display_image_url(url: &str) -> String {
    present::resolve_image_url(url).to_string()
}

#[wasm_bindgen]
pub fn fallback_image_url() -> String {
    present::FALLBACK_IMAGE_URL.to_string()
}
