// crates/wayfarer-core/src/present.rs

//! Display helpers shared by the CLI and the WASM front-end.
//!
//! None of this touches a UI; it turns search output into plain values a
//! renderer can show as-is.

use crate::model::DestinationKind;
use crate::search::SearchResult;
use crate::time::{TimeInfo, ZoneTable};
use crate::traits::Destination;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Image references containing this marker are unfilled placeholders.
pub const PLACEHOLDER_IMAGE_MARKER: &str = "enter_your_image";

pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&w=500&q=80";

/// Display order of result groups.
pub const DISPLAY_ORDER: [DestinationKind; 3] = [
    DestinationKind::Beach,
    DestinationKind::Temple,
    DestinationKind::City,
];

/// Example queries offered when a search finds nothing.
pub const SEARCH_SUGGESTIONS: [(&str, &str); 4] = [
    ("Countries", "Australia, Japan, Brazil"),
    ("Cities", "Sydney, Tokyo, Rio"),
    ("Temples", "temple, Angkor Wat, Taj Mahal"),
    ("Beaches", "beach, Bora Bora, Copacabana"),
];

/// Replace placeholder or empty image references with the fallback image.
///
/// Renderers should also swap in [`FALLBACK_IMAGE_URL`] when an image fails
/// to load.
pub fn resolve_image_url(url: &str) -> &str {
    if url.trim().is_empty() || url.contains(PLACEHOLDER_IMAGE_MARKER) {
        FALLBACK_IMAGE_URL
    } else {
        url
    }
}

/// Stable regroup of results into beaches, temples, then cities.
pub fn group_for_display<T, F>(items: Vec<T>, kind_of: F) -> Vec<T>
where
    F: Fn(&T) -> DestinationKind,
{
    let mut out = Vec::with_capacity(items.len());
    let mut rest = items;
    for kind in DISPLAY_ORDER {
        let (group, others): (Vec<T>, Vec<T>) = rest.into_iter().partition(|t| kind_of(t) == kind);
        out.extend(group);
        rest = others;
    }
    out
}

/// `Found 1 recommendation` / `Found 3 recommendations`.
pub fn results_heading(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Found {count} recommendation{plural}")
}

pub fn booking_message(name: &str) -> String {
    format!("Booking your trip to {name}! This feature will be available soon.")
}

/// What to show when a search comes back empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoResults {
    pub term: String,
    pub title: String,
    pub message: String,
    pub suggestions: Vec<(String, String)>,
}

impl NoResults {
    /// `term` is echoed literally.
    pub fn for_term(term: &str) -> Self {
        Self {
            term: term.to_string(),
            title: "No Results Found".to_string(),
            message: format!(
                "Sorry, we couldn't find any recommendations for \"{term}\". \
                 Try searching with different keywords or variations."
            ),
            suggestions: SEARCH_SUGGESTIONS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// One rendered result: the search result, the image to show and the
/// current local time line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCard {
    #[serde(flatten)]
    pub result: SearchResult,
    #[serde(rename = "displayImageUrl")]
    pub display_image_url: String,
    #[serde(rename = "timeInfo")]
    pub time_info: TimeInfo,
    /// `🕐 Local time in ...: ...`
    #[serde(rename = "timeDisplay")]
    pub time_display: String,
}

impl ResultCard {
    pub fn build(result: SearchResult, zones: &ZoneTable, now: DateTime<Utc>) -> Self {
        let time_info = zones.resolve_at(&result, now);
        Self {
            display_image_url: resolve_image_url(&result.image_url).to_string(),
            time_display: time_info.to_string(),
            time_info,
            result,
        }
    }

    pub fn kind(&self) -> DestinationKind {
        self.result.kind
    }
}

impl Destination for ResultCard {
    fn name(&self) -> &str {
        &self.result.name
    }

    fn country(&self) -> Option<&str> {
        self.result.country.as_deref()
    }
}

/// Build display-ordered cards for a result set, all stamped with `now`.
pub fn build_cards(results: Vec<SearchResult>, zones: &ZoneTable, now: DateTime<Utc>) -> Vec<ResultCard> {
    let cards = results
        .into_iter()
        .map(|r| ResultCard::build(r, zones, now))
        .collect();
    group_for_display(cards, ResultCard::kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_images_fall_back() {
        assert_eq!(
            resolve_image_url("enter_your_image_for_sydney.jpg"),
            FALLBACK_IMAGE_URL
        );
        assert_eq!(resolve_image_url(""), FALLBACK_IMAGE_URL);
        assert_eq!(
            resolve_image_url("https://example.org/tokyo.jpg"),
            "https://example.org/tokyo.jpg"
        );
    }

    #[test]
    fn grouping_is_stable() {
        use DestinationKind::*;
        let items = vec![(City, 1), (Beach, 2), (Temple, 3), (City, 4), (Beach, 5)];
        let grouped = group_for_display(items, |(k, _)| *k);
        let order: Vec<i32> = grouped.iter().map(|(_, n)| *n).collect();
        assert_eq!(order, vec![2, 5, 3, 1, 4]);
    }

    #[test]
    fn heading_pluralizes() {
        assert_eq!(results_heading(1), "Found 1 recommendation");
        assert_eq!(results_heading(0), "Found 0 recommendations");
        assert_eq!(results_heading(4), "Found 4 recommendations");
    }

    #[test]
    fn no_results_echoes_term() {
        let n = NoResults::for_term("xyzzynotreal");
        assert!(n.message.contains("\"xyzzynotreal\""));
        assert_eq!(n.suggestions.len(), 4);
    }
}
