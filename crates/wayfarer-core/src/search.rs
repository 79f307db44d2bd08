// crates/wayfarer-core/src/search.rs

//! Keyword search over a [`Dataset`].
//!
//! A query is first classified against four keyword categories. Category
//! words ("beach", "temples", ...) select whole collections; anything else
//! is matched as free text against names and descriptions. Country names
//! select every city of that country.

use crate::model::{Country, Dataset, DestinationKind, Place};
use crate::text::{contains_either, matches_text, normalize_query};
use crate::traits::{Destination, TravelBackend};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Countries,
    Cities,
    Temples,
    Beaches,
}

impl KeywordCategory {
    pub const ALL: [KeywordCategory; 4] = [
        KeywordCategory::Countries,
        KeywordCategory::Cities,
        KeywordCategory::Temples,
        KeywordCategory::Beaches,
    ];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            KeywordCategory::Countries => &["country", "countries", "nation", "nations"],
            KeywordCategory::Cities => &[
                "city",
                "cities",
                "town",
                "towns",
                "destination",
                "destinations",
            ],
            KeywordCategory::Temples => &[
                "temple",
                "temples",
                "shrine",
                "shrines",
                "monument",
                "monuments",
                "heritage",
            ],
            KeywordCategory::Beaches => &[
                "beach",
                "beaches",
                "coast",
                "coastal",
                "shore",
                "shores",
                "seaside",
                "waterfront",
            ],
        }
    }

    /// Bidirectional substring test against every keyword of the category.
    pub fn matches(self, query: &str) -> bool {
        self.keywords().iter().any(|k| contains_either(query, k))
    }
}

/// Queries equal to one of these only scan the matching category.
pub const EXACT_CATEGORY_KEYWORDS: [&str; 8] = [
    "temple",
    "temples",
    "beach",
    "beaches",
    "country",
    "countries",
    "city",
    "cities",
];

pub fn is_exact_category_search(normalized_query: &str) -> bool {
    EXACT_CATEGORY_KEYWORDS.contains(&normalized_query)
}

/// How a query was understood; computed once per search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryProfile {
    /// Trimmed, folded query.
    pub query: String,
    /// Categories whose keywords overlap the query.
    pub categories: Vec<KeywordCategory>,
    /// The query is exactly one of [`EXACT_CATEGORY_KEYWORDS`].
    pub exact_category: bool,
}

impl QueryProfile {
    pub fn analyze(query: &str) -> Self {
        let query = normalize_query(query);
        let categories = KeywordCategory::ALL
            .into_iter()
            .filter(|c| c.matches(&query))
            .collect();
        let exact_category = is_exact_category_search(&query);
        Self {
            query,
            categories,
            exact_category,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.query.is_empty()
    }

    pub fn matches(&self, category: KeywordCategory) -> bool {
        self.categories.contains(&category)
    }

    /// Whether a category's collection is scanned at all.
    fn scans(&self, category: KeywordCategory) -> bool {
        self.matches(category) || !self.exact_category
    }
}

/// A single match, borrowing from the dataset.
#[derive(Debug)]
pub struct SearchHit<'a, B: TravelBackend> {
    pub kind: DestinationKind,
    pub place: &'a Place<B>,
    /// Owning country; set for cities only.
    pub country: Option<&'a Country<B>>,
}

impl<B: TravelBackend> Clone for SearchHit<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: TravelBackend> Copy for SearchHit<'_, B> {}

impl<'a, B: TravelBackend> SearchHit<'a, B> {
    pub fn city(country: &'a Country<B>, city: &'a Place<B>) -> Self {
        Self {
            kind: DestinationKind::City,
            place: city,
            country: Some(country),
        }
    }

    pub fn place(kind: DestinationKind, place: &'a Place<B>) -> Self {
        Self {
            kind,
            place,
            country: None,
        }
    }

    pub fn name(&self) -> &'a str {
        self.place.name()
    }

    pub fn country_name(&self) -> Option<&'a str> {
        self.country.map(|c| c.name())
    }

    /// Owned copy, detached from the dataset.
    pub fn to_result(&self) -> SearchResult {
        SearchResult {
            kind: self.kind,
            name: self.place.name().to_string(),
            description: self.place.description().to_string(),
            image_url: self.place.image_url().to_string(),
            country: self.country_name().map(str::to_string),
        }
    }
}

impl<B: TravelBackend> Destination for SearchHit<'_, B> {
    fn name(&self) -> &str {
        self.place.name()
    }

    fn country(&self) -> Option<&str> {
        self.country_name()
    }
}

/// Owned search result, as handed to front-ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: DestinationKind,
    pub name: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Destination for SearchResult {
    fn name(&self) -> &str {
        &self.name
    }

    fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

/// Search the dataset for `query`.
///
/// Results come in encounter order (cities, then temples, then beaches) and
/// are de-duplicated by display name, first occurrence wins. A blank query
/// yields nothing; front-ends should reject it before calling.
pub fn search<'a, B: TravelBackend>(db: &'a Dataset<B>, query: &str) -> Vec<SearchHit<'a, B>> {
    let profile = QueryProfile::analyze(query);
    if profile.is_blank() {
        return Vec::new();
    }
    let q = profile.query.as_str();
    let mut out: Vec<SearchHit<'a, B>> = Vec::new();

    // 1. Countries and their cities
    let whole_country = profile.matches(KeywordCategory::Countries)
        || profile.matches(KeywordCategory::Cities);
    if profile.scans(KeywordCategory::Countries) || profile.scans(KeywordCategory::Cities) {
        for country in &db.countries {
            let every_city = whole_country || matches_text(q, country.name());
            for city in &country.cities {
                if every_city || matches_text(q, city.name()) || matches_text(q, city.description())
                {
                    out.push(SearchHit::city(country, city));
                }
            }
        }
    }

    // 2. Temples, 3. Beaches
    for (category, kind, places) in [
        (KeywordCategory::Temples, DestinationKind::Temple, &db.temples),
        (KeywordCategory::Beaches, DestinationKind::Beach, &db.beaches),
    ] {
        if !profile.scans(category) {
            continue;
        }
        let all = profile.matches(category);
        for place in places {
            if all || matches_text(q, place.name()) || matches_text(q, place.description()) {
                out.push(SearchHit::place(kind, place));
            }
        }
    }

    let found = out.len();
    let mut seen = HashSet::new();
    out.retain(|hit| seen.insert(hit.name()));

    debug!(
        query = q,
        categories = ?profile.categories,
        exact = profile.exact_category,
        found,
        unique = out.len(),
        "search finished"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_keywords_match_both_directions() {
        assert!(KeywordCategory::Beaches.matches("beach"));
        assert!(KeywordCategory::Beaches.matches("sunny beaches please"));
        assert!(KeywordCategory::Temples.matches("shrin"));
        assert!(!KeywordCategory::Temples.matches("tokyo"));
    }

    #[test]
    fn exact_category_flag() {
        assert!(QueryProfile::analyze(" Beaches ").exact_category);
        assert!(!QueryProfile::analyze("beach town").exact_category);
        assert!(!QueryProfile::analyze("shrine").exact_category);
    }

    #[test]
    fn profile_lists_matched_categories_in_order() {
        let p = QueryProfile::analyze("coastal towns");
        assert_eq!(
            p.categories,
            vec![KeywordCategory::Cities, KeywordCategory::Beaches]
        );
    }
}
