// crates/wayfarer-core/src/model.rs
use crate::traits::{NameMatch, TravelBackend};
use serde::{Deserialize, Serialize};
use std::fmt;

// -----------------------------------------------------------------------------
// RAW INPUT (mirrors travel_recommendation_api.json)
// -----------------------------------------------------------------------------

/// Raw place structure as it comes from JSON.
/// Used for cities, temples and beaches alike.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceRaw {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
}

/// Raw country structure from JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRaw {
    pub name: String,
    #[serde(default)]
    pub cities: Vec<PlaceRaw>,
}

/// Root document. Any missing top-level key is treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetRaw {
    #[serde(default)]
    pub countries: Vec<CountryRaw>,
    #[serde(default)]
    pub temples: Vec<PlaceRaw>,
    #[serde(default)]
    pub beaches: Vec<PlaceRaw>,
}

// -----------------------------------------------------------------------------
// DOMAIN MODEL
// -----------------------------------------------------------------------------

/// Default backend: plain `String`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultBackend;

impl TravelBackend for DefaultBackend {
    type Str = String;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }
}

/// A temple, a beach, or (inside a [`Country`]) a city.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Place<B: TravelBackend> {
    pub name: B::Str,
    pub description: B::Str,
    pub image_url: B::Str,
}

/// A city is a place owned by a country; it is never stored on its own.
pub type City<B> = Place<B>;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Country<B: TravelBackend> {
    pub name: B::Str,
    pub cities: Vec<City<B>>,
}

/// The whole destination catalogue.
///
/// Loaded once and never mutated; a reload replaces the value wholesale.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Dataset<B: TravelBackend> {
    pub countries: Vec<Country<B>>,
    pub temples: Vec<Place<B>>,
    pub beaches: Vec<Place<B>>,
}

/// Convenient alias for the default backend.
pub type DefaultDataset = Dataset<DefaultBackend>;

/// What kind of destination a search hit is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationKind {
    City,
    Temple,
    Beach,
}

impl DestinationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DestinationKind::City => "city",
            DestinationKind::Temple => "temple",
            DestinationKind::Beach => "beach",
        }
    }
}

impl fmt::Display for DestinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Simple aggregate counts for a loaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub countries: usize,
    pub cities: usize,
    pub temples: usize,
    pub beaches: usize,
}

fn build_place<B: TravelBackend>(raw: PlaceRaw) -> Place<B> {
    Place {
        name: B::str_from(&raw.name),
        description: B::str_from(&raw.description),
        image_url: B::str_from(&raw.image_url),
    }
}

/// Convert raw JSON data into a `Dataset` using the given backend.
pub fn build_dataset<B: TravelBackend>(raw: DatasetRaw) -> Dataset<B> {
    let countries = raw
        .countries
        .into_iter()
        .map(|c| Country {
            name: B::str_from(&c.name),
            cities: c.cities.into_iter().map(build_place).collect(),
        })
        .collect();

    Dataset {
        countries,
        temples: raw.temples.into_iter().map(build_place).collect(),
        beaches: raw.beaches.into_iter().map(build_place).collect(),
    }
}

impl<B: TravelBackend> Default for Dataset<B> {
    fn default() -> Self {
        Dataset {
            countries: Vec::new(),
            temples: Vec::new(),
            beaches: Vec::new(),
        }
    }
}

impl<B: TravelBackend> Dataset<B> {
    pub fn countries(&self) -> &[Country<B>] {
        &self.countries
    }

    pub fn temples(&self) -> &[Place<B>] {
        &self.temples
    }

    pub fn beaches(&self) -> &[Place<B>] {
        &self.beaches
    }

    /// Every city together with its owning country, in dataset order.
    pub fn cities(&self) -> impl Iterator<Item = (&City<B>, &Country<B>)> + '_ {
        self.countries
            .iter()
            .flat_map(|c| c.cities.iter().map(move |city| (city, c)))
    }

    /// Find a country by name, case- and accent-insensitive.
    pub fn find_country(&self, name: &str) -> Option<&Country<B>> {
        self.countries.iter().find(|c| c.is_named(name.trim()))
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            countries: self.countries.len(),
            cities: self.countries.iter().map(|c| c.cities.len()).sum(),
            temples: self.temples.len(),
            beaches: self.beaches.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty() && self.temples.is_empty() && self.beaches.is_empty()
    }
}

impl<B: TravelBackend> Country<B> {
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn cities(&self) -> &[City<B>] {
        &self.cities
    }
}

impl<B: TravelBackend> Place<B> {
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn description(&self) -> &str {
        self.description.as_ref()
    }

    pub fn image_url(&self) -> &str {
        self.image_url.as_ref()
    }
}

impl<B: TravelBackend> NameMatch for Country<B> {
    fn name_str(&self) -> &str {
        self.name()
    }
}

impl<B: TravelBackend> NameMatch for Place<B> {
    fn name_str(&self) -> &str {
        self.name()
    }
}
