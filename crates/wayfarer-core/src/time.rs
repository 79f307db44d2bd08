// crates/wayfarer-core/src/time.rs

//! Local wall-clock time for a destination.
//!
//! Cities carry their country, which is looked up in a [`ZoneTable`].
//! Temples and beaches do not, so their country is guessed from the display
//! name ("Angkor Wat, Cambodia"). Nothing here is cached: every call reads
//! the clock again.

use crate::text::fold_key;
use crate::traits::Destination;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// `Mon, Oct 19, 2026, 3:04:05 PM`
pub const TIME_FORMAT: &str = "%a, %b %-d, %Y, %-I:%M:%S %p";

pub const UTC_ZONE: &str = "UTC";

static DEFAULT_ZONES: Lazy<ZoneTable> = Lazy::new(ZoneTable::default);

/// Formatted local time plus where it was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInfo {
    pub time: String,
    pub location: String,
    #[serde(rename = "timeZone")]
    pub time_zone: String,
}

impl TimeInfo {
    /// Sentinel returned when the zone cannot be resolved or formatted.
    pub fn unavailable() -> Self {
        Self {
            time: "Time unavailable".to_string(),
            location: "Unknown".to_string(),
            time_zone: UTC_ZONE.to_string(),
        }
    }

    pub fn is_available(&self) -> bool {
        *self != Self::unavailable()
    }
}

impl fmt::Display for TimeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "🕐 Local time in {}: {}", self.location, self.time)
    }
}

/// Zone assignment for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneRule {
    /// The whole country uses one zone.
    Single(String),
    /// Listed cities (by display name) get their own zone, the rest `default`.
    PerCity {
        cities: Vec<(String, String)>,
        default: String,
    },
}

impl ZoneRule {
    pub fn zone_for(&self, city: &str) -> &str {
        match self {
            ZoneRule::Single(zone) => zone,
            ZoneRule::PerCity { cities, default } => {
                let key = fold_key(city);
                cities
                    .iter()
                    .find(|(name, _)| fold_key(name) == key)
                    .map(|(_, zone)| zone.as_str())
                    .unwrap_or(default.as_str())
            }
        }
    }
}

/// Country → IANA zone table, plus the order in which country names are
/// looked for inside destination names that carry no country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneTable {
    countries: Vec<(String, ZoneRule)>,
    inference_order: Vec<String>,
}

fn per_city(cities: &[(&str, &str)], default: &str) -> ZoneRule {
    ZoneRule::PerCity {
        cities: cities
            .iter()
            .map(|(c, z)| (c.to_string(), z.to_string()))
            .collect(),
        default: default.to_string(),
    }
}

impl Default for ZoneTable {
    fn default() -> Self {
        let countries = vec![
            (
                "Australia".to_string(),
                per_city(
                    &[
                        ("Sydney, Australia", "Australia/Sydney"),
                        ("Melbourne, Australia", "Australia/Melbourne"),
                    ],
                    "Australia/Sydney",
                ),
            ),
            (
                "Japan".to_string(),
                per_city(
                    &[("Tokyo, Japan", "Asia/Tokyo"), ("Kyoto, Japan", "Asia/Tokyo")],
                    "Asia/Tokyo",
                ),
            ),
            (
                "Brazil".to_string(),
                per_city(
                    &[
                        ("Rio de Janeiro, Brazil", "America/Sao_Paulo"),
                        ("São Paulo, Brazil", "America/Sao_Paulo"),
                    ],
                    "America/Sao_Paulo",
                ),
            ),
            (
                "Cambodia".to_string(),
                ZoneRule::Single("Asia/Phnom_Penh".to_string()),
            ),
            (
                "India".to_string(),
                ZoneRule::Single("Asia/Kolkata".to_string()),
            ),
            (
                "French Polynesia".to_string(),
                ZoneRule::Single("Pacific/Tahiti".to_string()),
            ),
        ];
        let inference_order = ["Cambodia", "India", "French Polynesia", "Brazil"]
            .into_iter()
            .map(str::to_string)
            .collect();
        Self {
            countries,
            inference_order,
        }
    }
}

impl ZoneTable {
    /// A table with no entries: every destination resolves to UTC.
    pub fn empty() -> Self {
        Self {
            countries: Vec::new(),
            inference_order: Vec::new(),
        }
    }

    /// Add or replace the rule for `country`.
    pub fn with_country(mut self, country: &str, rule: ZoneRule) -> Self {
        let key = fold_key(country);
        self.countries.retain(|(name, _)| fold_key(name) != key);
        self.countries.push((country.to_string(), rule));
        self
    }

    /// Append `country` to the list of names searched for in country-less
    /// destinations. Earlier entries win.
    pub fn infer_from_name(mut self, country: &str) -> Self {
        self.inference_order.push(country.to_string());
        self
    }

    pub fn rule(&self, country: &str) -> Option<&ZoneRule> {
        let key = fold_key(country);
        self.countries
            .iter()
            .find(|(name, _)| fold_key(name) == key)
            .map(|(_, rule)| rule)
    }

    /// Zone for a city of `country`; unknown countries fall back to UTC.
    pub fn zone_for(&self, country: &str, city: &str) -> &str {
        self.rule(country)
            .map(|rule| rule.zone_for(city))
            .unwrap_or(UTC_ZONE)
    }

    /// Resolve `(zone, location label)` for a destination.
    pub fn locate(&self, dest: &impl Destination) -> (String, String) {
        if let Some(country) = dest.country() {
            return (
                self.zone_for(country, dest.name()).to_string(),
                country.to_string(),
            );
        }

        let name = fold_key(dest.name());
        self.inference_order
            .iter()
            .find(|country| name.contains(&fold_key(country)))
            .map(|country| {
                (
                    self.zone_for(country, dest.name()).to_string(),
                    country.clone(),
                )
            })
            .unwrap_or_else(|| (UTC_ZONE.to_string(), UTC_ZONE.to_string()))
    }

    pub fn resolve(&self, dest: &impl Destination) -> TimeInfo {
        self.resolve_at(dest, Utc::now())
    }

    /// Format `now` in the destination's zone. Never fails; an unknown zone
    /// yields [`TimeInfo::unavailable`].
    pub fn resolve_at(&self, dest: &impl Destination, now: DateTime<Utc>) -> TimeInfo {
        let (zone, location) = self.locate(dest);
        match zone.parse::<Tz>() {
            Ok(tz) => {
                let time = now.with_timezone(&tz).format(TIME_FORMAT).to_string();
                debug!(%location, %time, "current time resolved");
                TimeInfo {
                    time,
                    location,
                    time_zone: zone,
                }
            }
            Err(e) => {
                warn!(%zone, error = ?e, name = dest.name(), "error getting time for destination");
                TimeInfo::unavailable()
            }
        }
    }
}

/// Current local time for `dest` using the built-in [`ZoneTable`].
pub fn resolve_time(dest: &impl Destination) -> TimeInfo {
    DEFAULT_ZONES.resolve(dest)
}

/// Like [`resolve_time`] with an explicit table and clock.
pub fn resolve_time_at(table: &ZoneTable, dest: &impl Destination, now: DateTime<Utc>) -> TimeInfo {
    table.resolve_at(dest, now)
}
