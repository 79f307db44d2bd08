#![allow(dead_code)]

use wayfarer_core::DefaultDataset;

pub const BUNDLED: &str = include_str!("../../data/travel_recommendation_api.json");

pub fn bundled() -> DefaultDataset {
    DefaultDataset::from_json_str(BUNDLED).expect("bundled dataset parses")
}

pub fn names<'a>(hits: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    hits.into_iter().collect()
}
