// crates/wayfarer-core/src/lib.rs

pub mod contact;
pub mod error;
pub mod loader; // The public loader
pub mod model;
pub mod present; // Card/heading helpers for front-ends
pub mod search;
pub mod text;
pub mod time;
pub mod traits;

pub mod prelude;

// Re-exports
pub use crate::error::{Result, TravelError};
pub use crate::loader::Catalog;
pub use crate::model::{
    build_dataset, City, Country, Dataset, DatasetStats, DefaultBackend, DefaultDataset,
    DestinationKind, Place,
};
pub use crate::search::{search, KeywordCategory, QueryProfile, SearchHit, SearchResult};
pub use crate::text::fold_key;
pub use crate::time::{resolve_time, resolve_time_at, TimeInfo, ZoneRule, ZoneTable};
pub use crate::traits::{Destination, NameMatch, TravelBackend};
