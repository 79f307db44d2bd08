// crates/wayfarer-core/src/prelude.rs
pub use crate::contact::{ContactField, ContactForm, ValidationErrors};
pub use crate::error::{Result, TravelError};
pub use crate::loader::Catalog;
pub use crate::model::{
    City, Country, Dataset, DatasetStats, DefaultBackend, DefaultDataset, DestinationKind, Place,
};
pub use crate::present::{build_cards, resolve_image_url, results_heading, NoResults, ResultCard};
pub use crate::search::{search, SearchHit, SearchResult};
pub use crate::time::{resolve_time, TimeInfo, ZoneTable};
pub use crate::traits::{Destination, NameMatch, TravelBackend};
