// crates/wayfarer-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! the JSON parser. The [`Catalog`] adds lazy, retrying access on top.

mod catalog;
mod common_io;

pub use catalog::Catalog;

use crate::model::{DefaultBackend, Dataset};
use std::path::PathBuf;

#[cfg(feature = "json")]
use crate::error::Result;
#[cfg(feature = "json")]
use crate::model::{build_dataset, DatasetRaw};
#[cfg(feature = "json")]
use crate::traits::TravelBackend;
#[cfg(feature = "json")]
use std::io::Read;
#[cfg(feature = "json")]
use std::path::Path;
#[cfg(feature = "json")]
use tracing::debug;

pub const DATASET_FILENAME: &str = "travel_recommendation_api.json";

impl Dataset<DefaultBackend> {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        DATASET_FILENAME
    }

    /// Load the dataset bundled with this crate (`data/travel_recommendation_api.json`).
    #[cfg(feature = "json")]
    pub fn load() -> Result<Self> {
        Self::load_from_path(Self::default_data_dir().join(Self::default_dataset_filename()))
    }
}

#[cfg(feature = "json")]
impl<B: TravelBackend> Dataset<B> {
    /// Parse a dataset from a JSON document held in memory.
    ///
    /// Missing top-level keys are tolerated and read as empty collections;
    /// malformed JSON is an error.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: DatasetRaw = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let raw: DatasetRaw = serde_json::from_reader(reader)?;
        Ok(Self::from_raw(raw))
    }

    /// **Standard Loader:** reads a `.json` (or, with `compact`, `.json.gz`) file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let db = Self::from_reader(reader)?;
        debug!(path = %path.display(), stats = ?db.stats(), "travel data loaded");
        Ok(db)
    }

    fn from_raw(raw: DatasetRaw) -> Self {
        build_dataset::<B>(raw)
    }
}
