// crates/wayfarer-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading or querying the destination dataset.
///
/// Searching and time lookup never fail; only the loader and the
/// [`Catalog`](crate::loader::Catalog) surface these.
#[derive(Debug, Error)]
pub enum TravelError {
    #[error("Dataset not found: {0}")]
    NotFound(String),

    #[cfg(feature = "json")]
    #[error("Malformed dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// The dataset could not be loaded; the next request retries.
    #[error("Unable to load travel data: {0}")]
    DataUnavailable(String),
}

impl TravelError {
    /// Text shown to a visitor when this error reaches the page.
    pub fn user_message(&self) -> &'static str {
        match self {
            TravelError::NotFound(_) | TravelError::DataUnavailable(_) => {
                "Unable to load travel data. Please try again later."
            }
            #[cfg(feature = "json")]
            TravelError::Json(_) => "Unable to load travel data. Please try again later.",
            TravelError::InvalidData(_) => "The travel data is invalid.",
        }
    }
}

pub type Result<T> = std::result::Result<T, TravelError>;
