// crates/wayfarer-core/src/loader/catalog.rs
use crate::error::{Result, TravelError};
use crate::model::{Dataset, DefaultBackend};
use crate::search::{search, SearchResult};
use crate::traits::TravelBackend;
use std::sync::Arc;
use tracing::{debug, warn};

/// Lazily loaded, immutable dataset plus the means to (re)load it.
///
/// The first successful load is kept until [`Catalog::reload`] replaces it.
/// A failed load leaves the catalog empty, so the next call tries again;
/// there is no background or automatic retry.
pub struct Catalog<F, B: TravelBackend = DefaultBackend>
where
    F: FnMut() -> Result<Dataset<B>>,
{
    loader: F,
    dataset: Option<Arc<Dataset<B>>>,
}

impl<F, B> Catalog<F, B>
where
    B: TravelBackend,
    F: FnMut() -> Result<Dataset<B>>,
{
    pub fn new(loader: F) -> Self {
        Self {
            loader,
            dataset: None,
        }
    }

    /// Wrap an already loaded dataset; `loader` is only used by `reload`.
    pub fn with_dataset(dataset: Dataset<B>, loader: F) -> Self {
        Self {
            loader,
            dataset: Some(Arc::new(dataset)),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    /// The current dataset, if one has been loaded.
    pub fn get(&self) -> Option<Arc<Dataset<B>>> {
        self.dataset.clone()
    }

    /// Return the loaded dataset, loading it first if needed.
    pub fn ensure_loaded(&mut self) -> Result<Arc<Dataset<B>>> {
        if let Some(db) = &self.dataset {
            return Ok(Arc::clone(db));
        }
        self.reload()
    }

    /// Load a fresh dataset and replace the current one.
    ///
    /// On failure the previous dataset is dropped as well, so search stays
    /// blocked until a later load succeeds.
    pub fn reload(&mut self) -> Result<Arc<Dataset<B>>> {
        match (self.loader)() {
            Ok(db) => {
                debug!(stats = ?db.stats(), "catalog loaded");
                let db = Arc::new(db);
                self.dataset = Some(Arc::clone(&db));
                Ok(db)
            }
            Err(e) => {
                warn!(error = %e, "error fetching travel data");
                self.dataset = None;
                Err(TravelError::DataUnavailable(e.to_string()))
            }
        }
    }

    /// Search the catalog, loading the dataset on demand.
    pub fn search(&mut self, query: &str) -> Result<Vec<SearchResult>> {
        let db = self.ensure_loaded()?;
        Ok(search(&*db, query)
            .into_iter()
            .map(|hit| hit.to_result())
            .collect())
    }
}
