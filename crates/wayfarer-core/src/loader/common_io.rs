// crates/wayfarer-core/src/loader/common_io.rs
#![cfg_attr(not(feature = "json"), allow(dead_code))]

use crate::error::{Result, TravelError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the
/// file name ends in `.gz`. Returns a generic reader so the caller doesn't
/// care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        TravelError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(TravelError::InvalidData(format!(
                "{} is gzip-compressed but the 'compact' feature is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
