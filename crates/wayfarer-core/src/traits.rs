// crates/wayfarer-core/src/traits.rs
use crate::text::fold_key;
use serde::{Deserialize, Serialize};

/// Storage backend for the strings held by the dataset.
///
/// This abstraction allows the crate to swap how textual data is stored
/// internally (for example interned or small-string types) without changing
/// the public API of accessors that return `&str` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` and the associated
/// type must be serializable so a loaded dataset can be handed across the
/// WASM boundary as-is.
pub trait TravelBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;

    fn str_from(s: &str) -> Self::Str;
}

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Comparisons are accent-insensitive and case-insensitive via [`fold_key`].
///
/// # Examples
/// ```rust
/// use wayfarer_core::traits::NameMatch;
///
/// struct Spot(&'static str);
/// impl NameMatch for Spot {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Spot("São Paulo, Brazil").name_contains("sao paulo"));
/// assert!(Spot("Japan").is_named("JAPAN"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

/// Anything the time resolver can place on a clock: a display name and,
/// for cities, the owning country.
pub trait Destination {
    fn name(&self) -> &str;

    /// Owning country, present only for cities.
    fn country(&self) -> Option<&str>;
}

impl<T: Destination + ?Sized> Destination for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn country(&self) -> Option<&str> {
        (**self).country()
    }
}

/// Ad-hoc destination, e.g. built from CLI arguments.
impl Destination for (&str, Option<&str>) {
    fn name(&self) -> &str {
        self.0
    }

    fn country(&self) -> Option<&str> {
        self.1
    }
}
