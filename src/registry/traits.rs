//! Common trait for the constant key-to-Markdown catalogs.

/// A fixed, ordered set of Markdown documents addressed by string key.
///
/// Implementors are fieldless enums whose variants are the documents. `ALL`
/// fixes the listing order, which is also the order used in "not found"
/// messages.
///
/// # Example
///
/// ```
/// use memory_bank::registry::{Catalog, GuideSection};
///
/// assert_eq!(GuideSection::from_key("setup"), Some(GuideSection::Setup));
/// assert_eq!(GuideSection::from_key("Setup"), None);
/// assert!(GuideSection::available().starts_with("setup, usage"));
/// ```
pub trait Catalog: Copy + Sized + 'static {
    /// Every entry, in listing order.
    const ALL: &'static [Self];

    /// The lookup key for this entry.
    fn key(self) -> &'static str;

    /// The Markdown body for this entry.
    fn body(self) -> &'static str;

    /// Exact, case-sensitive lookup by key.
    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|entry| entry.key() == key)
    }

    /// All keys in listing order.
    fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|entry| entry.key()).collect()
    }

    /// All keys joined with `", "`.
    fn available() -> String {
        Self::keys().join(", ")
    }
}
