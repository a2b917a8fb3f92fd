//! Static normalization tables for enum-coded questionnaire answers.
//!
//! Tables are data, not logic: each one is a closed enumeration from a
//! lowercased source phrase or code to the normalized target value. Adding a
//! newly recognized source phrase is a data change in the matching table
//! module, never a code change in the builders.

mod common;
mod countries;
mod entity_types;
mod mark_formats;
mod signatory_titles;
mod states;

pub use common::{IN_USE_PHRASE, INTENT_TO_USE_PHRASE, USAGE_INTENT, YES_NO};
pub use countries::COUNTRIES;
pub use entity_types::ENTITY_TYPES;
pub use mark_formats::MARK_FORMATS;
pub use signatory_titles::SIGNATORY_TITLES;
pub use states::US_STATES;

/// A static, case-insensitive enumeration-normalization map.
///
/// Keys are stored pre-lowercased; lookup lowercases the query and matches
/// exactly. A miss is `None`, never an error.
pub struct LookupTable {
    entries: &'static [(&'static str, &'static str)],
}

impl LookupTable {
    /// Wraps a static table of `(lowercased key, value)` pairs.
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Normalized value for `key`, or `None` when the key is blank or
    /// unrecognized. No partial or fuzzy matching.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'static str> {
        let key = key.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(source, _)| *source == key)
            .map(|(_, target)| *target)
    }

    /// Normalized value for an optional key.
    #[must_use]
    pub fn get_opt(&self, key: Option<&str>) -> Option<&'static str> {
        key.and_then(|key| self.get(key))
    }

    /// The normalized values held by the table.
    pub fn values(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(_, target)| *target)
    }
}
