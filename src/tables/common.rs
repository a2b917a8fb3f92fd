//! Yes/no normalization and trademark usage-intent phrasing.

use super::LookupTable;

/// Canonical phrase for a mark already in commercial use.
pub const IN_USE_PHRASE: &str = "Yes, I'm using this mark.";

/// Canonical phrase for a mark the applicant intends to use.
pub const INTENT_TO_USE_PHRASE: &str = "No, but I intend to use it in the future.";

/// Maps yes/no variations to standardized values.
pub static YES_NO: LookupTable = LookupTable::new(&[("yes", "yes"), ("no", "no")]);

/// Maps trademark usage intentions to the canonical intent sentences.
///
/// The long phrasings are verbatim questionnaire boilerplate produced by the
/// intake tool, typos included.
pub static USAGE_INTENT: LookupTable = LookupTable::new(&[
    (
        "customer stated that they are currently using the trademark.",
        IN_USE_PHRASE,
    ),
    (
        "customer stated that they intent to use the trademark in the future.",
        INTENT_TO_USE_PHRASE,
    ),
    ("yes", IN_USE_PHRASE),
    ("no", INTENT_TO_USE_PHRASE),
]);
