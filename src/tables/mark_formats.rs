//! Maps the type-of-mark-to-protect choice to the mark format id.

use super::LookupTable;

/// Mark-format discriminator phrasings to target format ids.
pub static MARK_FORMATS: LookupTable = LookupTable::new(&[
    ("typed (standard characters)", "standard_character"),
    (
        "design (special form - stylized and/or design)",
        "design_mark",
    ),
]);
