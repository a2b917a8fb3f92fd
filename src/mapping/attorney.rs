//! Attorney section builder.

use crate::answers::FieldLookup;
use crate::format::split_full_name;
use crate::record::Attorney;

/// Splits the attorney's free-text full name into its parts.
/// `None` when no attorney name was answered.
#[must_use]
pub fn build_attorney(fields: &FieldLookup) -> Option<Attorney> {
    let full_name = fields.non_empty("attorney_full_name_ST")?;
    let name = split_full_name(full_name);

    Some(Attorney {
        first_name: name.first_name,
        middle_name: name.middle_name,
        last_name: name.last_name,
    })
}
