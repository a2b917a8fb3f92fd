//! Signatory section builder.
//!
//! Signature answers live in the `signatory_info_GRP` group when the intake
//! used the grouped form, and in flat fields otherwise. The group wins.

use crate::answers::{FieldLookup, GroupLookup};
use crate::record::Signatory;
use crate::tables::SIGNATORY_TITLES;

const SIGNATORY_GROUP: &str = "signatory_info_GRP";

/// Builds the signatory section, or `None` when nothing was signed.
#[must_use]
pub fn build_signatory(fields: &FieldLookup, groups: &GroupLookup) -> Option<Signatory> {
    let name = groups
        .find(SIGNATORY_GROUP, "signature_ST")
        .or_else(|| fields.non_empty("signatory_name"));

    let title = groups
        .find(SIGNATORY_GROUP, "title_MC")
        .or_else(|| fields.non_empty("signatory_title"));
    let position = SIGNATORY_TITLES.get_opt(title);

    let other_position = groups
        .find(SIGNATORY_GROUP, "other_title_ST")
        .or_else(|| fields.non_empty("signatory_title_other"));

    if name.is_none() && position.is_none() && other_position.is_none() {
        return None;
    }

    Some(Signatory {
        signatory_name: name.map(str::to_string),
        signatory_position: position.map(str::to_string),
        other_signatory_position: other_position.map(str::to_string),
    })
}
