//! Goods & services section builder.

use itertools::Itertools;

use crate::answers::FieldLookup;
use crate::format::parse_used_in_commerce;
use crate::record::{AdditionalData, GoodsAndServices, TrademarkUsePlan};
use crate::tables::{IN_USE_PHRASE, INTENT_TO_USE_PHRASE, USAGE_INTENT};

/// Summary fields in their fixed output order. The order is significant for
/// downstream readability.
const SUMMARY_FIELDS: &[(&str, &str)] = &[
    ("Date of First Sale", "date_of_first_sale"),
    ("Class Number", "class_number"),
    ("List Goods or Services", "list_goods_or_services"),
    ("URL Associated with Trademark", "url_associated_with_trademark"),
];

/// Builds the goods & services section, or `None` when no usage answer exists.
#[must_use]
pub fn build_goods_and_services(fields: &FieldLookup) -> Option<GoodsAndServices> {
    // The intent-to-use note takes precedence; the in-use note is the fallback.
    let usage_note = fields
        .non_empty("gs_itu_G_S_filing_basis_internal_note_LT")
        .or_else(|| fields.non_empty("gs_uic_G_S_filing_basis_internal_note_LT"));

    let plan = usage_note.map(|note| {
        USAGE_INTENT
            .get(note)
            .map_or_else(|| note.to_string(), str::to_string)
    });

    let filing_basis = usage_note.and_then(determine_filing_basis);
    let client_trademark_use = build_usage_summary(fields);
    let competitor_example = fields.non_empty("competitor_example").map(str::to_string);

    if plan.is_none() && client_trademark_use.is_none() && competitor_example.is_none() {
        return None;
    }

    Some(GoodsAndServices {
        filing_basis,
        how_does_the_client_plan_to_use_their_trademark_section: TrademarkUsePlan {
            how_does_the_client_plan_to_use_their_trademark: plan,
        },
        additional_data_section: AdditionalData {
            client_trademark_use,
            competitor_example,
        },
    })
}

/// `"yes"` when the mark is in use, `"no"` for intent to use, `None` when the
/// note phrase matched neither canonical intent.
fn determine_filing_basis(usage_note: &str) -> Option<String> {
    match USAGE_INTENT.get(usage_note) {
        Some(phrase) if phrase == IN_USE_PHRASE => Some("yes".to_string()),
        Some(phrase) if phrase == INTENT_TO_USE_PHRASE => Some("no".to_string()),
        _ => None,
    }
}

/// Concatenates the present summary fields as `"Label: value"` lines. The
/// filing basis parsed out of the applicant internal note leads when found.
fn build_usage_summary(fields: &FieldLookup) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();

    let parsed_basis = fields
        .non_empty("applicant_information_internal_note_LT")
        .and_then(parse_used_in_commerce)
        .and_then(|token| USAGE_INTENT.get(token));
    if let Some(basis) = parsed_basis {
        parts.push(format!("Filing Basis: {basis}"));
    }

    for &(label, field) in SUMMARY_FIELDS {
        if let Some(value) = fields.non_empty(field) {
            parts.push(format!("{label}: {value}"));
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.iter().join("\n"))
    }
}
