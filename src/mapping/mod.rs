//! Document assembler and the mapping entry points.
//!
//! Each section builder is a pure function from the lookup indexes to one
//! sub-object of the target record; the assembler composes them and applies
//! the omit-empty-section rules.

pub mod additional_information;
pub mod attorney;
pub mod goods_services;
pub mod mark_selection;
pub mod owners;
pub mod signatory;

use crate::answers::{FieldLookup, GroupLookup, QuestionnaireAnswers};
use crate::error::{MapperError, Result};
use crate::record::TrademarkRecord;

/// Maps one questionnaire document into the trademark record shape.
///
/// Pure and deterministic: the same answers always produce the same record,
/// with no dependence on clock, randomness or I/O. Missing answers never
/// fail; they resolve to omitted output.
#[must_use]
pub fn map_questionnaire(data: &QuestionnaireAnswers) -> TrademarkRecord {
    let fields = FieldLookup::from_answers(&data.field_answers);
    let groups = GroupLookup::from_answers(&data.group_answers);

    TrademarkRecord {
        attorney: attorney::build_attorney(&fields),
        owners: owners::build_owners(&fields, &groups),
        mark_selection: mark_selection::build_mark_selection(&fields),
        goods_and_services: goods_services::build_goods_and_services(&fields),
        signatory: signatory::build_signatory(&fields, &groups),
        additional_information: additional_information::build_additional_information(&fields),
    }
}

/// Maps an untyped JSON document.
///
/// A document that violates the answer contract is reported as a single
/// [`MapperError`], so a migration driver records one failure per document
/// instead of crashing a batch.
pub fn map_questionnaire_value(value: &serde_json::Value) -> Result<TrademarkRecord> {
    let data: QuestionnaireAnswers =
        serde_json::from_value(value.clone()).map_err(|err| MapperError::InvalidInput {
            stage: "questionnaire answer decoding",
            message: err.to_string(),
        })?;
    Ok(map_questionnaire(&data))
}
