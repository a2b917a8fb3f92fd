//! Questionnaire answer contract and per-document lookup indexes.
//!
//! Answers arrive as two flat arrays: plain field answers and grouped
//! (repeatable) answers. Both are indexed exactly once per document into
//! [`FieldLookup`] and [`GroupLookup`], and every section builder reads from
//! those indexes instead of scanning the raw arrays.

mod lookup;

pub use lookup::{FieldLookup, GroupEntry, GroupLookup, find_in};

use serde::Deserialize;

/// One flat questionnaire response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldAnswer {
    /// Field identifier, unique within the document
    pub field_name: String,
    /// Raw answer text; may contain embedded line breaks
    #[serde(default)]
    pub field_value: Option<String>,
}

/// One repeated-field response, tied to a group instance.
///
/// Instances sharing a `group_index` logically form one repeated entity,
/// e.g. one joint owner or one signatory.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupAnswer {
    /// Group the answer belongs to; entries without one are skipped at indexing
    #[serde(default)]
    pub group_name: Option<String>,
    /// Field identifier within the group instance
    pub field_name: String,
    /// Raw answer text
    #[serde(default)]
    pub field_value: Option<String>,
    /// 1-based instance number of the repeated entity
    #[serde(default)]
    pub group_index: i64,
}

/// Input contract for one questionnaire document.
///
/// Either array may be empty; a missing array is treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireAnswers {
    /// Flat field answers
    #[serde(default)]
    pub field_answers: Vec<FieldAnswer>,
    /// Grouped/repeatable field answers
    #[serde(default)]
    pub group_answers: Vec<GroupAnswer>,
}
