//! Field and group lookup indexes built once per questionnaire document.

use rustc_hash::FxHashMap;

use super::{FieldAnswer, GroupAnswer};

/// Name → trimmed-value index over the flat answers of one document.
#[derive(Debug, Clone, Default)]
pub struct FieldLookup {
    values: FxHashMap<String, String>,
}

impl FieldLookup {
    /// Builds the index from raw answers.
    ///
    /// String values are trimmed. A later answer for the same name wins,
    /// following input order. An answer without a value never adds a key;
    /// an explicit empty string is a real answer and is kept.
    #[must_use]
    pub fn from_answers(answers: &[FieldAnswer]) -> Self {
        let mut values = FxHashMap::default();
        for answer in answers {
            if answer.field_name.is_empty() {
                continue;
            }
            if let Some(value) = &answer.field_value {
                values.insert(answer.field_name.clone(), value.trim().to_string());
            }
        }
        Self { values }
    }

    /// Trimmed value for a field, or `None` when the question was not answered.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Value for a field, treating an empty answer the same as an absent one.
    ///
    /// Section builders use this accessor: a blank answer carries no data for
    /// the target record even though the indexer keeps the key.
    #[must_use]
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    /// Value for a field with `""` as the default, for display builders.
    #[must_use]
    pub fn text(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// Number of indexed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the document had no usable flat answers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One repeated-field answer within a group instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEntry {
    /// Field identifier within the group
    pub field_name: String,
    /// Trimmed answer text, if any
    pub field_value: Option<String>,
    /// 1-based instance number of the repeated entity
    pub group_index: i64,
}

/// Group name → ordered-entries index over the repeated answers of one document.
#[derive(Debug, Clone, Default)]
pub struct GroupLookup {
    groups: FxHashMap<String, Vec<GroupEntry>>,
}

impl GroupLookup {
    /// Builds the index from raw group answers, preserving input order within
    /// each group. Answers without a group name are skipped.
    #[must_use]
    pub fn from_answers(answers: &[GroupAnswer]) -> Self {
        let mut groups: FxHashMap<String, Vec<GroupEntry>> = FxHashMap::default();
        for answer in answers {
            let Some(group_name) = answer.group_name.as_deref() else {
                continue;
            };
            if group_name.is_empty() {
                continue;
            }
            groups
                .entry(group_name.to_string())
                .or_default()
                .push(GroupEntry {
                    field_name: answer.field_name.clone(),
                    field_value: answer
                        .field_value
                        .as_deref()
                        .map(|value| value.trim().to_string()),
                    group_index: answer.group_index,
                });
        }
        Self { groups }
    }

    /// All entries of a group in input order; empty when the group is absent.
    #[must_use]
    pub fn entries(&self, group: &str) -> &[GroupEntry] {
        self.groups.get(group).map_or(&[], Vec::as_slice)
    }

    /// First non-empty value in a group whose field name contains `fragment`
    /// (case-insensitive).
    #[must_use]
    pub fn find(&self, group: &str, fragment: &str) -> Option<&str> {
        find_in(self.entries(group), fragment)
    }

    /// Entries belonging to one instance of a repeated entity.
    #[must_use]
    pub fn instance(&self, group: &str, index: i64) -> Vec<&GroupEntry> {
        self.entries(group)
            .iter()
            .filter(|entry| entry.group_index == index)
            .collect()
    }
}

/// First non-empty value among `entries` whose field name contains `fragment`
/// (case-insensitive). Group field names carry the group name and instance
/// number as affixes, so matching is by fragment rather than full name.
#[must_use]
pub fn find_in<'a>(entries: &'a [GroupEntry], fragment: &str) -> Option<&'a str> {
    let fragment = fragment.to_lowercase();
    entries.iter().find_map(|entry| {
        if entry.field_name.to_lowercase().contains(&fragment) {
            entry
                .field_value
                .as_deref()
                .filter(|value| !value.is_empty())
        } else {
            None
        }
    })
}
