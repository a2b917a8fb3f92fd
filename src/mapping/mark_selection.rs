//! Mark selection section builder.

use crate::answers::FieldLookup;
use crate::record::{
    DesignMark, MarkSelection, NameAndLikeness, NonLatinCharacters, Person,
    StandardCharacterMark, TranslationIntake, TranslationTransliteration,
};
use crate::tables::{MARK_FORMATS, YES_NO};

/// Every answer that contributes to the mark selection section. The section
/// is omitted entirely when none of them is present.
const SOURCE_FIELDS: &[&str] = &[
    "mark",
    "type_of_mark_to_protect_MC",
    "mark_detail_color",
    "mark_detail",
    "Literal_Element_Only",
    "name_consent",
    "AS_individual_name_with_consent_ST",
    "foreign_language",
    "foreign_language_words",
    "AS_eng_translation_is_ST",
    "AS_non_latin_chars_in_the_mark_ST",
    "AS_non_latin_chars_in_the_mark_mean_ST",
];

/// Builds the mark selection section, or `None` when no mark answer exists.
#[must_use]
pub fn build_mark_selection(fields: &FieldLookup) -> Option<MarkSelection> {
    if !SOURCE_FIELDS
        .iter()
        .any(|field| fields.non_empty(field).is_some())
    {
        return None;
    }

    Some(MarkSelection {
        mark_format: MARK_FORMATS
            .get_opt(fields.non_empty("type_of_mark_to_protect_MC"))
            .map(str::to_string),
        standard_character_mark: StandardCharacterMark {
            mark_text: fields.non_empty("mark").map(str::to_string),
        },
        design_mark: build_design_mark(fields),
        name_and_likeness: NameAndLikeness {
            contains_name_likeness: YES_NO
                .get_opt(fields.non_empty("name_consent"))
                .map(str::to_string),
        },
        persons: build_persons(fields),
        translation_transliteration: build_translation_transliteration(fields),
        translation_and_transliteration_intake_questionnaire: TranslationIntake {
            intake_placeholder: fields
                .non_empty("foreign_language_words")
                .map(str::to_string),
        },
    })
}

fn build_design_mark(fields: &FieldLookup) -> DesignMark {
    let color_description = fields.non_empty("mark_detail_color");

    DesignMark {
        // The color claim is inferred, never asked directly.
        color_claim: if color_description.is_some() { "yes" } else { "no" }.to_string(),
        color_description: color_description.map(str::to_string),
        literal_element: fields.non_empty("Literal_Element_Only").map(str::to_string),
        logo_description: fields.non_empty("mark_detail").map(str::to_string),
    }
}

fn build_persons(fields: &FieldLookup) -> Vec<Person> {
    match fields.non_empty("AS_individual_name_with_consent_ST") {
        Some(name) => vec![Person {
            has_consent: "yes".to_string(),
            name_consent: name.to_string(),
        }],
        None => Vec::new(),
    }
}

/// One entry per independently populated translation pair and
/// transliteration pair. When neither pair has data, a single entry carries
/// only the yes/no non-English-words flag, if that was answered at all.
fn build_translation_transliteration(fields: &FieldLookup) -> Vec<TranslationTransliteration> {
    let has_non_english_words = YES_NO
        .get_opt(fields.non_empty("foreign_language"))
        .map(str::to_string);

    let non_english_wording = fields.non_empty("foreign_language_words");
    let english_translation = fields.non_empty("AS_eng_translation_is_ST");
    let non_latin_chars = fields.non_empty("AS_non_latin_chars_in_the_mark_ST");
    let non_latin_meaning = fields.non_empty("AS_non_latin_chars_in_the_mark_mean_ST");

    let mut entries = Vec::new();

    if non_english_wording.is_some() || english_translation.is_some() {
        entries.push(TranslationTransliteration {
            has_non_english_words: has_non_english_words.clone(),
            non_english_wording: non_english_wording.map(str::to_string),
            has_english_translation: english_translation.map(|_| "yes".to_string()),
            english_translation: english_translation.map(str::to_string),
            non_latin_characters: None,
        });
    }

    if non_latin_chars.is_some() || non_latin_meaning.is_some() {
        entries.push(TranslationTransliteration {
            has_non_english_words: None,
            non_english_wording: None,
            has_english_translation: None,
            english_translation: None,
            non_latin_characters: Some(NonLatinCharacters {
                has_non_latin_characters: Some("yes".to_string()),
                non_latin_transliteration: non_latin_meaning.map(str::to_string),
                non_latin_language: non_latin_chars.map(str::to_string),
            }),
        });
    }

    if entries.is_empty() {
        if let Some(flag) = has_non_english_words {
            entries.push(TranslationTransliteration {
                has_non_english_words: Some(flag),
                ..TranslationTransliteration::default()
            });
        }
    }

    entries
}
