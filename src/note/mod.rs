//! Derived review documents built from the questionnaire answers.
//!
//! Both output shapes, the rich-text note tree and the flowed report, render
//! the same fixed outline of sections and labeled fields. Operators read them
//! side by side, so the outline is resolved once here and the two serializers
//! in [`lexical`] and [`report`] mirror it exactly.

pub mod lexical;
pub mod report;

use crate::answers::FieldLookup;
use crate::format::strip_divider_lines;

/// How a raw answer value becomes display lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single line, raw value carried through even when empty.
    Text,
    /// Free text, dividers stripped and split on newlines; empty yields no lines.
    Multiline,
    /// Checkbox answer, `"1"` renders as `Yes`, anything else as `No`.
    Checkbox,
    /// Choice answer, exactly `"Yes"` renders as `Yes`, anything else as `No`.
    YesNo,
}

/// One field slot in the fixed layout.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Display label; `None` renders the value without a label line.
    pub label: Option<&'static str>,
    /// Answer field the value is read from.
    pub field: &'static str,
    pub kind: FieldKind,
}

/// One section of the fixed layout.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    pub heading: &'static str,
    pub fields: &'static [FieldSpec],
}

const fn text(label: &'static str, field: &'static str) -> FieldSpec {
    FieldSpec {
        label: Some(label),
        field,
        kind: FieldKind::Text,
    }
}

const fn multiline(label: Option<&'static str>, field: &'static str) -> FieldSpec {
    FieldSpec {
        label,
        field,
        kind: FieldKind::Multiline,
    }
}

const fn checkbox(label: &'static str, field: &'static str) -> FieldSpec {
    FieldSpec {
        label: Some(label),
        field,
        kind: FieldKind::Checkbox,
    }
}

const fn yes_no(label: &'static str, field: &'static str) -> FieldSpec {
    FieldSpec {
        label: Some(label),
        field,
        kind: FieldKind::YesNo,
    }
}

/// The review layout. Section order, headings and labels are fixed by the
/// external renderer contract and must not be reworded.
pub const NOTE_LAYOUT: &[SectionSpec] = &[
    SectionSpec {
        heading: "Intake Notes",
        fields: &[multiline(None, "applicant_information_internal_note_LT")],
    },
    SectionSpec {
        heading: "Applicant Information",
        fields: &[
            text("Name of Sole Proprietor Petitioner:", "Name_of_Petitioner"),
            text(
                "Partner's name, Citizenship OR where legally organized, Entity type (Use comma to separate):",
                "US_applicants_only_partnership",
            ),
        ],
    },
    SectionSpec {
        heading: "Address & Contact Information",
        fields: &[text("Contact Name:", "Contact_Name")],
    },
    SectionSpec {
        heading: "Mark & Filing Format",
        fields: &[
            text("Literal Element. Otherwise leave blank:", "Literal_Element_Only"),
            text(
                "If Logo is in Color, please complete the color list, otherwise leave blank if is Black & White:",
                "mark_detail_color",
            ),
        ],
    },
    SectionSpec {
        heading: "Goods & Services",
        fields: &[
            text("Number of Classes:", "total___classes_"),
            multiline(
                Some("Description of goods and/or Services:"),
                "list_goods_or_services",
            ),
        ],
    },
    SectionSpec {
        heading: "Goods and Services for Used in Commerce",
        fields: &[
            text("International Class Number:", "gs_uic_international_class_number_MC"),
            text("Date of First Use Anywhere:", "gs_uic_date_of_first_use_anywhere_ST"),
            text(
                "Date of First Use in Commerce:",
                "gs_uic_date_of_first_use_in_commerce_ST",
            ),
            text("Specimen Description:", "gs_uic_specimen_description_ST"),
            text("Specimen URL:", "gs_uic_specimen_url_ST"),
            text("Date of Specimen URL:", "gs_uic_date_of_specimen_url_ST"),
            multiline(
                Some("G&S Used in Commerce Filing Basis Internal Note:"),
                "gs_uic_G_S_filing_basis_internal_note_LT",
            ),
        ],
    },
    SectionSpec {
        heading: "Form Type",
        fields: &[text("Form Type:", "form_type_MC")],
    },
    SectionSpec {
        heading: "Additional Statement",
        fields: &[text(
            "Additional Trademark Statement?",
            "additional_trademark_statement_MC",
        )],
    },
    SectionSpec {
        heading: "Translation (English Translation & Wording)",
        fields: &[text(
            "The following wording within the mark, has no any meaning in a foreign language:",
            "AS_non_trans_in_foreign_language_ST",
        )],
    },
    SectionSpec {
        heading: "Transliteration",
        fields: &[text(
            "Non-Latin characters in mark transliterate to following words & have no meaning in foreign language:",
            "AS_non_latin_chars_in_the_mark_no_mean_ST",
        )],
    },
    SectionSpec {
        heading: "Meaning or significance of wording, letter(s), or number(s)",
        fields: &[
            text(
                "Please input here the word(s) appearing in the mark that has no significance nor is it a term of art:",
                "AS_WLN_in_the_mark_no_mean_ST",
            ),
            text(
                "The following word(s) have no meaning in a foreign language:",
                "AS_WLN_in_the_mark_no_mean_foreign_lang_ST",
            ),
        ],
    },
    SectionSpec {
        heading: "Name(s), Portrait(s), Signature(s) of Individual(s)",
        fields: &[
            text(
                "Please input the name of whom consent(s) to register is made of record:",
                "AS_individual_name_with_consent_ST",
            ),
            checkbox(
                "Check if name(s)/portrait(s)/and/or signature(s) in mark does not identify living individual:",
                "AS_NPS_identifies_individual_CB",
            ),
        ],
    },
    SectionSpec {
        heading: "Use of the mark in another form",
        fields: &[
            text(
                "Date of Use of the Mark in another Form Anywhere at least as (MM/DD/YYYY):",
                "AS_mark_date_of_use_anywhere_ST",
            ),
            text(
                "Date of Use of the Mark in Commerce at least as (MM/DD/YYYY):",
                "AS_mark_date_of_use_in_commerce_ST",
            ),
        ],
    },
    SectionSpec {
        heading: "Concurrent & Miscellaneous",
        fields: &[text("Concurrent Use Information:", "AS_concurrent_use_info_ST")],
    },
    SectionSpec {
        heading: "Stippling Information",
        fields: &[
            checkbox(
                "Stippling as a Feature of the Mark:",
                "AS_stippling_as_feature_of_the_mark_CB",
            ),
            checkbox("Stippling for Shading:", "AS_stippling_for_shading_CB"),
        ],
    },
    SectionSpec {
        heading: "Foreign Trademark Information",
        fields: &[
            yes_no("Foreign Application:", "foreign_application_MC"),
            text("Country of Foreign Filing:", "country_of_foreign_filing_"),
            text("Foreign Application Number:", "foreign_application_number_"),
            text("Date of Foreign Filing:", "date_of_foreign_filing_"),
            checkbox(
                "At this time, the applicant intends to rely on Section 44(e) as a basis for registration:",
                "foreign_application_rely_on_44e_cb",
            ),
            checkbox(
                "At this time, the applicant has another basis for registration (Section 1(a) or Section 1(b)):",
                "foreign_application_rely_on_others_cb",
            ),
            yes_no("Foreign Registration:", "foreign_registration_MC"),
            text("Country of Foreign Registration:", "country_of_foreign_regis_"),
            text("Foreign Registration Number:", "foreign_regis_number_"),
            text("Foreign Registration Date:", "foreign_regis_date_"),
            text("Foreign Registration Expiration (Required):", "foreign_regis_expiry_"),
            text(
                "Foreign Registration Renewal Date (Insert date, if applicable):",
                "foreign_regis_renewal_date_",
            ),
            checkbox(
                "The FR includes a claim of Standard Characters or the country of origin Std Character equivalent:",
                "foreign_regis_includes_standard_characters_cb",
            ),
        ],
    },
];

/// A resolved field: the label from the layout and the display lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineField {
    pub label: Option<&'static str>,
    /// Display lines; empty for a multiline field with no content.
    pub lines: Vec<String>,
}

/// A resolved section of the outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineSection {
    pub heading: &'static str,
    pub fields: Vec<OutlineField>,
}

/// The resolved review outline, shared by both serializers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteOutline {
    pub sections: Vec<OutlineSection>,
}

/// Resolves the fixed layout against the answers. Every section and field
/// slot is always present; absence shows up as empty lines, never as a
/// dropped slot.
#[must_use]
pub fn build_outline(fields: &FieldLookup) -> NoteOutline {
    let sections = NOTE_LAYOUT
        .iter()
        .map(|section| OutlineSection {
            heading: section.heading,
            fields: section
                .fields
                .iter()
                .map(|spec| OutlineField {
                    label: spec.label,
                    lines: resolve_lines(fields, spec),
                })
                .collect(),
        })
        .collect();

    NoteOutline { sections }
}

fn resolve_lines(fields: &FieldLookup, spec: &FieldSpec) -> Vec<String> {
    let raw = fields.text(spec.field);
    match spec.kind {
        FieldKind::Text => vec![raw.to_string()],
        FieldKind::Multiline => {
            let cleaned = strip_divider_lines(raw);
            if cleaned.is_empty() {
                Vec::new()
            } else {
                cleaned.split('\n').map(str::to_string).collect()
            }
        }
        FieldKind::Checkbox => vec![if raw == "1" { "Yes" } else { "No" }.to_string()],
        FieldKind::YesNo => vec![if raw == "Yes" { "Yes" } else { "No" }.to_string()],
    }
}
