//! Target record types owned by the downstream IP service.
//!
//! The shape and all field names here are externally fixed and must not be
//! renamed. Optional fields and sections are skipped during serialization so
//! an absent answer never produces a `null` or an empty `{}` in the output.

use serde::Serialize;

/// The nested record consumed by the downstream product service.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrademarkRecord {
    /// Attorney of record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attorney: Option<Attorney>,
    /// Mark owners; two entries for joint individuals, otherwise one
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owners: Vec<Owner>,
    /// Mark format, text and design details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_selection: Option<MarkSelection>,
    /// Filing basis and usage details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goods_and_services: Option<GoodsAndServices>,
    /// Person signing the application
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signatory: Option<Signatory>,
    /// Optional statement subsections, gated by tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_information: Option<AdditionalInformation>,
}

/// Attorney name parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attorney {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// One mark owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    /// Owner type and entity classification
    pub owner_selection: OwnerSelection,
    /// Identity fields for an individual owner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual_owner: Option<IndividualOwner>,
    /// Identity fields for a juristic owner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<JuristicOwner>,
    /// Sole-proprietor citizenship, carried alongside either identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sole_proprietor: Option<SoleProprietor>,
    /// Alternate-name classification: `dba`, `ta` or `aka`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dba_type: Option<String>,
    /// The alternate name itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,
    /// Primary owner address
    pub owner_address: OwnerAddress,
    /// `"yes"` when a differing domicile address is present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub different_domicile: Option<String>,
    /// Domicile address, only when it differs from the owner address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domicile_address: Option<DomicileAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_phone_number: Option<String>,
}

/// Owner type and entity classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerSelection {
    /// `"individual"` or `"juristic"`
    pub owner_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incorporation_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(
        rename = "foreignEntityType_FreeForm",
        skip_serializing_if = "Option::is_none"
    )]
    pub foreign_entity_type_free_form: Option<String>,
    /// Raw applicant type when it matched no recognized entity type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type_other: Option<String>,
}

/// Identity of an individual owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualOwner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citizenship_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Identity of a juristic owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JuristicOwner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corporation_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incorporation_state: Option<String>,
}

/// Sole-proprietor citizenship block.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoleProprietor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sole_proprietor_country_of_citizenship: Option<String>,
}

/// Primary owner address.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_zip_code: Option<String>,
}

/// Domicile address, emitted only when it differs from the owner address.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomicileAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domicile_address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domicile_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domicile_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domicile_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domicile_zip_code: Option<String>,
}

/// Mark format, text and design details.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkSelection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_format: Option<String>,
    pub standard_character_mark: StandardCharacterMark,
    pub design_mark: DesignMark,
    pub name_and_likeness: NameAndLikeness,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub persons: Vec<Person>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub translation_transliteration: Vec<TranslationTransliteration>,
    pub translation_and_transliteration_intake_questionnaire: TranslationIntake,
}

/// The literal mark text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardCharacterMark {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_text: Option<String>,
}

/// Design-mark details; `color_claim` is `"yes"` iff a color description was given.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignMark {
    pub color_claim: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literal_element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_description: Option<String>,
}

/// Whether the mark contains a living person's name or likeness.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameAndLikeness {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_name_likeness: Option<String>,
}

/// A person who consented to appearing in the mark.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub has_consent: String,
    pub name_consent: String,
}

/// One translation or transliteration statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationTransliteration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_non_english_words: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_english_wording: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_english_translation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub english_translation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_latin_characters: Option<NonLatinCharacters>,
}

/// Non-Latin character transliteration details.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NonLatinCharacters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_non_latin_characters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_latin_transliteration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_latin_language: Option<String>,
}

/// Raw intake placeholder carried for the translation questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TranslationIntake {
    #[serde(
        rename = "translationAndTransliteration_IntakePlaceholder",
        skip_serializing_if = "Option::is_none"
    )]
    pub intake_placeholder: Option<String>,
}

/// Filing basis and usage details.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodsAndServices {
    /// `"yes"` = in use, `"no"` = intent to use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filing_basis: Option<String>,
    pub how_does_the_client_plan_to_use_their_trademark_section: TrademarkUsePlan,
    pub additional_data_section: AdditionalData,
}

/// Canonical usage-intent phrase, or the raw answer on a table miss.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrademarkUsePlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub how_does_the_client_plan_to_use_their_trademark: Option<String>,
}

/// Free-text usage summary and competitor reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_trademark_use: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitor_example: Option<String>,
}

/// Person signing the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Signatory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signatory_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signatory_position: Option<String>,
    /// Verbatim title when the signatory chose "other"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_signatory_position: Option<String>,
}

/// Optional statement subsections, each gated by its tag in
/// `selectAdditionalInformation`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalInformation {
    pub select_additional_information: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclaimer_section: Option<DisclaimerSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prior_registration_section: Option<PriorRegistrationSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning_significance_section: Option<MeaningSignificanceSection>,
    #[serde(rename = "section2f", skip_serializing_if = "Option::is_none")]
    pub section_2f: Option<Section2f>,
    #[serde(rename = "section2fInPart", skip_serializing_if = "Option::is_none")]
    pub section_2f_in_part: Option<Section2fInPart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrent_use_section: Option<ConcurrentUseSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miscellaneous_section: Option<MiscellaneousSection>,
}

/// Disclaimer statement text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisclaimerSection {
    pub disclaimer_text: String,
}

/// Claim of ownership of active prior registrations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorRegistrationSection {
    pub prior_registrations: Vec<PriorRegistration>,
}

/// One prior registration number.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorRegistration {
    pub registration_number: String,
}

/// Meaning or significance of wording in the mark.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeaningSignificanceSection {
    pub meanings: Vec<Meaning>,
}

/// One word-or-phrase meaning entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_or_phrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
}

/// Section 2(f) acquired-distinctiveness claim covering the whole mark.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section2f {
    pub claim_scope: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_prior_registration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prior_registrations_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_evidence_doc: Option<String>,
}

/// Section 2(f) claim covering part of the mark.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section2fInPart {
    pub claim_scope: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimed_portion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_prior_registration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prior_registrations_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_evidence_doc: Option<String>,
}

/// Concurrent-use statement text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcurrentUseSection {
    pub concurrent_use_text: String,
}

/// Free-text miscellaneous statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MiscellaneousSection {
    pub miscellaneous_text: String,
}
