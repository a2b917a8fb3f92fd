//! Additional-information section builder.
//!
//! A gated composite: each trigger answer independently adds its tag to
//! `selectAdditionalInformation` and its subsection to the output. The whole
//! section is omitted when no tag is set.

use crate::answers::FieldLookup;
use crate::record::{
    AdditionalInformation, ConcurrentUseSection, DisclaimerSection, Meaning,
    MeaningSignificanceSection, MiscellaneousSection, PriorRegistration,
    PriorRegistrationSection, Section2f, Section2fInPart,
};

/// Subsection tags, externally fixed.
pub const TAG_DISCLAIMER: &str = "disclaimer";
pub const TAG_PRIOR_REGISTRATIONS: &str = "priorRegistrations";
pub const TAG_MEANING_SIGNIFICANCE: &str = "meaningSignificance";
pub const TAG_SECTION_2F: &str = "section2f";
pub const TAG_SECTION_2F_IN_PART: &str = "section2fInPart";
pub const TAG_CONCURRENT_USE: &str = "concurrentUse";
pub const TAG_MISCELLANEOUS: &str = "miscellaneous";

/// Builds the additional-information composite, or `None` when no trigger
/// answer is present.
#[must_use]
pub fn build_additional_information(fields: &FieldLookup) -> Option<AdditionalInformation> {
    let mut info = AdditionalInformation::default();

    if let Some(text) = fields.non_empty("AS_disclaimer_ST") {
        info.select_additional_information.push(TAG_DISCLAIMER.to_string());
        info.disclaimer_section = Some(DisclaimerSection {
            disclaimer_text: text.to_string(),
        });
    }

    let prior_registrations = collect_prior_registrations(fields);
    if !prior_registrations.is_empty() {
        info.select_additional_information
            .push(TAG_PRIOR_REGISTRATIONS.to_string());
        info.prior_registration_section = Some(PriorRegistrationSection { prior_registrations });
    }

    let word_or_phrase = fields.non_empty("AS_WLN_in_mark_ST");
    let meaning = fields.non_empty("AS_WLN_in_mark_term_of_art_ST");
    if word_or_phrase.is_some() || meaning.is_some() {
        info.select_additional_information
            .push(TAG_MEANING_SIGNIFICANCE.to_string());
        info.meaning_significance_section = Some(MeaningSignificanceSection {
            meanings: vec![Meaning {
                word_or_phrase: word_or_phrase.map(str::to_string),
                meaning: meaning.map(str::to_string),
            }],
        });
    }

    match fields.non_empty("AS_2_f_claim_nature_MC") {
        Some(nature) if nature.eq_ignore_ascii_case("whole") => {
            info.select_additional_information.push(TAG_SECTION_2F.to_string());
            info.section_2f = Some(build_section_2f_whole(fields));
        }
        Some(nature) if nature.eq_ignore_ascii_case("in part") => {
            info.select_additional_information
                .push(TAG_SECTION_2F_IN_PART.to_string());
            info.section_2f_in_part = Some(build_section_2f_in_part(fields));
        }
        Some(nature) => {
            log::debug!("unrecognized 2(f) claim nature {nature:?}, no subsection emitted");
        }
        None => {}
    }

    if let Some(text) = fields.non_empty("AS_concurrent_use_info_ST") {
        info.select_additional_information
            .push(TAG_CONCURRENT_USE.to_string());
        info.concurrent_use_section = Some(ConcurrentUseSection {
            concurrent_use_text: text.to_string(),
        });
    }

    if let Some(text) = fields.non_empty("more_information_LT") {
        info.select_additional_information
            .push(TAG_MISCELLANEOUS.to_string());
        info.miscellaneous_section = Some(MiscellaneousSection {
            miscellaneous_text: text.to_string(),
        });
    }

    if info.select_additional_information.is_empty() {
        None
    } else {
        Some(info)
    }
}

/// Collects the four prior-registration slots. The fourth slot may carry a
/// comma-separated list; each entry is trimmed and empty entries are dropped.
fn collect_prior_registrations(fields: &FieldLookup) -> Vec<PriorRegistration> {
    let mut numbers: Vec<String> = Vec::new();

    for slot in 1..=3 {
        let name = format!("AS_prior_registration_number_{slot}_ST");
        if let Some(value) = fields.non_empty(&name) {
            numbers.push(value.to_string());
        }
    }
    if let Some(value) = fields.non_empty("AS_prior_registration_number_4_ST") {
        numbers.extend(
            value
                .split(',')
                .map(str::trim)
                .filter(|number| !number.is_empty())
                .map(String::from),
        );
    }

    numbers
        .into_iter()
        .map(|registration_number| PriorRegistration {
            registration_number,
        })
        .collect()
}

/// The distinctiveness condition, first present answer wins.
fn condition_and_evidence(
    prior: Option<&str>,
    five_years: Option<&str>,
    evidence: Option<&str>,
) -> Option<String> {
    if prior.is_some() {
        Some("priorRegistration".to_string())
    } else if five_years.is_some() {
        Some("fiveYearsUse".to_string())
    } else if evidence.is_some() {
        Some("otherEvidence".to_string())
    } else {
        None
    }
}

fn build_section_2f_whole(fields: &FieldLookup) -> Section2f {
    let prior = fields.non_empty("AS_2f_whole_is_based_on_active_prior_registration_ST");
    let five_years = fields.non_empty("AS_2f_whole_is_based_on_five_years_of_use_ST");
    let evidence = fields.non_empty("AS_2f_whole_is_based_on_evidence_ST");

    Section2f {
        claim_scope: "entire_mark".to_string(),
        condition_prior_registration: condition_and_evidence(prior, five_years, evidence),
        prior_registrations_text: prior.map(str::to_string),
        other_evidence_doc: evidence.map(str::to_string),
    }
}

fn build_section_2f_in_part(fields: &FieldLookup) -> Section2fInPart {
    // The in-part field names come straight from the intake tool, including
    // the "avidence" spelling.
    let prior = fields.non_empty("AS_2fc_inpart_is_based_on_active_prior_registration_ST");
    let five_years = fields.non_empty("AS_2fc_inpart_is_based_on_five_years_of_use_ST");
    let evidence = fields.non_empty("AS_2fc_inpart_is_based_on_avidence_ST");

    Section2fInPart {
        claim_scope: "portion".to_string(),
        claimed_portion: fields.non_empty("AS_2f_claim_portion_ST").map(str::to_string),
        condition_prior_registration: condition_and_evidence(prior, five_years, evidence),
        prior_registrations_text: prior.map(str::to_string),
        other_evidence_doc: evidence.map(str::to_string),
    }
}
