//! Owners section builder.
//!
//! Owner cardinality is structurally determined by the applicant-type
//! discriminator: "Joint Individuals" always yields exactly two owners built
//! from group-indexed answers; every other recognized value yields one owner
//! built from flat fields.

use crate::answers::{FieldLookup, GroupEntry, GroupLookup};
use crate::format::{format_phone_number, resolve_country};
use crate::record::{
    DomicileAddress, IndividualOwner, JuristicOwner, Owner, OwnerAddress, OwnerSelection,
    SoleProprietor,
};
use crate::tables::{ENTITY_TYPES, US_STATES};

/// Applicant-type value that selects the two-owner structure.
const JOINT_INDIVIDUALS: &str = "joint individuals";

/// Group carrying the per-owner answers of a joint application.
const JOINT_OWNER_GROUP: &str = "joint_owner_info_GRP";

/// Ordered alternate-name classification rules; the first fragment found in
/// the choice answer wins. The order is part of the contract.
const ALTERNATE_NAME_RULES: &[(&str, &str)] = &[("dba", "dba"), ("ta", "ta"), ("aka", "aka")];

/// Flat domicile answer fields; any one of them present makes the domicile
/// block a candidate for inclusion.
const DOMICILE_FIELDS: &[&str] = &[
    "domicile_street_address_ST",
    "domicile_country_ST",
    "domicile_country_outside_US_ST",
    "domicile_city_ST",
    "domicile_state_ST",
    "domicile_zip_code_ST",
];

/// Builds the owners array from the applicant-type discriminator.
#[must_use]
pub fn build_owners(fields: &FieldLookup, groups: &GroupLookup) -> Vec<Owner> {
    let Some(applicant_type) = fields.non_empty("applicant_type_MC") else {
        return Vec::new();
    };

    if applicant_type.eq_ignore_ascii_case(JOINT_INDIVIDUALS) {
        return build_joint_owners(fields, groups);
    }

    vec![build_single_owner(fields, applicant_type)]
}

/// Classifies an alternate-name choice answer as `dba`, `ta` or `aka`.
fn classify_alternate_name(choice: &str) -> Option<&'static str> {
    let choice = choice.to_lowercase();
    ALTERNATE_NAME_RULES
        .iter()
        .find(|&&(fragment, _)| choice.contains(fragment))
        .map(|&(_, classification)| classification)
}

fn owned(fields: &FieldLookup, name: &str) -> Option<String> {
    fields.non_empty(name).map(str::to_string)
}

fn build_single_owner(fields: &FieldLookup, applicant_type: &str) -> Owner {
    let individual = applicant_type.eq_ignore_ascii_case("individual");

    let individual_owner = individual.then(|| IndividualOwner {
        citizenship_country: fields
            .non_empty("country_of_citizenship_")
            .and_then(resolve_country),
        first_name: owned(fields, "First_Name_of_Petitioner"),
        middle_name: owned(fields, "applicant_middle_name_ST"),
        last_name: owned(fields, "Last_Name_of_Petitioner"),
    });

    let juristic_owner = (!individual).then(|| JuristicOwner {
        corporation_name: owned(fields, "Name_of_Applicant"),
        incorporation_state: US_STATES
            .get_opt(fields.non_empty("State"))
            .map(str::to_string),
    });

    let sole_proprietor = fields
        .non_empty("country_of_citizenship_")
        .and_then(resolve_country)
        .map(|country| SoleProprietor {
            sole_proprietor_country_of_citizenship: Some(country),
        });

    let dba_type = fields
        .non_empty("DBA_AKA_TA_FKA_Choice_MC")
        .and_then(classify_alternate_name);

    let domicile_address = build_domicile(fields);

    Owner {
        owner_selection: build_owner_selection(fields, applicant_type, individual),
        individual_owner,
        owner: juristic_owner,
        sole_proprietor,
        dba_type: dba_type.map(str::to_string),
        alternate_name: owned(fields, "DBA_AKA_TA_FKA_Value_ST"),
        owner_address: build_owner_address(fields),
        different_domicile: domicile_address.is_some().then(|| "yes".to_string()),
        domicile_address,
        owner_email_address: owned(fields, "e_mail_address"),
        owner_phone_number: fields
            .non_empty("petitioner_s_telephone_number")
            .map(format_phone_number),
    }
}

fn build_owner_selection(
    fields: &FieldLookup,
    applicant_type: &str,
    individual: bool,
) -> OwnerSelection {
    let country = fields
        .non_empty("country")
        .or_else(|| fields.non_empty("entity_country"))
        .unwrap_or("us");

    let entity_type = ENTITY_TYPES.get(applicant_type);
    if entity_type.is_none() {
        log::debug!("unrecognized applicant type {applicant_type:?}, carried as free-form entity type");
    }

    OwnerSelection {
        owner_type: if individual { "individual" } else { "juristic" }.to_string(),
        incorporation_country: resolve_country(country),
        entity_type: entity_type.map(str::to_string),
        foreign_entity_type_free_form: Some(entity_type.unwrap_or(applicant_type).to_string()),
        entity_type_other: entity_type
            .is_none()
            .then(|| applicant_type.to_string()),
    }
}

fn build_owner_address(fields: &FieldLookup) -> OwnerAddress {
    let state = US_STATES.get_opt(fields.non_empty("State"));
    // A recognized US state pins the owner country.
    let country = if state.is_some() {
        Some("United States".to_string())
    } else {
        fields.non_empty("country").and_then(resolve_country)
    };

    OwnerAddress {
        owner_address_line1: owned(fields, "street_address"),
        owner_country: country,
        owner_city: owned(fields, "City"),
        owner_state: state.map(str::to_string),
        owner_zip_code: owned(fields, "zip_code"),
    }
}

/// Builds the domicile block, or `None` when it would repeat the owner
/// address. Inclusion needs at least one domicile answer present and at
/// least one of the five compared fields differing, raw string against raw
/// string with no normalization.
fn build_domicile(fields: &FieldLookup) -> Option<DomicileAddress> {
    if !DOMICILE_FIELDS
        .iter()
        .any(|field| fields.non_empty(field).is_some())
    {
        return None;
    }

    let domicile_country_raw = fields
        .non_empty("domicile_country_ST")
        .or_else(|| fields.non_empty("domicile_country_outside_US_ST"));

    let compared = [
        (
            fields.non_empty("street_address"),
            fields.non_empty("domicile_street_address_ST"),
        ),
        (fields.non_empty("City"), fields.non_empty("domicile_city_ST")),
        (fields.non_empty("State"), fields.non_empty("domicile_state_ST")),
        (
            fields.non_empty("zip_code"),
            fields.non_empty("domicile_zip_code_ST"),
        ),
        (fields.non_empty("country"), domicile_country_raw),
    ];
    if compared.iter().all(|(owner, domicile)| owner == domicile) {
        return None;
    }

    Some(DomicileAddress {
        domicile_address_line1: owned(fields, "domicile_street_address_ST"),
        domicile_country: domicile_country_raw.and_then(resolve_country),
        domicile_city: owned(fields, "domicile_city_ST"),
        domicile_state: US_STATES
            .get_opt(fields.non_empty("domicile_state_ST"))
            .map(str::to_string),
        domicile_zip_code: owned(fields, "domicile_zip_code_ST"),
    })
}

/// Builds exactly two owners from the joint-owner group. The cardinality is
/// structural: both owners exist even when the group carries no answers for
/// one of them.
fn build_joint_owners(fields: &FieldLookup, groups: &GroupLookup) -> Vec<Owner> {
    (1..=2)
        .map(|index| build_joint_owner(fields, &groups.instance(JOINT_OWNER_GROUP, index), index))
        .collect()
}

/// First non-empty value among instance entries whose lowercased field name
/// satisfies `matches`.
fn instance_value<'a>(
    entries: &[&'a GroupEntry],
    matches: impl Fn(&str) -> bool,
) -> Option<&'a str> {
    entries.iter().find_map(|entry| {
        if matches(&entry.field_name.to_lowercase()) {
            entry
                .field_value
                .as_deref()
                .filter(|value| !value.is_empty())
        } else {
            None
        }
    })
}

fn build_joint_owner(fields: &FieldLookup, entries: &[&GroupEntry], index: i64) -> Owner {
    let fragment = |needle: &'static str| instance_value(entries, move |name| name.contains(needle));

    let citizenship = instance_value(entries, |name| name.contains("citizenship"));
    // "country" alone would also match the citizenship field.
    let country = instance_value(entries, |name| {
        name.contains("country") && !name.contains("citizenship")
    });
    let state = US_STATES.get_opt(fragment("state"));

    let owner_address = OwnerAddress {
        owner_address_line1: fragment("street_address").map(str::to_string),
        owner_country: if state.is_some() {
            Some("United States".to_string())
        } else {
            country.and_then(resolve_country)
        },
        owner_city: fragment("city").map(str::to_string),
        owner_state: state.map(str::to_string),
        owner_zip_code: fragment("zip").map(str::to_string),
    };

    // Alternate-name answers are flat fields and apply to the first owner only.
    let dba_type = (index == 1)
        .then(|| {
            fields
                .non_empty("DBA_AKA_TA_FKA_Choice_MC")
                .and_then(classify_alternate_name)
        })
        .flatten();
    let alternate_name = (index == 1)
        .then(|| owned(fields, "DBA_AKA_TA_FKA_Value_ST"))
        .flatten();

    Owner {
        owner_selection: OwnerSelection {
            owner_type: "individual".to_string(),
            incorporation_country: country
                .and_then(resolve_country)
                .or_else(|| resolve_country("us")),
            entity_type: ENTITY_TYPES.get(JOINT_INDIVIDUALS).map(str::to_string),
            foreign_entity_type_free_form: ENTITY_TYPES
                .get(JOINT_INDIVIDUALS)
                .map(str::to_string),
            entity_type_other: None,
        },
        individual_owner: Some(IndividualOwner {
            citizenship_country: citizenship.and_then(resolve_country),
            first_name: fragment("first_name").map(str::to_string),
            middle_name: fragment("middle_name").map(str::to_string),
            last_name: fragment("last_name").map(str::to_string),
        }),
        owner: None,
        sole_proprietor: None,
        dba_type: dba_type.map(str::to_string),
        alternate_name,
        owner_address,
        different_domicile: None,
        domicile_address: None,
        owner_email_address: fragment("mail").map(str::to_string),
        owner_phone_number: fragment("phone").map(format_phone_number),
    }
}
