//! End-to-end tests for the questionnaire-to-record mapping.
//!
//! These exercise the full pipeline through the typed and untyped entry
//! points, including the omit-empty rules on the serialized output.

use serde_json::json;
use trademark_mapper::{QuestionnaireAnswers, map_questionnaire, map_questionnaire_value};

fn answers(fields: &[(&str, &str)]) -> QuestionnaireAnswers {
    let field_answers: Vec<serde_json::Value> = fields
        .iter()
        .map(|&(name, value)| json!({ "fieldName": name, "fieldValue": value }))
        .collect();
    serde_json::from_value(json!({ "fieldAnswers": field_answers, "groupAnswers": [] })).unwrap()
}

#[test]
fn test_empty_input_yields_empty_record() {
    let record = map_questionnaire(&answers(&[]));
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json, json!({}));
}

#[test]
fn test_missing_answer_arrays_are_treated_as_empty() {
    let record = map_questionnaire_value(&json!({})).unwrap();
    assert!(record.attorney.is_none());
    assert!(record.owners.is_empty());
}

#[test]
fn test_malformed_input_is_one_wrapped_error() {
    let err = map_questionnaire_value(&json!({ "fieldAnswers": "not an array" })).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("questionnaire answer decoding"), "{message}");
}

#[test]
fn test_mapping_is_deterministic() {
    let data = answers(&[
        ("applicant_type_MC", "Individual"),
        ("First_Name_of_Petitioner", "Jane"),
        ("Last_Name_of_Petitioner", "Doe"),
        ("mark", "ACME"),
        ("attorney_full_name_ST", "John Quincy Adams Smith"),
    ]);
    let first = serde_json::to_string(&map_questionnaire(&data)).unwrap();
    let second = serde_json::to_string(&map_questionnaire(&data)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_attorney_from_full_name() {
    let record = map_questionnaire(&answers(&[(
        "attorney_full_name_ST",
        "John Quincy Adams Smith",
    )]));
    let attorney = record.attorney.unwrap();
    assert_eq!(attorney.first_name.as_deref(), Some("John"));
    assert_eq!(attorney.middle_name.as_deref(), Some("Quincy Adams"));
    assert_eq!(attorney.last_name.as_deref(), Some("Smith"));
}

#[test]
fn test_single_token_attorney_is_last_name_only() {
    let record = map_questionnaire(&answers(&[("attorney_full_name_ST", "Smith")]));
    let attorney = record.attorney.unwrap();
    assert_eq!(attorney.first_name, None);
    assert_eq!(attorney.last_name.as_deref(), Some("Smith"));
}

#[test]
fn test_individual_owner_end_to_end() {
    let record = map_questionnaire(&answers(&[
        ("applicant_type_MC", "Individual"),
        ("First_Name_of_Petitioner", "Jane"),
        ("Last_Name_of_Petitioner", "Doe"),
        ("country_of_citizenship_", "us"),
        ("street_address", "1 Main St"),
        ("City", "Springfield"),
        ("State", "Illinois"),
        ("zip_code", "62701"),
        ("e_mail_address", "jane@example.com"),
        ("petitioner_s_telephone_number", "555-123-4567"),
    ]));

    assert_eq!(record.owners.len(), 1);
    let owner = &record.owners[0];
    assert_eq!(owner.owner_selection.owner_type, "individual");
    let individual = owner.individual_owner.as_ref().unwrap();
    assert_eq!(individual.first_name.as_deref(), Some("Jane"));
    assert_eq!(
        individual.citizenship_country.as_deref(),
        Some("United States")
    );
    assert_eq!(owner.owner_address.owner_state.as_deref(), Some("IL"));
    assert_eq!(
        owner.owner_address.owner_country.as_deref(),
        Some("United States")
    );
    assert_eq!(owner.owner_phone_number.as_deref(), Some("+15551234567"));
    // No domicile answers were given.
    assert!(owner.domicile_address.is_none());
    assert!(owner.different_domicile.is_none());
}

#[test]
fn test_goods_intent_to_use_takes_priority() {
    let record = map_questionnaire(&answers(&[
        (
            "gs_itu_G_S_filing_basis_internal_note_LT",
            "Customer stated that they intent to use the trademark in the future.",
        ),
        (
            "gs_uic_G_S_filing_basis_internal_note_LT",
            "Customer stated that they are currently using the trademark.",
        ),
    ]));
    let goods = record.goods_and_services.unwrap();
    assert_eq!(goods.filing_basis.as_deref(), Some("no"));
    assert_eq!(
        goods
            .how_does_the_client_plan_to_use_their_trademark_section
            .how_does_the_client_plan_to_use_their_trademark
            .as_deref(),
        Some("No, but I intend to use it in the future.")
    );
}

#[test]
fn test_goods_summary_orders_labeled_lines() {
    let record = map_questionnaire(&answers(&[
        ("class_number", "25"),
        ("date_of_first_sale", "01/02/2020"),
        ("url_associated_with_trademark", "https://acme.example"),
        (
            "applicant_information_internal_note_LT",
            "Used trademark in commerce: Yes",
        ),
    ]));
    let goods = record.goods_and_services.unwrap();
    let summary = goods.additional_data_section.client_trademark_use.unwrap();
    assert_eq!(
        summary,
        "Filing Basis: Yes, I'm using this mark.\n\
         Date of First Sale: 01/02/2020\n\
         Class Number: 25\n\
         URL Associated with Trademark: https://acme.example"
    );
}

#[test]
fn test_signatory_title_normalization() {
    let record = map_questionnaire(&answers(&[
        ("signatory_name", "Jane Doe"),
        ("signatory_title", "CEO"),
    ]));
    let signatory = record.signatory.unwrap();
    assert_eq!(signatory.signatory_name.as_deref(), Some("Jane Doe"));
    assert_eq!(signatory.signatory_position.as_deref(), Some("CEO"));
    assert!(signatory.other_signatory_position.is_none());
}

#[test]
fn test_signatory_group_answers_win_over_flat_fields() {
    use trademark_mapper::answers::GroupAnswer;

    let mut data = answers(&[
        ("signatory_name", "Flat Name"),
        ("signatory_title", "Owner"),
    ]);
    data.group_answers = vec![GroupAnswer {
        group_name: Some("signatory_info_GRP".to_string()),
        field_name: "signatory_info_GRP_signature_ST_1".to_string(),
        field_value: Some("Grouped Name".to_string()),
        group_index: 1,
    }];

    let signatory = map_questionnaire(&data).signatory.unwrap();
    assert_eq!(signatory.signatory_name.as_deref(), Some("Grouped Name"));
    assert_eq!(signatory.signatory_position.as_deref(), Some("Owner"));
}

#[test]
fn test_additional_information_gating() {
    let record = map_questionnaire(&answers(&[
        ("AS_disclaimer_ST", "No claim to ACME apart from the mark"),
        ("AS_concurrent_use_info_ST", "East of the Mississippi"),
    ]));
    let info = record.additional_information.unwrap();
    assert_eq!(
        info.select_additional_information,
        vec!["disclaimer".to_string(), "concurrentUse".to_string()]
    );
    assert!(info.disclaimer_section.is_some());
    assert!(info.concurrent_use_section.is_some());
    assert!(info.prior_registration_section.is_none());
    assert!(info.miscellaneous_section.is_none());
}

#[test]
fn test_empty_sections_are_omitted_from_json() {
    let record = map_questionnaire(&answers(&[("attorney_full_name_ST", "Jane Doe")]));
    let json = serde_json::to_value(&record).unwrap();
    let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["attorney"]);
}

#[test]
fn test_mark_selection_color_claim_inference() {
    let record = map_questionnaire(&answers(&[
        ("mark", "ACME"),
        ("type_of_mark_to_protect_MC", "Typed (Standard Characters)"),
        ("mark_detail_color", "red and gold"),
    ]));
    let mark = record.mark_selection.unwrap();
    assert_eq!(mark.mark_format.as_deref(), Some("standard_character"));
    assert_eq!(
        mark.standard_character_mark.mark_text.as_deref(),
        Some("ACME")
    );
    assert_eq!(mark.design_mark.color_claim, "yes");
    assert_eq!(mark.design_mark.color_description.as_deref(), Some("red and gold"));

    let plain = map_questionnaire(&answers(&[("mark", "ACME")]));
    assert_eq!(plain.mark_selection.unwrap().design_mark.color_claim, "no");
}

#[test]
fn test_blank_answers_carry_no_data() {
    let record = map_questionnaire(&answers(&[
        ("mark", "   "),
        ("attorney_full_name_ST", ""),
    ]));
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json, json!({}));
}
