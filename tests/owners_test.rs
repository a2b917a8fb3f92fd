//! Tests for owner construction across applicant types.

use trademark_mapper::answers::{FieldAnswer, GroupAnswer};
use trademark_mapper::{QuestionnaireAnswers, map_questionnaire};

fn field(name: &str, value: &str) -> FieldAnswer {
    FieldAnswer {
        field_name: name.to_string(),
        field_value: Some(value.to_string()),
    }
}

fn group(name: &str, value: &str, index: i64) -> GroupAnswer {
    GroupAnswer {
        group_name: Some("joint_owner_info_GRP".to_string()),
        field_name: format!("joint_owner_info_GRP_{name}_{index}"),
        field_value: Some(value.to_string()),
        group_index: index,
    }
}

#[test]
fn test_joint_individuals_always_two_owners() {
    let data = QuestionnaireAnswers {
        field_answers: vec![field("applicant_type_MC", "Joint Individuals")],
        group_answers: vec![
            group("first_name_ST", "Jane", 1),
            group("last_name_ST", "Doe", 1),
        ],
    };
    let record = map_questionnaire(&data);

    assert_eq!(record.owners.len(), 2);
    let first = record.owners[0].individual_owner.as_ref().unwrap();
    assert_eq!(first.first_name.as_deref(), Some("Jane"));
    assert_eq!(first.last_name.as_deref(), Some("Doe"));
    // The second owner exists structurally even without answers.
    let second = record.owners[1].individual_owner.as_ref().unwrap();
    assert_eq!(second.first_name, None);
    assert_eq!(record.owners[1].owner_selection.owner_type, "individual");
}

#[test]
fn test_joint_owner_fields_resolve_per_instance() {
    let data = QuestionnaireAnswers {
        field_answers: vec![field("applicant_type_MC", "Joint Individuals")],
        group_answers: vec![
            group("first_name_ST", "Jane", 1),
            group("e_mail_ST", "jane@example.com", 1),
            group("phone_number_ST", "5551234567", 1),
            group("state_ST", "Texas", 1),
            group("first_name_ST", "John", 2),
            group("country_of_citizenship_MC", "ca", 2),
        ],
    };
    let record = map_questionnaire(&data);

    let first = &record.owners[0];
    assert_eq!(first.owner_email_address.as_deref(), Some("jane@example.com"));
    assert_eq!(first.owner_phone_number.as_deref(), Some("+15551234567"));
    assert_eq!(first.owner_address.owner_state.as_deref(), Some("TX"));
    assert_eq!(
        first.owner_address.owner_country.as_deref(),
        Some("United States")
    );

    let second = &record.owners[1];
    assert_eq!(
        second.individual_owner.as_ref().unwrap().first_name.as_deref(),
        Some("John")
    );
    assert_eq!(
        second
            .individual_owner
            .as_ref()
            .unwrap()
            .citizenship_country
            .as_deref(),
        Some("Canada")
    );
}

#[test]
fn test_joint_alternate_name_applies_to_first_owner_only() {
    let data = QuestionnaireAnswers {
        field_answers: vec![
            field("applicant_type_MC", "Joint Individuals"),
            field("DBA_AKA_TA_FKA_Choice_MC", "DBA (doing business as)"),
            field("DBA_AKA_TA_FKA_Value_ST", "Acme Partners"),
        ],
        group_answers: Vec::new(),
    };
    let record = map_questionnaire(&data);

    assert_eq!(record.owners[0].dba_type.as_deref(), Some("dba"));
    assert_eq!(record.owners[0].alternate_name.as_deref(), Some("Acme Partners"));
    assert_eq!(record.owners[1].dba_type, None);
    assert_eq!(record.owners[1].alternate_name, None);
}

#[test]
fn test_juristic_owner_from_corporation() {
    let data = QuestionnaireAnswers {
        field_answers: vec![
            field("applicant_type_MC", "Corporation"),
            field("Name_of_Applicant", "Acme Inc."),
            field("State", "Delaware"),
        ],
        group_answers: Vec::new(),
    };
    let record = map_questionnaire(&data);

    assert_eq!(record.owners.len(), 1);
    let owner = &record.owners[0];
    assert_eq!(owner.owner_selection.owner_type, "juristic");
    assert!(owner.individual_owner.is_none());
    let juristic = owner.owner.as_ref().unwrap();
    assert_eq!(juristic.corporation_name.as_deref(), Some("Acme Inc."));
    assert_eq!(juristic.incorporation_state.as_deref(), Some("DE"));
}

#[test]
fn test_unrecognized_applicant_type_falls_back_to_free_form() {
    let data = QuestionnaireAnswers {
        field_answers: vec![field("applicant_type_MC", "Collective Membership Org")],
        group_answers: Vec::new(),
    };
    let record = map_questionnaire(&data);

    let selection = &record.owners[0].owner_selection;
    assert_eq!(selection.entity_type, None);
    assert_eq!(
        selection.foreign_entity_type_free_form.as_deref(),
        Some("Collective Membership Org")
    );
    assert_eq!(
        selection.entity_type_other.as_deref(),
        Some("Collective Membership Org")
    );
}

#[test]
fn test_domicile_omitted_when_identical_to_owner_address() {
    let data = QuestionnaireAnswers {
        field_answers: vec![
            field("applicant_type_MC", "Individual"),
            field("street_address", "1 Main St"),
            field("City", "Springfield"),
            field("domicile_street_address_ST", "1 Main St"),
            field("domicile_city_ST", "Springfield"),
        ],
        group_answers: Vec::new(),
    };
    let record = map_questionnaire(&data);
    assert!(record.owners[0].domicile_address.is_none());
    assert!(record.owners[0].different_domicile.is_none());
}

#[test]
fn test_domicile_included_when_any_field_differs() {
    let data = QuestionnaireAnswers {
        field_answers: vec![
            field("applicant_type_MC", "Individual"),
            field("street_address", "1 Main St"),
            field("domicile_street_address_ST", "2 Oak Ave"),
            field("domicile_state_ST", "Ohio"),
        ],
        group_answers: Vec::new(),
    };
    let record = map_questionnaire(&data);

    let owner = &record.owners[0];
    assert_eq!(owner.different_domicile.as_deref(), Some("yes"));
    let domicile = owner.domicile_address.as_ref().unwrap();
    assert_eq!(domicile.domicile_address_line1.as_deref(), Some("2 Oak Ave"));
    assert_eq!(domicile.domicile_state.as_deref(), Some("OH"));
}
