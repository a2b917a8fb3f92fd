//! Tests for the derived review documents.
//!
//! The note tree and the flowed report are read side by side, so the central
//! property checked here is that both render the same outline in the same
//! order.

use trademark_mapper::answers::{FieldAnswer, FieldLookup};
use trademark_mapper::note::lexical::Node;
use trademark_mapper::note::report::ReportBlock;
use trademark_mapper::{
    MIGRATED_FROM_PROOFER_TEXT, build_internal_note, build_outline, build_report, report_filename,
};

fn lookup(pairs: &[(&str, &str)]) -> FieldLookup {
    let answers: Vec<FieldAnswer> = pairs
        .iter()
        .map(|&(name, value)| FieldAnswer {
            field_name: name.to_string(),
            field_value: Some(value.to_string()),
        })
        .collect();
    FieldLookup::from_answers(&answers)
}

#[test]
fn test_divider_artifacts_never_reach_the_documents() {
    let outline = build_outline(&lookup(&[(
        "applicant_information_internal_note_LT",
        "Line1\n==========\nLine2",
    )]));
    assert_eq!(outline.sections[0].fields[0].lines, ["Line1", "Line2"]);

    let note_json = serde_json::to_string(&build_internal_note(&outline)).unwrap();
    assert!(!note_json.contains("=========="));
    let report_json = serde_json::to_string(&build_report(&outline)).unwrap();
    assert!(!report_json.contains('='));
}

#[test]
fn test_carriage_returns_normalized() {
    let outline = build_outline(&lookup(&[(
        "applicant_information_internal_note_LT",
        "a\r\nb\rc",
    )]));
    assert_eq!(outline.sections[0].fields[0].lines, ["a", "b", "c"]);
}

#[test]
fn test_note_and_report_mirror_the_same_outline() {
    let outline = build_outline(&lookup(&[
        ("Contact_Name", "Jane Doe"),
        ("form_type_MC", "TEAS Plus"),
        ("foreign_application_MC", "Yes"),
    ]));
    let note = build_internal_note(&outline);
    let report = build_report(&outline);

    // Headings in the note, in document order.
    let note_headings: Vec<String> = note
        .root
        .children
        .iter()
        .skip(2)
        .step_by(3)
        .map(|child| {
            let Node::Element(paragraph) = child else {
                panic!("heading paragraph expected");
            };
            let Node::Text(text) = &paragraph.children[0] else {
                panic!("heading text expected");
            };
            text.text.clone()
        })
        .collect();

    let report_headings: Vec<String> = report
        .blocks
        .iter()
        .filter_map(|block| match block {
            ReportBlock::Heading { text } => Some(text.clone()),
            _ => None,
        })
        .collect();

    assert_eq!(note_headings, report_headings);
    assert_eq!(note_headings.len(), 16);
}

#[test]
fn test_note_title_and_duplicate_check_marker() {
    let outline = build_outline(&lookup(&[]));
    let json = serde_json::to_value(build_internal_note(&outline)).unwrap();
    assert_eq!(
        json["root"]["children"][0]["children"][0]["text"],
        MIGRATED_FROM_PROOFER_TEXT
    );
    // Bold title, empty spacer paragraph.
    assert_eq!(json["root"]["children"][0]["children"][0]["format"], 1);
    assert_eq!(
        json["root"]["children"][1]["children"]
            .as_array()
            .unwrap()
            .len(),
        0
    );
}

#[test]
fn test_report_filename() {
    assert_eq!(report_filename("515612547"), "515612547_Proofer data.pdf");
}
