//! Maps a questionnaire answer file to the trademark record shape.
//!
//! Reads a JSON document matching the answer contract and prints the mapped
//! record. `--note` and `--report` print the derived review documents
//! instead.

use std::fs;

use anyhow::{Context, Result, bail};
use trademark_mapper::answers::FieldLookup;
use trademark_mapper::{
    QuestionnaireAnswers, build_internal_note, build_outline, build_report, map_questionnaire,
};

fn main() -> Result<()> {
    env_logger::init();

    let mut output = Output::Record;
    let mut input: Option<String> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--note" => output = Output::Note,
            "--report" => output = Output::Report,
            _ if input.is_none() => input = Some(arg),
            _ => bail!("unexpected argument: {arg}"),
        }
    }
    let Some(input) = input else {
        bail!("usage: map_questionnaire [--note|--report] <answers.json>");
    };

    let raw = fs::read_to_string(&input).with_context(|| format!("reading {input}"))?;
    let data: QuestionnaireAnswers =
        serde_json::from_str(&raw).with_context(|| format!("decoding {input}"))?;

    let json = match output {
        Output::Record => serde_json::to_string_pretty(&map_questionnaire(&data))?,
        Output::Note => {
            let fields = FieldLookup::from_answers(&data.field_answers);
            serde_json::to_string_pretty(&build_internal_note(&build_outline(&fields)))?
        }
        Output::Report => {
            let fields = FieldLookup::from_answers(&data.field_answers);
            serde_json::to_string_pretty(&build_report(&build_outline(&fields)))?
        }
    };
    println!("{json}");

    Ok(())
}

enum Output {
    Record,
    Note,
    Report,
}
