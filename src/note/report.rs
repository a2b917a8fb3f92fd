//! Flowed report serializer.
//!
//! The archival renderer consumes a linear block sequence and handles
//! pagination itself. The block order mirrors the note tree exactly so
//! operators can read the two documents side by side.

use serde::Serialize;

use super::NoteOutline;
use crate::note::lexical::MIGRATED_FROM_PROOFER_TEXT;

/// One block of the flowed document.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ReportBlock {
    /// Document title, rendered large and bold.
    Title { text: String },
    /// Section heading, rendered bold.
    Heading { text: String },
    /// Bold label line followed by the value lines; an unlabeled field
    /// renders its lines only.
    #[serde(rename_all = "camelCase")]
    Field {
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        lines: Vec<String>,
    },
    /// Horizontal rule between sections.
    Divider,
}

/// The complete report document, ready for the external renderer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReportDocument {
    pub blocks: Vec<ReportBlock>,
}

/// Serializes the outline into the flowed block sequence.
#[must_use]
pub fn build_report(outline: &NoteOutline) -> ReportDocument {
    let mut blocks = vec![ReportBlock::Title {
        text: MIGRATED_FROM_PROOFER_TEXT.to_string(),
    }];

    for section in &outline.sections {
        blocks.push(ReportBlock::Heading {
            text: section.heading.to_string(),
        });
        for field in &section.fields {
            blocks.push(ReportBlock::Field {
                label: field.label.map(str::to_string),
                lines: field.lines.clone(),
            });
        }
        blocks.push(ReportBlock::Divider);
    }

    ReportDocument { blocks }
}

/// Attachment filename for an uploaded report.
#[must_use]
pub fn report_filename(processing_order_id: &str) -> String {
    format!("{processing_order_id}_Proofer data.pdf")
}
