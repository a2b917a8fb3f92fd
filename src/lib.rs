//! A Rust library for transforming flat questionnaire answer sets into the
//! nested trademark record consumed by the downstream IP service, with
//! lookup-table normalization and derived review documents.
//!
//! The engine is a pure, single-pass computation over in-memory inputs:
//! same answers in, same record out. All I/O belongs to external callers.

pub mod answers;
pub mod error;
pub mod format;
pub mod mapping;
pub mod note;
pub mod record;
pub mod tables;

// Re-export the most common types for easier use
// Core types
pub use answers::{FieldAnswer, FieldLookup, GroupAnswer, GroupLookup, QuestionnaireAnswers};
pub use error::{MapperError, Result};
pub use record::TrademarkRecord;

// Mapping entry points
pub use mapping::{map_questionnaire, map_questionnaire_value};

// Derived-content builders
pub use note::lexical::{InternalNote, MIGRATED_FROM_PROOFER_TEXT, build_internal_note};
pub use note::report::{ReportDocument, build_report, report_filename};
pub use note::{NoteOutline, build_outline};
