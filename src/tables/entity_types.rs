//! Maps applicant-type phrasings to entity-type ids.

use super::LookupTable;

/// Recognized applicant entity types. An unrecognized applicant type is not
/// an error: the owner builder carries the raw phrase through as a free-form
/// "other" entity type.
pub static ENTITY_TYPES: LookupTable = LookupTable::new(&[
    ("individual", "individual"),
    ("joint individuals", "joint_individuals"),
    ("sole proprietor", "sole_proprietorship"),
    ("sole proprietorship", "sole_proprietorship"),
    ("corporation", "corporation"),
    ("s corporation", "corporation"),
    ("limited liability company", "limited_liability_company"),
    ("llc", "limited_liability_company"),
    ("limited liability corporation", "limited_liability_company"),
    ("partnership", "partnership"),
    ("general partnership", "partnership"),
    ("limited partnership", "limited_partnership"),
    ("limited liability partnership", "limited_liability_partnership"),
    ("joint venture", "joint_venture"),
    ("trust", "trust"),
    ("estate", "estate"),
    ("non-profit corporation", "non_profit_corporation"),
    ("nonprofit corporation", "non_profit_corporation"),
    ("limited company", "limited_company"),
]);
