//! Maps signatory title names to their standardized position labels.

use super::LookupTable;

/// Recognized signatory titles.
pub static SIGNATORY_TITLES: LookupTable = LookupTable::new(&[
    ("attorney of record", "Attorney of Record"),
    ("ceo", "CEO"),
    ("cfo", "CFO"),
    ("coo", "COO"),
    ("co-owner", "Co-Owner"),
    ("director", "Director"),
    ("founder", "Founder"),
    ("manager", "Manager"),
    ("managing partner", "Managing Partner"),
    ("member", "Member"),
    ("officer", "Officer"),
    ("owner", "Owner"),
    ("partner", "Partner"),
    ("president", "President"),
    ("principal", "Principal"),
    ("secretary", "Secretary"),
    ("treasurer", "Treasurer"),
    ("vice president", "Vice President"),
    ("other", "Other"),
]);
