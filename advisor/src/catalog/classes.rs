//! Career labels in classifier output order.
//!
//! Position `i` names output `i` of the trained model. Reordering this list
//! without retraining silently mislabels every prediction.

pub const CLASS_COUNT: usize = 17;

pub const CLASS_CATALOG: [&str; CLASS_COUNT] = [
    "Lawyer",
    "Doctor",
    "Government Officer",
    "Artist",
    "Unknown",
    "Software Engineer",
    "Teacher",
    "Business Owner",
    "Scientist",
    "Banker",
    "Writer",
    "Accountant",
    "Designer",
    "Construction Engineer",
    "Game Developer",
    "Stock Investor",
    "Real Estate Developer",
];

/// Label for a classifier output position.
pub fn class_label(index: usize) -> Option<&'static str> {
    CLASS_CATALOG.get(index).copied()
}
