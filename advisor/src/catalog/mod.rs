//! Read-only reference data: career labels and degree programs.

pub mod classes;
pub mod programs;

pub use classes::{class_label, CLASS_CATALOG, CLASS_COUNT};
pub use programs::{programs_for, ProgramList};
