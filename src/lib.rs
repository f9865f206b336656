//! Core library for `portstat`: runs the external counting tools and
//! assembles the one-line summary record the binary prints.

pub mod error;
pub mod exit;
pub mod report;
pub mod tools;
