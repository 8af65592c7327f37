//! Foundation CNV: extracts copy-number alterations from FoundationOne XML
//! reports into flat CNV CSV resources.

pub mod error;

pub mod classify;
pub mod cli;
pub mod diagnostics;
pub mod extract;
pub mod report;
pub mod sample;
pub mod writer;
