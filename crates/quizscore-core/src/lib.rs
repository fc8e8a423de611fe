//! quizscore-core: weight assignment and aggregate scoring for quiz answers.
//!
//! This crate defines the answer data model, the pure scoring functions, and
//! the copy-on-write answer store that hosts drive with submit and toggle
//! events.

pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod scoring;
pub mod store;
pub mod weights;
