//! Bureaucracy Buster Core Library
//!
//! Domain model, document analysis pipeline and the client view-state
//! machine for the Bureaucracy Buster document simplifier.

pub mod analysis;
pub mod config;
pub mod error;
pub mod image;
pub mod ui;

pub use analysis::model::AnalysisResult;
pub use error::{BusterError, BusterResult};
