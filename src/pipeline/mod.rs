//! Staged summarization pipeline
//!
//! - [`spec`]: serializable configuration
//! - [`validation`]: rule-based spec checking
//! - [`observer`]: stage and artifact hooks
//! - [`runner`]: stage execution

pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod validation;
