//! medguard-llm
//!
//! Completion-model side of the pipeline: prompt rendering, the completion
//! service client, and recovery of structured output from model text.

pub mod client;
pub mod detect;
pub mod error;
pub mod prompt;
pub mod recover;
