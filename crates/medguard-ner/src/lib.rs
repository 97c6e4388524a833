//! medguard-ner
//!
//! Residual-PHI scanning: an independent entity tagger re-reads the
//! redacted note and anything on the watch-list is reported back.

pub mod error;
pub mod scanner;
pub mod tagger;
