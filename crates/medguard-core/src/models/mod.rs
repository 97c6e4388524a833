pub mod deidentify;
pub mod replacement;
pub mod validation;
