pub mod deidentify;
pub mod health;
