pub mod censored;
pub mod comparable;
pub mod error;
