#[cfg(feature = "python")]
pub mod numpy_utils;
pub mod validation;
