pub mod number_utils;
pub mod serde_utils;
