pub mod estimate;
pub mod validate;
