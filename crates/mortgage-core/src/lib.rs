pub mod amortization;
pub mod error;
pub mod summary;
pub mod types;
pub mod validate;

pub use error::MortgageError;
pub use types::*;

/// Standard result type for all mortgage-core operations
pub type MortgageResult<T> = Result<T, MortgageError>;
