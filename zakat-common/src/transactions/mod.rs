pub mod types;
pub mod validation;

pub use types::{Amount, TransferRecord};
pub use validation::TransferValidator;
