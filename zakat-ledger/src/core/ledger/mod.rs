pub mod account;
pub mod genesis;
pub mod transaction_engine;

pub use account::{Accounts, DEFAULT_COLLECTION_ACCOUNT};
pub use transaction_engine::fees::{LevyHandler, LEVY_RATE, LEVY_SCALE};
