pub mod batch;
pub mod chain;
pub mod ledger;
