pub mod audit;
pub mod record_store;
