pub mod audit;
pub mod stores;
