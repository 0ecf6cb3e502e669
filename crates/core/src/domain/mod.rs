pub mod asset;
pub mod booking;
pub mod catalog;
pub mod store;
