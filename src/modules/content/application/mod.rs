pub mod catalog;
pub mod manager;
pub mod ports;
pub mod use_cases;
