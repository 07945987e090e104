pub mod branch;
pub mod log;
pub mod repository;
