pub mod config;
pub mod display;
pub mod git;
pub mod render;
pub mod shell_exec;
pub mod styling;
pub mod utils;
