pub mod config;
pub mod manifest;
pub mod report;
pub mod runner;
pub mod version;
