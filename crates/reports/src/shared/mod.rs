pub mod config;
pub mod export;
pub mod loader;
pub mod logger;
