pub mod classifier;
pub mod config;
pub mod errors;
pub mod favorites;
pub mod ingestor;
pub mod models;
pub mod pipeline;
pub mod proxy;
