pub mod api;
pub mod assistant;
pub mod client;
pub mod config;
pub mod data_models;
pub mod error;
pub mod fetcher;
pub mod search;
pub mod synthesizer;
