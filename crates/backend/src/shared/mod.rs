pub mod analytics;
pub mod chatbot;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod format;
