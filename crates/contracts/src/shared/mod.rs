pub mod chatbot;
pub mod serde_date;
