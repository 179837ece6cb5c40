//! Assistant relay powered by the Gemini API

pub mod assistant;
pub mod client;
pub mod decode;
pub mod prompt;
pub mod schema;

pub use client::GeminiClient;
