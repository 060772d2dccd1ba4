pub mod config;
pub mod error;
pub mod llm;
pub mod logic;
pub mod server;

pub use error::{Error, Result};
