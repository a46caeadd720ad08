pub mod alert;
pub mod app;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod tui;
pub mod wizard;

pub use error::{AlertaError, Result};
