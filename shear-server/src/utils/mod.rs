//! Utility module - common helpers and types
//!
//! - [`AppError`] / [`AppResult`] - application error type and alias
//! - [`logger`] - tracing setup
//! - [`validation`] - id parsing and text limits

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::{AppError, AppResponse, ok};
pub use result::AppResult;
pub use validation::parse_record_id;
