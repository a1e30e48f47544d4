//! HTTP client wrapper shared by all API modules.

mod client;
mod error;

pub use client::{HttpClient, HttpMethod};
pub use error::ApiError;
