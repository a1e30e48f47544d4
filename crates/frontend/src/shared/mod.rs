pub mod config;
pub mod date_utils;
pub mod http;
pub mod icons;
pub mod list_utils;
