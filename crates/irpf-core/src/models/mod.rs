//! Data models and configuration.

pub mod config;
pub mod declaration;
pub mod reference;
