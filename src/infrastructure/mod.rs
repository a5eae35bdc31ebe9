//! Infrastructure layer - adapters for the outside world
//!
//! - `catalog_client`: reqwest adapter for the catalog proxy
//! - `config`: environment-based configuration
//! - `console`: terminal rendering and the stdin prompt
//! - `http`: the catalog proxy service itself

pub mod catalog_client;
pub mod config;
pub mod console;
pub mod http;
