//! charforge - Interactive D&D 5e character creation
//!
//! The crate is split hexagonally:
//! - `domain`: catalog records and the character draft, no I/O
//! - `application`: ports (catalog, prompt) and the wizard services
//! - `infrastructure`: reqwest catalog client, axum proxy, console I/O, config

pub mod application;
pub mod domain;
pub mod infrastructure;
