//! Outbound ports - interfaces the wizard requires from external systems

mod catalog_port;
mod prompt_port;

pub use catalog_port::{CatalogError, CatalogPort};
pub use prompt_port::Prompt;

#[cfg(test)]
pub use prompt_port::ScriptedPrompt;
