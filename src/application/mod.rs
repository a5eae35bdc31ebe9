//! Application layer - ports and the wizard services

pub mod ports;
pub mod services;
