//! Wizard services - the selection, allocation, and rolling engines
//! plus the session pipeline that sequences them

pub mod ability_service;
pub mod allocation_service;
pub mod choice_service;
pub mod session_service;

pub use session_service::SessionRunner;
