//! Domain layer - Core types with no I/O dependencies
//!
//! This layer contains:
//! - Catalog entities: race and class records as served by the catalog
//! - The character draft assembled over one wizard session

pub mod entities;
