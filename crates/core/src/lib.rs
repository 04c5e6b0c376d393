// Core types and store access for the Hyperfocus states catalog

pub mod error;
pub mod lookup;
pub mod store;
pub mod types;

pub use types::*;
