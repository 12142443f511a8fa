//! Configuration model for lockgc.
//!
//! This module defines the Config struct that represents `lockgc.yaml`.
//! The file is optional. Parsing is forward-compatible (unknown fields are
//! ignored), optional fields have defaults, and values are validated on load.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::LogFormat;
