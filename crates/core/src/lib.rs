#![forbid(unsafe_code)]

pub mod error;
pub mod matcher;
pub mod model;
pub mod scoring;
pub mod tags;

pub use error::ConfigError;
pub use tags::TagAllocator;
