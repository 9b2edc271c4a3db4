//! Configuration types for attack tree evaluation.
//!
//! - Resource bounds for path enumeration (EngineConfig)

mod engine;

pub use self::engine::EngineConfig;
