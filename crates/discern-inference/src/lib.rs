//! discern-inference
//!
//! The heuristic inference pipeline: scale scores and rule judgments feed
//! bounded per-condition likelihoods, a categorical pattern, recommendations,
//! and a structured narrative. Deterministic and side-effect-free apart from
//! tracing events.

pub mod config;
pub mod engine;
pub mod error;
pub mod likelihood;
pub mod narrative;
pub mod pattern;
pub mod recommend;
pub mod rules;

pub use config::{EngineConfig, PatternThresholds};
pub use engine::{DISCLAIMER, Engine};
pub use error::ConfigError;
