//! # Performance Classifier
//!
//! Maps exam scores to performance levels and hands the result UI a
//! declarative celebration bundle (visuals, colors, effects, sound and
//! haptic directives, message pools).
//!
//! - **Classifier**: percentage → [`PerformanceLevel`] via named thresholds
//! - **Configs**: static table of four [`CelebrationConfig`]s, one per level
//! - **Adaptation**: context rules that tweak a fresh config before display

pub mod adaptive;
pub mod classifier;
pub mod config;

pub use adaptive::*;
pub use classifier::*;
pub use config::*;

pub use ff_core::PerformanceLevel;
