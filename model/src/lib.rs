//! Target-independent pieces of the Spline scene embed: responsive geometry,
//! branding heuristics, sweep scheduling, load state and configuration.

pub mod branding;
pub mod config;
pub mod geometry;
pub mod load;
pub mod sweep;

pub use branding::{BrandingRules, HideStyle, TEXT_SELECTOR, candidate_text};
pub use config::{ConfigError, SceneConfig, container_class};
pub use geometry::{ResponsiveProfile, ViewportGeometry};
pub use load::LoadPhase;
pub use sweep::{SweepReport, SweepSchedule};
