use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{branding::BrandingRules, geometry::ResponsiveProfile, sweep::SweepSchedule};

pub const DEFAULT_SCENE: &str = "https://prod.spline.design/6Wq1Q7YGyM-iab9i/scene.splinecode";
pub const DEFAULT_VIEWER_SCRIPT: &str = "https://unpkg.com/@splinetool/viewer@1.9.82/build/spline-viewer.js";
pub const DEFAULT_LOAD_EVENT: &str = "load-complete";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid scene config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything needed to embed one scene.
///
/// Fields missing from a JSON document keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Scene URL handed to the viewer. Opaque to this crate.
    pub scene: String,
    /// Extra class appended to the root container.
    pub class: String,
    /// Module script defining the `<spline-viewer>` element.
    pub viewer_script: String,
    /// Event the viewer dispatches once the scene is ready.
    pub load_event: String,
    pub branding: BrandingRules,
    pub sweep: SweepSchedule,
    pub profile: ResponsiveProfile,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            scene: DEFAULT_SCENE.to_string(),
            class: String::new(),
            viewer_script: DEFAULT_VIEWER_SCRIPT.to_string(),
            load_event: DEFAULT_LOAD_EVENT.to_string(),
            branding: BrandingRules::default(),
            sweep: SweepSchedule::default(),
            profile: ResponsiveProfile::default(),
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply per-page overrides (e.g. from URL query parameters). Empty values are ignored.
    pub fn with_overrides(mut self, scene: Option<String>, class: Option<String>) -> Self {
        if let Some(scene) = scene.filter(|s| !s.trim().is_empty()) {
            self.scene = scene;
        }
        if let Some(class) = class.filter(|c| !c.trim().is_empty()) {
            self.class = class;
        }
        self
    }
}

/// Class attribute for the root container, with the caller's class appended.
pub fn container_class(extra: &str) -> String {
    let base = "splineScene";
    let extra = extra.trim();
    if extra.is_empty() { base.to_string() } else { format!("{} {}", base, extra) }
}
