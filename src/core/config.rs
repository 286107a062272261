use super::constants::{DEFAULT_REPORT_URL, DEFAULT_TEXTURE_BASE};
use super::face::FaceValue;

/// Runtime settings, taken from `data-*` attributes on the host page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub report_url: String,
    pub texture_base: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            report_url: DEFAULT_REPORT_URL.to_string(),
            texture_base: DEFAULT_TEXTURE_BASE.to_string(),
        }
    }
}

impl GameConfig {
    /// Missing or blank attributes fall back to the defaults.
    pub fn from_attrs(report_url: Option<String>, texture_base: Option<String>) -> Self {
        let pick = |v: Option<String>, default: &str| {
            v.map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            report_url: pick(report_url, DEFAULT_REPORT_URL),
            texture_base: pick(texture_base, DEFAULT_TEXTURE_BASE),
        }
    }

    pub fn face_texture_url(&self, face: FaceValue) -> String {
        format!("{}/dice{}.png", self.texture_base.trim_end_matches('/'), face)
    }
}
