//! Image element payload.

use serde::{Deserialize, Serialize};

/// A raster image shown through the element's box, which acts as a crop frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContent {
    /// Image source (URL or blob reference), resolved by the host.
    #[serde(default)]
    pub src: String,
    /// Scale of the image inside the box (1 = cover).
    #[serde(default = "default_image_scale")]
    pub image_scale: f64,
    /// Horizontal offset of the image inside the box.
    #[serde(default)]
    pub image_x: f64,
    /// Vertical offset of the image inside the box.
    #[serde(default)]
    pub image_y: f64,
}

fn default_image_scale() -> f64 {
    1.0
}

impl Default for ImageContent {
    fn default() -> Self {
        Self {
            src: String::new(),
            image_scale: default_image_scale(),
            image_x: 0.0,
            image_y: 0.0,
        }
    }
}

impl ImageContent {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Self::default()
        }
    }
}
