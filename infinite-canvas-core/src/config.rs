//! Host-facing configuration. Every field has a default so partial JSON works.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::Offset;
use crate::transform::{ZoomBounds, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollBarConfig {
    pub starting_position: Option<Offset>,
    pub offset: Offset,
    pub color: String,
    /// Track thickness in pixels
    pub thickness: f64,
    pub min_size: f64,
}

impl Default for ScrollBarConfig {
    fn default() -> Self {
        Self {
            starting_position: None,
            offset: Offset::default(),
            color: "gray".to_string(),
            thickness: 8.0,
            min_size: 15.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// SVG pattern id; must be unique when several canvases share a page.
    pub id: String,
    pub size: f64,
    pub min_size: f64,
    pub gap: f64,
    pub min_opacity: f64,
    pub max_opacity: f64,
    pub element_color: String,
    /// Scale at which dots reach full opacity; the canvas max zoom when unset.
    pub max_zoom: Option<f64>,
    pub disable: bool,
    pub background_color: Option<String>,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            size: 1.0,
            min_size: 0.3,
            gap: 20.0,
            min_opacity: 0.8,
            max_opacity: 1.0,
            element_color: "#afb7c7".to_string(),
            max_zoom: None,
            disable: false,
            background_color: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub pan_on_scroll: bool,
    pub render_scroll_bar: bool,
    pub scroll_bar: ScrollBarConfig,
    pub background: BackgroundConfig,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            pan_on_scroll: true,
            render_scroll_bar: true,
            scroll_bar: ScrollBarConfig::default(),
            background: BackgroundConfig::default(),
        }
    }
}

impl CanvasConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if !self.min_zoom.is_finite() || self.min_zoom <= 0.0 {
            return Err(ConfigError::InvalidMinZoom(self.min_zoom));
        }
        if !self.max_zoom.is_finite() {
            return Err(ConfigError::InvalidMaxZoom(self.max_zoom));
        }
        if self.max_zoom < self.min_zoom {
            return Err(ConfigError::InvertedZoomBounds {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if self.scroll_bar.min_size < 0.0 {
            return Err(ConfigError::NegativeThumbSize(self.scroll_bar.min_size));
        }
        if !self.background.gap.is_finite() || self.background.gap <= 0.0 {
            return Err(ConfigError::InvalidBackgroundGap(self.background.gap));
        }
        if self.background.min_opacity > self.background.max_opacity {
            return Err(ConfigError::InvertedOpacity {
                min: self.background.min_opacity,
                max: self.background.max_opacity,
            });
        }
        Ok(self)
    }

    pub fn zoom_bounds(&self) -> ZoomBounds {
        ZoomBounds::new(self.min_zoom, self.max_zoom)
    }

    /// Scale at which the dot grid reaches full opacity.
    pub fn background_max_zoom(&self) -> f64 {
        self.background.max_zoom.unwrap_or(self.max_zoom)
    }
}
