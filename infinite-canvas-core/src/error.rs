use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("min_zoom must be a positive finite number, got {0}")]
    InvalidMinZoom(f64),

    #[error("max_zoom must be a finite number, got {0}")]
    InvalidMaxZoom(f64),

    #[error("max_zoom ({max}) is smaller than min_zoom ({min})")]
    InvertedZoomBounds { min: f64, max: f64 },

    #[error("scroll bar min_size must not be negative, got {0}")]
    NegativeThumbSize(f64),

    #[error("background gap must be positive, got {0}")]
    InvalidBackgroundGap(f64),

    #[error("background min_opacity ({min}) is greater than max_opacity ({max})")]
    InvertedOpacity { min: f64, max: f64 },

    #[error("invalid canvas config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
