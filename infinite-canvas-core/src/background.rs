use crate::config::BackgroundConfig;
use crate::geometry::clamp_value;
use crate::transform::ViewportTransform;

/// Resolved dot-grid parameters for one transform
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundPattern {
    pub pattern_id: String,
    pub x: f64,
    pub y: f64,
    /// Pattern tile edge (scaled gap)
    pub gap: f64,
    /// Scaled dot size, used to centre the tile on the dot
    pub dot_size: f64,
    pub radius: f64,
    pub opacity: f64,
    pub color: String,
    pub background_color: Option<String>,
}

impl BackgroundPattern {
    /// `None` when the background is disabled.
    pub fn compute(
        config: &BackgroundConfig,
        transform: &ViewportTransform,
        max_zoom: f64,
    ) -> Option<Self> {
        if config.disable {
            return None;
        }

        let scale = transform.scale;
        let gap = config.gap * scale;
        let dot_size = config.size * scale;

        Some(Self {
            pattern_id: format!("pattern-{}", config.id),
            x: transform.translate_x % gap,
            y: transform.translate_y % gap,
            gap,
            dot_size,
            radius: config.min_size.max(dot_size),
            opacity: clamp_value(scale / max_zoom, config.min_opacity, config.max_opacity),
            color: config.element_color.clone(),
            background_color: config.background_color.clone(),
        })
    }

    pub fn pattern_transform(&self) -> String {
        format!("translate(-{},-{})", self.dot_size, self.dot_size)
    }

    pub fn fill(&self) -> String {
        format!("url(#{})", self.pattern_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_background_has_no_pattern() {
        let config = BackgroundConfig {
            disable: true,
            ..BackgroundConfig::default()
        };
        assert!(BackgroundPattern::compute(&config, &ViewportTransform::identity(), 4.0).is_none());
    }

    #[test]
    fn pattern_scales_with_zoom() {
        let t = ViewportTransform::new(45.0, -10.0, 2.0);
        let p = BackgroundPattern::compute(&BackgroundConfig::default(), &t, 4.0).unwrap();
        assert_eq!(p.gap, 40.0);
        assert_eq!(p.dot_size, 2.0);
        assert_eq!(p.radius, 2.0);
        assert_eq!(p.x, 5.0);
        assert_eq!(p.y, -10.0);
        assert_eq!(p.opacity, 0.8);
    }

    #[test]
    fn radius_has_a_floor() {
        let t = ViewportTransform::new(0.0, 0.0, 0.1);
        let p = BackgroundPattern::compute(&BackgroundConfig::default(), &t, 4.0).unwrap();
        assert_eq!(p.radius, 0.3);
    }

    #[test]
    fn opacity_reaches_max_at_max_zoom() {
        let t = ViewportTransform::new(0.0, 0.0, 4.0);
        let p = BackgroundPattern::compute(&BackgroundConfig::default(), &t, 4.0).unwrap();
        assert_eq!(p.opacity, 1.0);
    }

    #[test]
    fn pattern_id_and_fill_use_config_id() {
        let config = BackgroundConfig {
            id: "main".to_string(),
            ..BackgroundConfig::default()
        };
        let p = BackgroundPattern::compute(&config, &ViewportTransform::identity(), 4.0).unwrap();
        assert_eq!(p.fill(), "url(#pattern-main)");
        assert_eq!(p.pattern_transform(), "translate(-1,-1)");
    }
}
