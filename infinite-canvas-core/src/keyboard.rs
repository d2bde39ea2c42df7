use crate::transform::ZoomBounds;

/// Scale step for keyboard zoom in/out.
pub const ZOOM_STEP: f64 = 0.5;
/// Keyboard zoom animation length.
pub const ZOOM_ANIMATION_MS: f64 = 500.0;

/// Discrete zoom command, from a shortcut or a zoom control
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomAction {
    ZoomIn,
    ZoomOut,
    FitToView,
    ResetToHundred,
}

impl ZoomAction {
    /// Scale to animate to, or `None` for fit-to-view which needs measurement.
    pub fn target_scale(self, current: f64, bounds: &ZoomBounds) -> Option<f64> {
        match self {
            ZoomAction::ZoomIn => Some(bounds.clamp(current + ZOOM_STEP)),
            ZoomAction::ZoomOut => Some(bounds.clamp(current - ZOOM_STEP)),
            ZoomAction::ResetToHundred => Some(bounds.clamp(1.0)),
            ZoomAction::FitToView => None,
        }
    }
}

/// Map a `KeyboardEvent.key` value to an action. Shortcuts require ctrl or cmd.
pub fn shortcut_for_key(key: &str, modifier: bool) -> Option<ZoomAction> {
    if !modifier {
        return None;
    }
    match key {
        "=" | "+" => Some(ZoomAction::ZoomIn),
        "-" | "_" => Some(ZoomAction::ZoomOut),
        "0" => Some(ZoomAction::FitToView),
        "1" => Some(ZoomAction::ResetToHundred),
        _ => None,
    }
}
