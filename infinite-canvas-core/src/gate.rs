//! Opt-out policy for host content inside the canvas.
//!
//! Host markup tags a subtree with one of the marker classes below; the UI layer
//! resolves an event target's ancestry into [`GateFlags`] and the gesture controller
//! asks these predicates before touching the transform.

pub const BLOCK_EVENTS_CLASS: &str = "infinite-canvas-block-events";
pub const BLOCK_SCROLL_CLASS: &str = "infinite-canvas-block-scroll";
pub const BLOCK_ZOOM_CLASS: &str = "infinite-canvas-block-zoom";
pub const BLOCK_PAN_CLASS: &str = "infinite-canvas-block-pan";

/// Which marker classes an event target is nested inside
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GateFlags {
    pub block_events: bool,
    pub block_scroll: bool,
    pub block_zoom: bool,
    pub block_pan: bool,
}

impl GateFlags {
    /// Build flags from a predicate answering "is the target inside `.class`?".
    pub fn from_lookup(mut is_inside: impl FnMut(&str) -> bool) -> Self {
        Self {
            block_events: is_inside(BLOCK_EVENTS_CLASS),
            block_scroll: is_inside(BLOCK_SCROLL_CLASS),
            block_zoom: is_inside(BLOCK_ZOOM_CLASS),
            block_pan: is_inside(BLOCK_PAN_CLASS),
        }
    }

    pub fn should_block_pan(&self) -> bool {
        self.block_pan || self.block_events
    }

    pub fn should_block_zoom(&self) -> bool {
        self.block_zoom || self.block_events
    }

    pub fn should_block_wheel(&self, is_modifier_pressed: bool) -> bool {
        if is_modifier_pressed {
            self.should_block_zoom()
        } else {
            self.block_scroll || self.block_events
        }
    }
}

/// Class list for a wrapper that opts its children out of the given gestures.
pub fn block_class_name(block_scroll: bool, block_zoom: bool, block_pan: bool) -> String {
    if block_scroll && block_zoom && block_pan {
        return BLOCK_EVENTS_CLASS.to_string();
    }

    [
        (block_scroll, BLOCK_SCROLL_CLASS),
        (block_zoom, BLOCK_ZOOM_CLASS),
        (block_pan, BLOCK_PAN_CLASS),
    ]
    .iter()
    .filter(|(enabled, _)| *enabled)
    .map(|(_, class)| *class)
    .collect::<Vec<_>>()
    .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(events: bool, scroll: bool, zoom: bool, pan: bool) -> GateFlags {
        GateFlags {
            block_events: events,
            block_scroll: scroll,
            block_zoom: zoom,
            block_pan: pan,
        }
    }

    #[test]
    fn untagged_target_blocks_nothing() {
        let f = GateFlags::default();
        assert!(!f.should_block_pan());
        assert!(!f.should_block_wheel(false));
        assert!(!f.should_block_wheel(true));
        assert!(!f.should_block_zoom());
    }

    #[test]
    fn block_events_blocks_everything() {
        let f = flags(true, false, false, false);
        assert!(f.should_block_pan());
        assert!(f.should_block_zoom());
        assert!(f.should_block_wheel(false));
        assert!(f.should_block_wheel(true));
    }

    #[test]
    fn block_scroll_only_blocks_plain_wheel() {
        let f = flags(false, true, false, false);
        assert!(f.should_block_wheel(false));
        assert!(!f.should_block_wheel(true));
        assert!(!f.should_block_pan());
    }

    #[test]
    fn block_zoom_only_blocks_modifier_wheel() {
        let f = flags(false, false, true, false);
        assert!(!f.should_block_wheel(false));
        assert!(f.should_block_wheel(true));
    }

    #[test]
    fn block_pan_only_blocks_drag() {
        let f = flags(false, false, false, true);
        assert!(f.should_block_pan());
        assert!(!f.should_block_wheel(false));
    }

    #[test]
    fn from_lookup_maps_each_class() {
        let f = GateFlags::from_lookup(|class| class == BLOCK_ZOOM_CLASS);
        assert_eq!(f, flags(false, false, true, false));
    }

    #[test]
    fn class_name_collapses_to_block_events() {
        assert_eq!(block_class_name(true, true, true), BLOCK_EVENTS_CLASS);
    }

    #[test]
    fn class_name_joins_partial_selection() {
        assert_eq!(
            block_class_name(true, false, true),
            format!("{} {}", BLOCK_SCROLL_CLASS, BLOCK_PAN_CLASS)
        );
        assert_eq!(block_class_name(false, false, false), "");
    }
}
