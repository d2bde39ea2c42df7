//! Single source of truth for the viewport transform.
//!
//! Gesture handlers write through [`TransformStore::set_transform`]; programmatic
//! navigation starts a timed transition and the host drives it frame by frame with
//! [`TransformStore::advance`]. Every write bumps a generation counter so a frame
//! belonging to a superseded transition can never overwrite a newer value.

use crate::transform::{ViewportTransform, ZoomBounds};

/// Standard cubic in-out timing curve.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Transition {
    from: ViewportTransform,
    to: ViewportTransform,
    start_ms: f64,
    duration_ms: f64,
    generation: u64,
}

/// Result of advancing a transition by one animation frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionStep {
    /// No transition is running.
    Idle,
    /// The frame belongs to a transition that has been superseded; nothing was written.
    Stale,
    /// Intermediate value written to the store.
    Frame(ViewportTransform),
    /// Final value written to the store; the transition is over.
    Finished(ViewportTransform),
}

#[derive(Clone, Debug)]
pub struct TransformStore {
    current: ViewportTransform,
    bounds: ZoomBounds,
    generation: u64,
    transition: Option<Transition>,
}

impl TransformStore {
    pub fn new(bounds: ZoomBounds) -> Self {
        Self::with_transform(ViewportTransform::identity(), bounds)
    }

    pub fn with_transform(initial: ViewportTransform, bounds: ZoomBounds) -> Self {
        Self {
            current: initial.clamped(&bounds),
            bounds,
            generation: 0,
            transition: None,
        }
    }

    pub fn current(&self) -> ViewportTransform {
        self.current
    }

    pub fn bounds(&self) -> ZoomBounds {
        self.bounds
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Immediate write. Cancels any running transition.
    pub fn set_transform(&mut self, next: ViewportTransform) -> ViewportTransform {
        self.generation += 1;
        self.transition = None;
        self.current = next.clamped(&self.bounds);
        self.current
    }

    /// Start a transition towards `target`, superseding any running one.
    ///
    /// Returns the generation the caller must pass to [`Self::advance`]. A non-positive
    /// duration commits the target immediately.
    pub fn begin_transition(
        &mut self,
        target: ViewportTransform,
        now_ms: f64,
        duration_ms: f64,
    ) -> u64 {
        if duration_ms <= 0.0 || !duration_ms.is_finite() {
            self.set_transform(target);
            return self.generation;
        }

        self.generation += 1;
        self.transition = Some(Transition {
            from: self.current,
            to: target.clamped(&self.bounds),
            start_ms: now_ms,
            duration_ms,
            generation: self.generation,
        });
        self.generation
    }

    pub fn advance(&mut self, generation: u64, now_ms: f64) -> TransitionStep {
        let Some(transition) = self.transition else {
            return if generation == self.generation {
                TransitionStep::Idle
            } else {
                TransitionStep::Stale
            };
        };

        if transition.generation != generation {
            return TransitionStep::Stale;
        }

        let progress = (now_ms - transition.start_ms) / transition.duration_ms;
        if progress >= 1.0 {
            self.current = transition.to;
            self.transition = None;
            return TransitionStep::Finished(self.current);
        }

        let eased = ease_cubic_in_out(progress);
        self.current = transition.from.lerp(&transition.to, eased);
        TransitionStep::Frame(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> TransformStore {
        TransformStore::new(ZoomBounds::default())
    }

    #[test]
    fn ease_curve_hits_endpoints_and_midpoint() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        assert!((ease_cubic_in_out(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn ease_curve_is_monotonic() {
        let mut last = 0.0;
        for i in 1..=100 {
            let v = ease_cubic_in_out(i as f64 / 100.0);
            assert!(v >= last, "ease curve decreased at step {}", i);
            last = v;
        }
    }

    #[test]
    fn set_transform_clamps_scale() {
        let mut s = store();
        let written = s.set_transform(ViewportTransform::new(0.0, 0.0, 100.0));
        assert_eq!(written.scale, 4.0);
        let written = s.set_transform(ViewportTransform::new(0.0, 0.0, 0.0));
        assert_eq!(written.scale, 0.1);
    }

    #[test]
    fn transition_final_frame_is_exact() {
        let mut s = store();
        let target = ViewportTransform::new(123.456, -78.9, 1.7);
        let gen = s.begin_transition(target, 1000.0, 300.0);

        let mut frames = 0;
        let mut now = 1000.0;
        loop {
            now += 16.7;
            match s.advance(gen, now) {
                TransitionStep::Frame(_) => frames += 1,
                TransitionStep::Finished(t) => {
                    assert_eq!(t, target);
                    break;
                }
                other => panic!("unexpected step {:?}", other),
            }
        }
        assert!(frames > 10);
        assert_eq!(s.current(), target);
        assert!(!s.is_animating());
    }

    #[test]
    fn transition_target_is_clamped() {
        let mut s = store();
        let gen = s.begin_transition(ViewportTransform::new(0.0, 0.0, 50.0), 0.0, 100.0);
        assert_eq!(
            s.advance(gen, 100.0),
            TransitionStep::Finished(ViewportTransform::new(0.0, 0.0, 4.0))
        );
    }

    #[test]
    fn new_transition_supersedes_old_one() {
        let mut s = store();
        let first = s.begin_transition(ViewportTransform::new(500.0, 0.0, 1.0), 0.0, 300.0);
        let second = s.begin_transition(ViewportTransform::new(-500.0, 0.0, 1.0), 10.0, 300.0);

        assert_eq!(s.advance(first, 50.0), TransitionStep::Stale);
        assert!(matches!(s.advance(second, 50.0), TransitionStep::Frame(_)));
    }

    #[test]
    fn gesture_write_cancels_running_transition() {
        let mut s = store();
        let gen = s.begin_transition(ViewportTransform::new(500.0, 500.0, 2.0), 0.0, 300.0);
        s.advance(gen, 100.0);

        let gesture = ViewportTransform::new(1.0, 2.0, 1.0);
        s.set_transform(gesture);

        // A late frame of the cancelled animation must not clobber the gesture.
        assert_eq!(s.advance(gen, 200.0), TransitionStep::Stale);
        assert_eq!(s.current(), gesture);
    }

    #[test]
    fn zero_duration_commits_immediately() {
        let mut s = store();
        let target = ViewportTransform::new(3.0, 4.0, 2.0);
        let gen = s.begin_transition(target, 0.0, 0.0);
        assert_eq!(s.current(), target);
        assert_eq!(s.advance(gen, 0.0), TransitionStep::Idle);
    }

    #[test]
    fn frames_before_start_stay_at_origin() {
        let mut s = store();
        let gen = s.begin_transition(ViewportTransform::new(100.0, 0.0, 1.0), 1000.0, 200.0);
        assert_eq!(
            s.advance(gen, 990.0),
            TransitionStep::Frame(ViewportTransform::identity())
        );
    }
}
