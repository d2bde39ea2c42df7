use infinite_canvas_core::{TransformStore, TransitionStep, ViewportTransform, ZoomBounds};
use leptos::*;

use crate::dom;

/// Reactive handle over one canvas's [`TransformStore`].
///
/// The store stays authoritative; the signal mirrors every committed value so views
/// can subscribe to it.
#[derive(Clone, Copy)]
pub struct TransformHandle {
    store: StoredValue<TransformStore>,
    transform: RwSignal<ViewportTransform>,
}

impl TransformHandle {
    /// Tracked read of the current transform.
    pub fn signal(&self) -> Signal<ViewportTransform> {
        self.transform.into()
    }

    pub fn get_untracked(&self) -> ViewportTransform {
        self.transform.get_untracked()
    }

    pub fn bounds(&self) -> ZoomBounds {
        self.store
            .try_with_value(|s| s.bounds())
            .unwrap_or_default()
    }

    /// Immediate write, cancelling any running animation.
    pub fn set(&self, next: ViewportTransform) {
        if let Some(committed) = self.store.try_update_value(|s| s.set_transform(next)) {
            self.transform.set(committed);
        }
    }

    /// Animate towards `target` over `duration_ms`, superseding any running animation.
    pub fn animate_to(&self, target: ViewportTransform, duration_ms: f64) {
        let now = dom::now_ms();
        let Some(generation) = self
            .store
            .try_update_value(|s| s.begin_transition(target, now, duration_ms))
        else {
            return;
        };

        if duration_ms <= 0.0 {
            self.transform.set(self.store.with_value(|s| s.current()));
            return;
        }
        run_frames(*self, generation);
    }

    pub fn is_animating(&self) -> bool {
        self.store.try_with_value(|s| s.is_animating()).unwrap_or(false)
    }
}

fn run_frames(handle: TransformHandle, generation: u64) {
    request_animation_frame(move || {
        let step = handle
            .store
            .try_update_value(|s| s.advance(generation, dom::now_ms()));
        match step {
            Some(TransitionStep::Frame(t)) => {
                handle.transform.set(t);
                run_frames(handle, generation);
            }
            Some(TransitionStep::Finished(t)) => handle.transform.set(t),
            // Superseded, idle, or the owning component is gone.
            _ => {}
        }
    });
}

pub fn use_transform_store(bounds: ZoomBounds) -> TransformHandle {
    let store = TransformStore::new(bounds);
    let transform = create_rw_signal(store.current());
    TransformHandle {
        store: store_value(store),
        transform,
    }
}
