use glam::Vec3;

use super::animation::Stopwatch;
use crate::engine::time::Millis;

/// No visual change during the first half second after the overlay appears.
const GROWTH_GRACE_MS: Millis = 500;
/// Past this the hazard turns lethal; the caller applies guaranteed-fatal damage.
const LETHAL_MS: Millis = 10_000;
/// Per-axis scale added every frame during the growth phase.
const GROWTH_STEP: f32 = 0.01;

/// Snapshot of the overlay handed to the renderer in a draw submission.
#[derive(Clone, Copy, Debug)]
pub struct OverlayFrame {
    pub opacity: f32,
    pub scale: Vec3,
}

/// The "gumball" hazard: a timed, visually-scaling, damaging overlay owned
/// by the actor for its whole lifetime. Visibility and scale are toggled
/// repeatedly; the overlay itself is never rebuilt.
pub struct HazardOverlay {
    opacity: f32,
    scale: Vec3,
    clock: Stopwatch,
}

impl HazardOverlay {
    pub fn new() -> Self {
        Self {
            opacity: 0.0,
            scale: Vec3::ONE,
            clock: Stopwatch::Inactive,
        }
    }

    /// Make the overlay visible and restart its countdown from `now_ms`.
    pub fn show(&mut self, now_ms: Millis) {
        self.opacity = 1.0;
        self.clock.start(now_ms);
    }

    /// Hide the overlay. The clock keeps running; only the soft-reset
    /// cancels an in-flight hazard.
    pub fn hide(&mut self) {
        self.opacity = 0.0;
    }

    /// Soft-reset path: hide and cancel the countdown. Scale is left as
    /// grown; the next `show` starts from wherever it was.
    pub fn reset(&mut self) {
        self.hide();
        self.clock.clear();
    }

    pub fn is_visible(&self) -> bool {
        self.opacity == 1.0
    }

    #[allow(dead_code)]
    pub fn clock(&self) -> Stopwatch {
        self.clock
    }

    pub fn frame(&self) -> OverlayFrame {
        OverlayFrame {
            opacity: self.opacity,
            scale: self.scale,
        }
    }

    /// Per-frame evaluation. Returns `true` once the lethal timeout has
    /// passed; the actor then routes it through the damage model, whose
    /// reset also calls [`HazardOverlay::reset`].
    pub fn tick(&mut self, now_ms: Millis) -> bool {
        match self.clock.elapsed_ms(now_ms) {
            None => false,
            Some(elapsed) if elapsed > LETHAL_MS => true,
            Some(elapsed) if elapsed > GROWTH_GRACE_MS => {
                self.scale += Vec3::splat(GROWTH_STEP);
                false
            }
            Some(_) => false,
        }
    }
}
