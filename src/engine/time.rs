use std::time::Instant;

/// Milliseconds since an arbitrary epoch, as read from the game clock.
pub type Millis = u32;

/// Monotonic millisecond counter for the frame loop. The current reading is
/// taken once per frame and passed into the actor update by value, so the
/// controller itself never touches a real clock.
pub struct GameClock {
    start: Instant,
}

impl GameClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> Millis {
        self.start.elapsed().as_millis() as Millis
    }
}
