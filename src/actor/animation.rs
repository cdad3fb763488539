use crate::engine::time::Millis;

/// Millisecond clock for a time-bounded effect (jump arc, 180° turn, hazard).
///
/// The original controller stored a raw tick count with `0` meaning "not
/// running", which collides with a legitimate zero timestamp right after
/// startup. The tagged form makes inactive explicit; callers gate re-entrancy
/// themselves (starting an already-running clock restarts it).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stopwatch {
    #[default]
    Inactive,
    Active { started_ms: Millis },
}

impl Stopwatch {
    pub fn start(&mut self, now_ms: Millis) {
        *self = Self::Active { started_ms: now_ms };
    }

    pub fn clear(&mut self) {
        *self = Self::Inactive;
    }

    #[allow(dead_code)]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Milliseconds since `start`, or `None` while inactive.
    pub fn elapsed_ms(&self, now_ms: Millis) -> Option<Millis> {
        match self {
            Self::Inactive => None,
            Self::Active { started_ms } => Some(now_ms.wrapping_sub(*started_ms)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_reports_no_elapsed_time() {
        let clock = Stopwatch::default();
        assert!(!clock.is_active());
        assert_eq!(clock.elapsed_ms(5_000), None);
    }

    #[test]
    fn elapsed_counts_from_start() {
        let mut clock = Stopwatch::default();
        clock.start(1_000);
        assert!(clock.is_active());
        assert_eq!(clock.elapsed_ms(1_000), Some(0));
        assert_eq!(clock.elapsed_ms(1_199), Some(199));
    }

    #[test]
    fn clear_stops_the_clock() {
        let mut clock = Stopwatch::default();
        clock.start(42);
        clock.clear();
        assert_eq!(clock, Stopwatch::Inactive);
        assert_eq!(clock.elapsed_ms(100), None);
    }

    #[test]
    fn restart_rebases_elapsed() {
        let mut clock = Stopwatch::default();
        clock.start(100);
        clock.start(300);
        assert_eq!(clock.elapsed_ms(350), Some(50));
    }

    #[test]
    fn zero_start_time_is_still_active() {
        // The whole point of the tagged form: a clock started at tick 0
        // must not read as inactive.
        let mut clock = Stopwatch::default();
        clock.start(0);
        assert!(clock.is_active());
        assert_eq!(clock.elapsed_ms(10), Some(10));
    }
}
