use glam::f64::DVec2;

/// Detects apsides by watching for local extrema in the distance between
/// the child body and its primary.
///
/// The detector keeps a three-sample sliding window of distances. A
/// periapsis fires when the middle sample is strictly smaller than both
/// its neighbors, an apoapsis when it is strictly larger. Detection
/// resolution is bounded by the sampling interval: the true extremum can
/// fall between samples, and no sub-step refinement is attempted. Only
/// the most recent sample of each kind is retained.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApsisDetector {
    prev_prev: f64,
    prev: f64,
    observations: u64,
    periapsis: Option<DVec2>,
    apoapsis: Option<DVec2>,
}

impl ApsisDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one post-step distance sample and the position it was
    /// measured at. The window starts out zero-filled, so comparisons are
    /// suppressed until four observations have flushed it.
    pub fn observe(&mut self, distance: f64, position: DVec2) {
        if self.observations >= 4 {
            if self.prev < self.prev_prev && self.prev < distance {
                self.periapsis = Some(position);
            }
            if self.prev > self.prev_prev && self.prev > distance {
                self.apoapsis = Some(position);
            }
        }
        self.prev_prev = self.prev;
        self.prev = distance;
        self.observations += 1;
    }

    pub fn periapsis(&self) -> Option<DVec2> {
        self.periapsis
    }

    pub fn apoapsis(&self) -> Option<DVec2> {
        self.apoapsis
    }

    pub fn is_complete(&self) -> bool {
        self.periapsis.is_some() && self.apoapsis.is_some()
    }
}
