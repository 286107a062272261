use super::constants::SHAKE_THRESHOLD;

/// One instantaneous accelerometer reading.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AccelerationSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl AccelerationSample {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Marker emitted when a sample crosses the shake threshold while idle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShakeEdge {
    pub magnitude: f64,
}

/// Stateless threshold check. Sampling rate and gaps between samples are irrelevant.
#[derive(Clone, Copy, Debug)]
pub struct ShakeDetector {
    threshold: f64,
}

impl Default for ShakeDetector {
    fn default() -> Self {
        Self {
            threshold: SHAKE_THRESHOLD,
        }
    }
}

impl ShakeDetector {
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Edge iff the magnitude strictly exceeds the threshold and no roll is in flight.
    pub fn detect(&self, sample: AccelerationSample, rolling: bool) -> Option<ShakeEdge> {
        if rolling {
            return None;
        }
        let magnitude = sample.magnitude();
        (magnitude > self.threshold).then_some(ShakeEdge { magnitude })
    }
}
