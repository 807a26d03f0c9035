//! Running statistics over height samples.
//!
//! [`RunningStats::update`] ignores NaN inputs; every other value updates the
//! count, extremes, sum and the streaming median estimate. Callers may feed
//! unfiltered samples and rely on the accumulator to discard invalid ones.

/// Count, extremes, mean and a median-like central value of valid samples
#[derive(Debug, Clone)]
pub struct RunningStats {
    count: usize,
    min: f64,
    max: f64,
    sum: f64,
    central: MedianEstimator,
}

impl RunningStats {
    pub fn new() -> Self {
        Self {
            count: 0,
            min: f64::NAN,
            max: f64::NAN,
            sum: 0.0,
            central: MedianEstimator::new(),
        }
    }

    /// Add one sample; NaN is discarded without touching any statistic
    pub fn update(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        if self.count == 0 {
            self.min = value;
            self.max = value;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
        self.count += 1;
        self.sum += value;
        self.central.update(value);
    }

    /// Number of valid samples seen
    pub fn count(&self) -> usize {
        self.count
    }

    /// Smallest valid sample, NaN before the first one
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest valid sample, NaN before the first one
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Arithmetic mean, NaN before the first valid sample
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.sum / self.count as f64
        }
    }

    /// Median estimate, NaN before the first valid sample
    pub fn central(&self) -> f64 {
        self.central.estimate()
    }
}

impl Default for RunningStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Streaming median after Jain & Chlamtac's P² algorithm.
///
/// Exact while fewer than five samples have been seen; afterwards five
/// markers track the quantile in constant memory.
#[derive(Debug, Clone)]
struct MedianEstimator {
    seen: usize,
    heights: [f64; 5],
    positions: [f64; 5],
    desired: [f64; 5],
}

const QUANTILE: f64 = 0.5;
const DESIRED_INCREMENTS: [f64; 5] = [0.0, QUANTILE / 2.0, QUANTILE, (1.0 + QUANTILE) / 2.0, 1.0];

impl MedianEstimator {
    fn new() -> Self {
        Self {
            seen: 0,
            heights: [0.0; 5],
            positions: [0.0, 1.0, 2.0, 3.0, 4.0],
            desired: [
                0.0,
                2.0 * QUANTILE,
                4.0 * QUANTILE,
                2.0 + 2.0 * QUANTILE,
                4.0,
            ],
        }
    }

    fn update(&mut self, x: f64) {
        if self.seen < 5 {
            self.heights[self.seen] = x;
            self.seen += 1;
            if self.seen == 5 {
                self.heights.sort_by(f64::total_cmp);
            }
            return;
        }
        self.seen += 1;

        let k = if x < self.heights[0] {
            self.heights[0] = x;
            0
        } else if x >= self.heights[4] {
            self.heights[4] = x;
            3
        } else {
            // heights[0] <= x < heights[4], so a cell always matches
            (0..4)
                .find(|&i| x < self.heights[i + 1])
                .unwrap_or(3)
        };

        for position in &mut self.positions[k + 1..] {
            *position += 1.0;
        }
        for (desired, increment) in self.desired.iter_mut().zip(DESIRED_INCREMENTS) {
            *desired += increment;
        }

        for i in 1..4 {
            let offset = self.desired[i] - self.positions[i];
            let room_above = self.positions[i + 1] - self.positions[i];
            let room_below = self.positions[i - 1] - self.positions[i];
            if (offset >= 1.0 && room_above > 1.0) || (offset <= -1.0 && room_below < -1.0) {
                let step = offset.signum();
                let candidate = self.parabolic(i, step);
                self.heights[i] =
                    if self.heights[i - 1] < candidate && candidate < self.heights[i + 1] {
                        candidate
                    } else {
                        self.linear(i, step)
                    };
                self.positions[i] += step;
            }
        }
    }

    fn parabolic(&self, i: usize, step: f64) -> f64 {
        let (q, n) = (&self.heights, &self.positions);
        q[i] + step / (n[i + 1] - n[i - 1])
            * ((n[i] - n[i - 1] + step) * (q[i + 1] - q[i]) / (n[i + 1] - n[i])
                + (n[i + 1] - n[i] - step) * (q[i] - q[i - 1]) / (n[i] - n[i - 1]))
    }

    fn linear(&self, i: usize, step: f64) -> f64 {
        let j = if step > 0.0 { i + 1 } else { i - 1 };
        self.heights[i]
            + step * (self.heights[j] - self.heights[i]) / (self.positions[j] - self.positions[i])
    }

    fn estimate(&self) -> f64 {
        match self.seen {
            0 => f64::NAN,
            n if n < 5 => {
                let mut sorted = self.heights[..n].to_vec();
                sorted.sort_by(f64::total_cmp);
                if n % 2 == 1 {
                    sorted[n / 2]
                } else {
                    (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
                }
            }
            _ => self.heights[2],
        }
    }
}
