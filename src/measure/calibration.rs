use std::hint;
use std::time::{Duration, Instant};

use log::{debug, trace, warn};

use super::rdtscp;

/// Parameters for measuring the TSC frequency against the monotonic clock.
///
/// Each sample spins for `sample` and divides elapsed ticks by elapsed nanoseconds. Sampling stops
/// early once at least `min_samples` have been taken and their variance is below
/// `max_variance_ratio * mean²`, and never runs more than `max_samples` times. The result is the
/// median sample, in GHz.
///
/// Pin the calling thread to one core first if the counters aren't synchronized across cores.
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    pub sample: Duration,
    pub min_samples: usize,
    pub max_samples: usize,
    pub max_variance_ratio: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            sample: Duration::from_millis(200),
            min_samples: 5,
            max_samples: 20,
            max_variance_ratio: 0.005,
        }
    }
}

impl Calibration {
    /// Returns the measured frequency in GHz, or `0.0` if no sample was usable or the target has no
    /// TSC.
    pub fn run(&self) -> f64 {
        if !cfg!(target_arch = "x86_64") {
            return 0.0;
        }

        // Samples cut short by more than 5% (preemption, clock adjustments) are discarded.
        let min_elapsed = self.sample.mul_f64(0.95);
        let mut samples = Vec::with_capacity(self.max_samples);

        for _ in 0..self.max_samples {
            let start = Instant::now();
            let start_tsc = rdtscp();

            let target = start + self.sample;
            while Instant::now() < target {
                hint::spin_loop();
            }

            let elapsed = start.elapsed();
            let ticks = rdtscp().wrapping_sub(start_tsc);

            if elapsed < min_elapsed || ticks == 0 {
                trace!("discarding calibration sample: {} ticks in {:?}", ticks, elapsed);
                continue;
            }

            let ghz = ticks as f64 / elapsed.as_nanos() as f64;
            trace!("calibration sample {}: {:.4} GHz", samples.len(), ghz);
            samples.push(ghz);

            if samples.len() >= self.min_samples && is_stable(&samples, self.max_variance_ratio) {
                break;
            }
        }

        match median(&mut samples) {
            Some(ghz) => {
                debug!("calibrated tsc at {:.4} GHz from {} samples", ghz, samples.len());
                ghz
            }
            None => {
                warn!("tsc calibration produced no usable samples");
                0.0
            }
        }
    }
}

/// Calibrates with the default parameters. See [`Calibration`].
pub fn calibrate_tsc_frequency() -> f64 {
    Calibration::default().run()
}

/// The upper median of `samples`, reordering them in the process. `None` if empty.
pub fn median(samples: &mut [f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let mid = samples.len() / 2;
    let (_, median, _) = samples.select_nth_unstable_by(mid, f64::total_cmp);
    Some(*median)
}

/// Whether the population variance of `samples` is below `max_ratio * mean²`.
pub fn is_stable(samples: &[f64], max_ratio: f64) -> bool {
    if samples.is_empty() {
        return false;
    }

    let count = samples.len() as f64;
    let (sum, sum_sq) = samples
        .iter()
        .fold((0.0, 0.0), |(sum, sum_sq), f| (sum + f, sum_sq + f * f));

    let mean = sum / count;
    let variance = sum_sq / count - mean * mean;
    // Rounding can push the variance of identical samples slightly below zero.
    variance.max(0.0) < max_ratio * mean * mean
}
