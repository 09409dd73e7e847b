//! Cycle-counter based timing.
//!
//! On x86_64, [`rdtsc`] and [`rdtscp`] read the time stamp counter directly and [`calc_time_nano`]
//! converts tick differences into nanoseconds using a frequency calibrated once per process. On
//! every other architecture the "counter" is already a monotonic nanosecond clock, the frequency is
//! reported as `0.0` and conversions pass differences through unchanged.
//!
//! ```
//! use rhino::measure;
//!
//! let begin = measure::rdtsc();
//! let sum: u64 = (0..1_000).sum();
//! let end = measure::rdtsc();
//!
//! let nanos = measure::calc_time_nano_with(begin, end, 0.0);
//! assert_eq!(nanos, end.wrapping_sub(begin));
//! # assert_eq!(sum, 499_500);
//! ```

use std::sync::OnceLock;

mod calibration;
mod tests;

pub use calibration::*;

/// Reads the time stamp counter without serializing, so it may be reordered with surrounding
/// instructions. Slightly cheaper than [`rdtscp`].
#[cfg(target_arch = "x86_64")]
#[inline]
#[allow(unused_unsafe)]
pub fn rdtsc() -> u64 {
    // SAFETY: rdtsc is part of the x86_64 baseline and has no preconditions.
    unsafe { core::arch::x86_64::_rdtsc() }
}

/// Reads the time stamp counter after all preceding instructions have completed, which is what
/// you want when timing a code section.
#[cfg(target_arch = "x86_64")]
#[inline]
#[allow(unused_unsafe)]
pub fn rdtscp() -> u64 {
    let mut aux = 0_u32;
    // SAFETY: rdtscp is supported by every x86_64 CPU made since 2006 and only writes to aux.
    unsafe { core::arch::x86_64::__rdtscp(&mut aux) }
}

#[cfg(not(target_arch = "x86_64"))]
#[inline]
pub fn rdtsc() -> u64 {
    monotonic_nanos()
}

#[cfg(not(target_arch = "x86_64"))]
#[inline]
pub fn rdtscp() -> u64 {
    monotonic_nanos()
}

#[cfg(not(target_arch = "x86_64"))]
fn monotonic_nanos() -> u64 {
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_nanos() as u64
}

/// The TSC frequency in GHz, calibrated with [`Calibration::default`] on first use and cached for
/// the rest of the process. The first call blocks for at least a second.
pub fn tsc_frequency() -> f64 {
    static FREQUENCY: OnceLock<f64> = OnceLock::new();
    *FREQUENCY.get_or_init(calibrate_tsc_frequency)
}

/// Nanoseconds between two counter reads, using the cached [`tsc_frequency`].
pub fn calc_time_nano(begin: u64, end: u64) -> u64 {
    calc_time_nano_with(begin, end, tsc_frequency())
}

/// Nanoseconds between two counter reads, for callers that calibrated themselves.
pub fn calc_time_nano_with(begin: u64, end: u64, tsc_freq: f64) -> u64 {
    cvt_tsc_to_nano(end.wrapping_sub(begin), tsc_freq)
}

/// Converts a tick count to nanoseconds. A frequency of zero or below means the ticks already are
/// nanoseconds.
pub fn cvt_tsc_to_nano(ticks: u64, tsc_freq: f64) -> u64 {
    if tsc_freq > 0.0 {
        (ticks as f64 / tsc_freq) as u64
    } else {
        ticks
    }
}
