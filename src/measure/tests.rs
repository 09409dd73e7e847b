#![cfg(test)]

use std::time::Duration;

use super::*;

fn quick() -> Calibration {
    Calibration {
        sample: Duration::from_millis(5),
        min_samples: 3,
        max_samples: 6,
        ..Calibration::default()
    }
}

#[test]
fn test_median() {
    assert_eq!(median(&mut []), None);
    assert_eq!(median(&mut [3.0]), Some(3.0));
    assert_eq!(median(&mut [5.0, 1.0, 3.0]), Some(3.0));
    assert_eq!(median(&mut [4.0, 1.0, 3.0, 2.0]), Some(3.0), "Even counts take the upper median.");
    assert_eq!(median(&mut [2.9, 100.0, 3.0, 3.1, 0.1]), Some(3.0), "Outliers shouldn't move it.");
}

#[test]
fn test_is_stable() {
    assert!(!is_stable(&[], 0.005));
    assert!(is_stable(&[3.0, 3.0, 3.0], 0.005));
    assert!(is_stable(&[2.99, 3.0, 3.01], 0.005));
    assert!(!is_stable(&[1.0, 3.0, 5.0], 0.005));
}

#[test]
fn test_conversions() {
    assert_eq!(cvt_tsc_to_nano(3_000, 3.0), 1_000);
    assert_eq!(cvt_tsc_to_nano(3_000, 0.0), 3_000, "Zero frequency means ticks are nanoseconds.");
    assert_eq!(calc_time_nano_with(1_000, 7_000, 2.0), 3_000);
    assert_eq!(
        calc_time_nano_with(u64::MAX - 9, 10, 0.0),
        20,
        "Counter wrap-around should still give the forward distance."
    );
}

#[test]
fn test_counter_is_monotonic() {
    let first = rdtscp();
    let second = rdtscp();
    assert!(second >= first);
    assert!(rdtsc() > 0);
}

#[test]
fn test_quick_calibration() {
    let ghz = quick().run();

    if cfg!(target_arch = "x86_64") {
        assert!(ghz > 0.0, "x86_64 calibration should find a frequency.");
        let begin = rdtscp();
        std::thread::sleep(Duration::from_millis(20));
        let nanos = calc_time_nano_with(begin, rdtscp(), ghz);
        assert!(nanos >= 15_000_000, "Measured {} ns for a 20 ms sleep.", nanos);
    } else {
        assert_eq!(ghz, 0.0);
    }
}

#[test]
fn test_frequency_is_calibrated_once() {
    let first = tsc_frequency();
    assert_eq!(tsc_frequency(), first, "The cached frequency should never be recalibrated.");

    let begin = rdtscp();
    let end = begin.wrapping_add(1_000_000);
    assert_eq!(calc_time_nano(begin, end), cvt_tsc_to_nano(1_000_000, first));
}
