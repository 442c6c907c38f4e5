#![cfg(test)]
use std::f64::consts::PI;
use std::num::NonZeroUsize;

use quadra_common::config::PARTITION_COUNTS;
use quadra_common::interval::Interval;
use quadra_core::integrate::{integrate, Partition, Segment};
use quadra_core::rule::{Rectangle, Rule, Simpson};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 200;

fn random_interval(rng: &mut StdRng) -> Interval {
    let a: f64 = rng.random_range(0.0..=PI);
    let b: f64 = rng.random_range(0.0..=PI);
    Interval::new(a.min(b), a.max(b)).unwrap()
}

#[test]
fn rectangle_is_within_tolerance_at_finest_partition() {
    let mut rng: StdRng = StdRng::seed_from_u64(0x5eed);
    let finest: NonZeroUsize = PARTITION_COUNTS[PARTITION_COUNTS.len() - 1];

    for _ in 0..SAMPLES {
        let interval: Interval = random_interval(&mut rng);
        let error: f64 = (integrate(interval, finest, &Rectangle) - interval.exact_sine_integral()).abs();
        assert!(error < 1e-4, "error {error} on {interval}");
    }
}

#[test]
fn rectangle_error_shrinks_with_finer_partitions() {
    let mut rng: StdRng = StdRng::seed_from_u64(7);

    for _ in 0..SAMPLES {
        let interval: Interval = random_interval(&mut rng);
        if interval.width() < 1e-3 {
            continue;
        }
        let exact: f64 = interval.exact_sine_integral();
        let errors: Vec<f64> = PARTITION_COUNTS
            .iter()
            .map(|&n| (integrate(interval, n, &Rectangle) - exact).abs())
            .collect();
        for pair in errors.windows(2) {
            assert!(pair[1] <= pair[0] + 1e-12, "{errors:?} on {interval}");
        }
    }
}

#[test]
fn simpson_beats_rectangle_on_half_period() {
    let interval: Interval = Interval::new(0.0, PI).unwrap();
    for n in PARTITION_COUNTS.iter().take(3).copied() {
        let rectangle: f64 = (integrate(interval, n, &Rectangle) - 2.0).abs();
        let simpson: f64 = (integrate(interval, n, &Simpson) - 2.0).abs();
        assert!(simpson < rectangle, "n = {n}");
    }
}

#[test]
fn degenerate_intervals_integrate_to_zero() {
    let mut rng: StdRng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let x: f64 = rng.random_range(0.0..=PI);
        let interval: Interval = Interval::new(x, x).unwrap();
        for n in PARTITION_COUNTS {
            for rule in Rule::ALL {
                assert_eq!(integrate(interval, n, &rule), 0.0);
            }
        }
    }
}

#[test]
fn partitions_are_contiguous_and_cover_the_interval() {
    let mut rng: StdRng = StdRng::seed_from_u64(99);

    for _ in 0..SAMPLES {
        let interval: Interval = random_interval(&mut rng);
        let n: NonZeroUsize = NonZeroUsize::new(rng.random_range(1..=1000)).unwrap();
        let segments: Vec<Segment> = Partition::new(interval, n).collect();

        assert_eq!(segments.len(), n.get());
        assert_eq!(segments[0].lo, interval.left_border());
        assert!(segments.windows(2).all(|pair| pair[0].hi == pair[1].lo));

        let covered: f64 = segments.iter().map(Segment::width).sum();
        assert!((covered - interval.width()).abs() < 1e-9);
        let end: f64 = segments[segments.len() - 1].hi;
        assert!((end - interval.right_border()).abs() < 1e-9);
    }
}
