//! Property-Based Tests for the Signal Crate
//!
//! This module contains property tests that verify processor behavior
//! across a wide range of inputs.

use tiltseek_signal::prelude::*;

fn processor(half_width: f32, alpha: f32) -> TiltProcessor {
    let range = TiltRange::symmetric(half_width).expect("valid range");
    TiltProcessor::new(range, alpha).expect("valid processor")
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn progress_always_in_unit_interval(
            raw in -100.0f32..100.0f32,
            alpha in 0.001f32..=1.0f32,
        ) {
            let mut p = processor(0.628, alpha);
            let out = p.submit_sample(raw).expect("finite sample");
            prop_assert!(out >= -1e-5);
            prop_assert!(out <= 1.0 + 1e-5);
        }

        #[test]
        fn progress_stays_bounded_over_long_streams(
            samples in proptest::collection::vec(-10.0f32..10.0f32, 1..200),
        ) {
            let mut p = processor(0.628, 0.1);
            for raw in samples {
                let out = p.submit_sample(raw).expect("finite sample");
                prop_assert!(out.is_finite());
                prop_assert!(out >= -1e-5);
                prop_assert!(out <= 1.0 + 1e-5);
            }
        }

        #[test]
        fn out_of_range_behaves_like_boundary(raw in 1.0f32..1000.0f32) {
            let mut over = processor(0.5, 0.2);
            let mut at_bound = processor(0.5, 0.2);

            let a = over.submit_sample(raw).expect("finite sample");
            let b = at_bound.submit_sample(0.5).expect("finite sample");
            prop_assert!((a - b).abs() < 1e-6);
        }

        #[test]
        fn unsmoothed_output_equals_normalized(raw in -2.0f32..2.0f32) {
            let range = TiltRange::symmetric(1.0).expect("valid range");
            let mut p = TiltProcessor::new(range, 1.0).expect("valid processor");

            let out = p.submit_sample(raw).expect("finite sample");
            prop_assert!((out - range.normalize(raw)).abs() < 1e-6);
        }

        #[test]
        fn constant_input_converges_to_its_normalization(
            raw in -0.6f32..0.6f32,
            alpha in 0.05f32..=1.0f32,
        ) {
            let mut p = processor(0.628, alpha);
            for _ in 0..500 {
                p.submit_sample(raw).expect("finite sample");
            }
            let target = p.range().normalize(raw);
            prop_assert!((p.progress() - target).abs() < 1e-3);
        }

        #[test]
        fn output_lies_between_memory_and_input(
            raw in -1.0f32..1.0f32,
            memory in 0.0f32..1.0f32,
            alpha in 0.01f32..=1.0f32,
        ) {
            let range = TiltRange::symmetric(1.0).expect("valid range");
            let normalized = range.normalize(raw);

            let mut state = SmoothingState::new(alpha);
            state.prev_output = memory;
            let out = smoothing_filter(normalized, &mut state);

            let lo = normalized.min(memory);
            let hi = normalized.max(memory);
            prop_assert!(out >= lo - 1e-6);
            prop_assert!(out <= hi + 1e-6);
        }

        #[test]
        fn direction_step_trichotomy(
            current in 0.0f32..1.0f32,
            previous in 0.0f32..1.0f32,
            threshold in 0.0f32..0.5f32,
            step_size in 0.001f32..0.5f32,
        ) {
            let result = direction_step(current, previous, threshold, step_size);
            if current > previous + threshold {
                prop_assert_eq!(result, Some(step_size));
            } else if current < previous - threshold {
                prop_assert_eq!(result, Some(-step_size));
            } else {
                prop_assert_eq!(result, None);
            }
        }

        #[test]
        fn normalize_is_monotone(
            a in -1.0f32..1.0f32,
            b in -1.0f32..1.0f32,
        ) {
            let range = TiltRange::symmetric(0.628).expect("valid range");
            if a <= b {
                prop_assert!(range.normalize(a) <= range.normalize(b));
            } else {
                prop_assert!(range.normalize(a) >= range.normalize(b));
            }
        }
    }
}

#[cfg(test)]
mod quickcheck_tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};
    use quickcheck_macros::quickcheck;

    #[derive(Debug, Clone)]
    struct FiniteF32(f32);

    impl Arbitrary for FiniteF32 {
        fn arbitrary(g: &mut Gen) -> Self {
            let value = f32::arbitrary(g);
            FiniteF32(if value.is_finite() { value } else { 0.0 })
        }
    }

    fn prop_stream_stays_in_unit_interval(samples: Vec<FiniteF32>) -> TestResult {
        let mut p = processor(0.628, 0.1);

        for FiniteF32(raw) in samples {
            let out = match p.submit_sample(raw.clamp(-1000.0, 1000.0)) {
                Ok(out) => out,
                Err(_) => return TestResult::failed(),
            };
            if !(out.is_finite() && (-1e-5..=1.0 + 1e-5).contains(&out)) {
                return TestResult::failed();
            }
        }

        TestResult::passed()
    }

    #[test]
    fn quickcheck_stream_stays_in_unit_interval() {
        QuickCheck::new()
            .tests(1000)
            .quickcheck(prop_stream_stays_in_unit_interval as fn(Vec<FiniteF32>) -> TestResult);
    }

    #[quickcheck]
    fn quickcheck_direction_step_antisymmetric(
        current: FiniteF32,
        previous: FiniteF32,
    ) -> TestResult {
        let current = current.0.clamp(0.0, 1.0);
        let previous = previous.0.clamp(0.0, 1.0);
        let threshold = 0.1;
        let step = 0.1;

        let forward = direction_step(current, previous, threshold, step);
        let backward = direction_step(previous, current, threshold, step);

        match (forward, backward) {
            (Some(a), Some(b)) => TestResult::from_bool((a + b).abs() < f32::EPSILON),
            (None, None) => TestResult::passed(),
            // A step in one direction implies the reverse comparison steps
            // the other way, except exactly on the band edge.
            _ => TestResult::from_bool((current - previous).abs() - threshold <= f32::EPSILON),
        }
    }
}
