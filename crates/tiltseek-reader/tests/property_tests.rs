//! Property-Based Tests for the Reader Crate

use tiltseek_reader::prelude::*;

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn slider_stays_in_unit_interval(
            progresses in proptest::collection::vec(0.0f32..=1.0f32, 1..300),
        ) {
            let mut scrub = ScrubController::default();
            for progress in progresses {
                if let Some(event) = scrub.apply(progress) {
                    prop_assert!((0.0..=1.0).contains(&event.slider));
                }
                prop_assert!((0.0..=1.0).contains(&scrub.slider()));
            }
        }

        #[test]
        fn no_event_leaves_slider_untouched(
            progresses in proptest::collection::vec(0.0f32..=1.0f32, 1..100),
        ) {
            let mut scrub = ScrubController::default();
            for progress in progresses {
                let before = scrub.slider();
                let event = scrub.apply(progress);
                if event.is_none() {
                    prop_assert!((scrub.slider() - before).abs() < f32::EPSILON);
                }
            }
        }

        #[test]
        fn event_step_matches_slider_change_away_from_bounds(
            first in 0.3f32..=0.7f32,
        ) {
            // One guaranteed step from the 0.0 baseline, slider far from
            // either bound: the reported step is exactly the movement.
            let mut scrub = ScrubController::default();
            prop_assume!(first > 0.1);
            let event = scrub.apply(first).expect("escaped the band");
            prop_assert!((event.slider - (0.5 + event.step)).abs() < 1e-6);
        }

        #[test]
        fn seek_offset_never_exceeds_duration(
            progress in proptest::num::f32::ANY,
            secs in 1u64..=86_400,
        ) {
            let duration = std::time::Duration::from_secs(secs);
            if let Some(target) = SeekTarget::from_progress(progress, Some(duration)) {
                prop_assert!(target.offset() <= duration);
            } else {
                prop_assert!(!progress.is_finite());
            }
        }

        #[test]
        fn scripted_source_delivers_every_sample(
            samples in proptest::collection::vec(-1.0f32..=1.0f32, 0..100),
        ) {
            let mut source = ScriptedMotionSource::new(samples.clone());
            source.start();
            let mut delivered = Vec::new();
            while let Some(sample) = source.sample() {
                delivered.push(sample);
            }
            prop_assert_eq!(delivered, samples);
        }
    }
}

#[cfg(test)]
mod approx_tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn pipeline_progress_matches_hand_computed_filter() {
        let config = ReaderConfig::default();
        let mut reader = config
            .build(ScriptedMotionSource::new(vec![0.0, 0.628]))
            .expect("valid config");
        let range = config.range().expect("valid range");

        reader.start();
        let first = reader
            .tick()
            .expect("finite sample")
            .expect("sample available");
        assert_abs_diff_eq!(first.progress, 0.1 * range.normalize(0.0), epsilon = 1e-6);

        let second = reader
            .tick()
            .expect("finite sample")
            .expect("sample available");
        let expected = 0.1 * range.normalize(0.628) + 0.9 * first.progress;
        assert_abs_diff_eq!(second.progress, expected, epsilon = 1e-6);
    }
}
