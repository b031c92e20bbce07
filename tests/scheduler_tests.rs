use ripple::{FrameScheduler, TARGET_FPS};

const INTERVAL_MS: f64 = 1000.0 / TARGET_FPS as f64;
const STEP_SECS: f64 = INTERVAL_MS / 1000.0;

#[cfg(test)]
mod throttling_tests {
    use super::*;

    #[test]
    fn test_at_most_one_render_per_interval() {
        let mut sched = FrameScheduler::new(TARGET_FPS, 0.0);

        // 1ms ticks over one second of wall time.
        let mut renders = 0u32;
        for ms in 1..=1000 {
            if sched.tick(ms as f64).is_some() {
                renders += 1;
            }
        }

        // 60 fps cap: never more than one render per interval of wall time.
        // With 1ms tick granularity a frame fires every 17ms, so 58 exactly.
        let max_renders = (1000.0 / INTERVAL_MS).ceil() as u32;
        assert!(
            renders <= max_renders,
            "rendered {} times in 1s, cap is {}",
            renders,
            max_renders
        );
        assert_eq!(renders, 58);
    }

    #[test]
    fn test_tick_stream_five_ms_deltas() {
        // Deltas [5, 5, 5, 5]ms against a fresh clock: the first three ticks
        // (5, 10, 15ms) are under the ~16.667ms interval; the 20ms tick is
        // the first to exceed it and fires the only render.
        let mut sched = FrameScheduler::new(TARGET_FPS, 0.0);

        assert_eq!(sched.tick(5.0), None);
        assert_eq!(sched.tick(10.0), None);
        assert_eq!(sched.tick(15.0), None);

        let time = sched.tick(20.0).expect("20ms tick must render");
        assert!(
            (time as f64 - STEP_SECS).abs() < 1e-6,
            "elapsed time should advance from 0 to {}, got {}",
            STEP_SECS,
            time
        );
    }

    #[test]
    fn test_no_render_on_equal_diff() {
        let mut sched = FrameScheduler::new(TARGET_FPS, 0.0);
        assert_eq!(sched.tick(INTERVAL_MS), None, "diff must strictly exceed the interval");
    }
}

#[cfg(test)]
mod fixed_step_tests {
    use super::*;

    #[test]
    fn test_sim_time_ignores_wall_clock_excess() {
        // 2x, 5x, and 100x the target interval each advance sim time by
        // exactly one step, not a proportional amount.
        for factor in [2.0, 5.0, 100.0] {
            let mut sched = FrameScheduler::new(TARGET_FPS, 0.0);
            sched.tick(INTERVAL_MS * factor).unwrap();
            assert!(
                (sched.sim_time() - STEP_SECS).abs() < 1e-12,
                "factor {}: sim time {} != one step {}",
                factor,
                sched.sim_time(),
                STEP_SECS
            );
        }
    }

    #[test]
    fn test_sim_time_advances_in_exact_increments() {
        let mut sched = FrameScheduler::new(TARGET_FPS, 0.0);

        let mut now = 0.0;
        let mut renders = 0u64;
        for _ in 0..500 {
            // Irregular tick spacing, some early, some very late.
            for delta in [3.0, 9.0, 40.0, 5.0, 200.0] {
                now += delta;
                if sched.tick(now).is_some() {
                    renders += 1;
                }
            }
        }

        assert!(
            (sched.sim_time() - renders as f64 * STEP_SECS).abs() < 1e-6,
            "sim time must be an exact multiple of the step"
        );
    }

    #[test]
    fn test_sim_time_monotonic() {
        let mut sched = FrameScheduler::new(TARGET_FPS, 0.0);

        let mut prev = sched.sim_time();
        let mut now = 0.0;
        for i in 0..2000 {
            now += (i % 13) as f64;
            sched.tick(now);
            assert!(sched.sim_time() >= prev);
            prev = sched.sim_time();
        }
    }

    #[test]
    fn test_stall_makes_sim_time_lag_wall_time() {
        let mut sched = FrameScheduler::new(TARGET_FPS, 0.0);

        // One second of wall time delivered as ten 100ms stalls: only ten
        // renders fire, so sim time ends well short of one second.
        let mut now = 0.0;
        for _ in 0..10 {
            now += 100.0;
            sched.tick(now).expect("every 100ms tick qualifies");
        }

        assert!((sched.sim_time() - 10.0 * STEP_SECS).abs() < 1e-9);
        assert!(sched.sim_time() < 1.0, "no catch-up frames: sim lags wall");
    }
}
