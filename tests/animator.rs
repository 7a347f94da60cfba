mod tests {
    use ring_light_engine::math::ease_in_out_quad;
    use ring_light_engine::{Animator, Duration, Instant, SlotState};

    #[test]
    fn test_progress_follows_elapsed_time() {
        let mut animator: Animator<1> = Animator::new();
        animator.start(0, Duration::from_millis(100), Instant::from_millis(0));
        assert!(animator.is_animating());

        let mut seen = 0.0;
        animator.update(Instant::from_millis(25), |param| seen = param.progress);
        assert!((seen - 0.25).abs() < 1e-6);
        animator.update(Instant::from_millis(75), |param| seen = param.progress);
        assert!((seen - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_completes_exactly_at_duration() {
        let mut animator: Animator<1> = Animator::new();
        animator.start(0, Duration::from_millis(100), Instant::from_millis(0));

        let mut state = SlotState::Idle;
        animator.update(Instant::from_millis(99), |param| state = param.state);
        assert_eq!(state, SlotState::Running);
        assert!(animator.is_animating());

        let mut progress = 0.0;
        animator.update(Instant::from_millis(100), |param| {
            state = param.state;
            progress = param.progress;
        });
        assert_eq!(state, SlotState::Completed);
        assert_eq!(progress, 1.0);
        assert!(!animator.is_animating());

        // Completed slots are skipped until restarted.
        let mut called = false;
        animator.update(Instant::from_millis(200), |_| called = true);
        assert!(!called);
        assert_eq!(animator.slot_state(0), SlotState::Completed);
    }

    #[test]
    fn test_restart_discards_previous_progress() {
        let mut animator: Animator<1> = Animator::new();
        animator.start(0, Duration::from_millis(100), Instant::from_millis(0));
        animator.start(0, Duration::from_millis(100), Instant::from_millis(50));

        let mut seen = 0.0;
        animator.update(Instant::from_millis(100), |param| seen = param.progress);
        assert!((seen - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_stop_all_goes_idle_without_painting() {
        let mut animator: Animator<2> = Animator::new();
        animator.start(0, Duration::from_millis(100), Instant::from_millis(0));
        animator.start(1, Duration::from_millis(100), Instant::from_millis(0));
        animator.stop_all();
        assert!(!animator.is_animating());
        assert_eq!(animator.slot_state(0), SlotState::Idle);

        let mut called = false;
        animator.update(Instant::from_millis(50), |_| called = true);
        assert!(!called);
    }

    #[test]
    fn test_slots_advance_independently() {
        let mut animator: Animator<2> = Animator::new();
        animator.start(0, Duration::from_millis(100), Instant::from_millis(0));
        animator.start(1, Duration::from_millis(200), Instant::from_millis(0));

        let mut states = [SlotState::Idle; 2];
        animator.update(Instant::from_millis(150), |param| {
            states[param.slot] = param.state;
        });
        assert_eq!(states[0], SlotState::Completed);
        assert_eq!(states[1], SlotState::Running);
    }

    #[test]
    fn test_zero_duration_completes_on_first_update() {
        let mut animator: Animator<1> = Animator::new();
        animator.start(0, Duration::from_millis(0), Instant::from_millis(10));

        let mut param_state = SlotState::Idle;
        animator.update(Instant::from_millis(10), |param| param_state = param.state);
        assert_eq!(param_state, SlotState::Completed);
    }

    #[test]
    fn test_easing_shapes_progress_but_not_completion() {
        let mut animator: Animator<1> = Animator::new().with_easing(ease_in_out_quad);
        animator.start(0, Duration::from_millis(100), Instant::from_millis(0));

        let mut seen = 0.0;
        animator.update(Instant::from_millis(25), |param| seen = param.progress);
        assert!((seen - 0.125).abs() < 1e-6);

        let mut state = SlotState::Idle;
        animator.update(Instant::from_millis(100), |param| state = param.state);
        assert_eq!(state, SlotState::Completed);
    }
}
