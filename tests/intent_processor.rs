mod tests {
    use myrtio_word_clock::channel::{TryReceiveError, TrySendError};
    use myrtio_word_clock::{
        DisplayIntent, FadeState, GlobalBrightness, IntentChannel, IntentProcessor, SegmentSet,
        TimeOfDay, TransitionEngine, compose,
    };

    #[test]
    fn test_channel_bounds() {
        let channel = IntentChannel::<2>::new();
        let sender = channel.sender();
        let receiver = channel.receiver();
        assert_eq!(sender.try_send(DisplayIntent::BrightnessUp), Ok(()));
        assert_eq!(sender.try_send(DisplayIntent::BrightnessDown), Ok(()));
        assert_eq!(
            sender.try_send(DisplayIntent::SetBrightness(3)),
            Err(TrySendError(DisplayIntent::SetBrightness(3)))
        );
        assert_eq!(channel.len(), 2);

        assert_eq!(
            sender.send_evicting(DisplayIntent::SetBrightness(3)),
            Some(DisplayIntent::BrightnessUp)
        );
        assert_eq!(receiver.try_receive(), Ok(DisplayIntent::BrightnessDown));
        assert_eq!(receiver.try_receive(), Ok(DisplayIntent::SetBrightness(3)));
        assert_eq!(receiver.try_receive(), Err(TryReceiveError));
        assert!(receiver.is_empty());
    }

    #[test]
    fn test_show_time_starts_fade() {
        let channel = IntentChannel::<4>::new();
        let mut processor = IntentProcessor::new(channel.receiver());
        let mut engine = TransitionEngine::new();
        let mut brightness = GlobalBrightness::default();
        let time = TimeOfDay::new(5, 20).unwrap();

        channel.try_send(DisplayIntent::ShowTime(time)).unwrap();
        let effects = processor.process_pending(&mut engine, &mut brightness);

        assert!(!effects.has_effects());
        assert_eq!(engine.session().state(), FadeState::FadingOut);
        assert_eq!(engine.session().incoming_mask(), compose(time));
    }

    #[test]
    fn test_show_segments() {
        let channel = IntentChannel::<4>::new();
        let mut processor = IntentProcessor::new(channel.receiver());
        let mut engine = TransitionEngine::new();
        let mut brightness = GlobalBrightness::default();

        channel
            .try_send(DisplayIntent::ShowSegments(SegmentSet::ALL))
            .unwrap();
        processor.process_pending(&mut engine, &mut brightness);
        assert_eq!(engine.session().resolved(), SegmentSet::ALL);
    }

    #[test]
    fn test_jump_resolves_immediately() {
        let channel = IntentChannel::<4>::new();
        let mut processor = IntentProcessor::new(channel.receiver());
        let mut engine = TransitionEngine::new();
        let mut brightness = GlobalBrightness::default();
        let time = TimeOfDay::new(10, 50).unwrap();

        channel
            .try_send(DisplayIntent::ShowTime(TimeOfDay::MIDNIGHT))
            .unwrap();
        channel.try_send(DisplayIntent::JumpToTime(time)).unwrap();
        let effects = processor.process_pending(&mut engine, &mut brightness);

        assert_eq!(effects.immediate_frame, Some(compose(time)));
        assert_eq!(engine.session().displayed(), compose(time));
        assert_eq!(engine.session().state(), FadeState::Standby);
    }

    #[test]
    fn test_first_brightness_step_wins() {
        let channel = IntentChannel::<4>::new();
        let mut processor = IntentProcessor::new(channel.receiver());
        let mut engine = TransitionEngine::new();
        let mut brightness = GlobalBrightness::new(50);

        channel.try_send(DisplayIntent::BrightnessDown).unwrap();
        channel.try_send(DisplayIntent::BrightnessUp).unwrap();
        channel.try_send(DisplayIntent::BrightnessDown).unwrap();
        let effects = processor.process_pending(&mut engine, &mut brightness);

        assert!(effects.brightness_changed);
        assert_eq!(brightness.target(), 49);
    }

    #[test]
    fn test_brightness_limits() {
        let channel = IntentChannel::<4>::new();
        let mut processor = IntentProcessor::new(channel.receiver());
        let mut engine = TransitionEngine::new();
        let mut brightness = GlobalBrightness::new(0);
        assert_eq!(brightness.target(), 2);

        channel.try_send(DisplayIntent::BrightnessDown).unwrap();
        let effects = processor.process_pending(&mut engine, &mut brightness);
        assert!(!effects.brightness_changed);
        assert_eq!(brightness.target(), 2);

        brightness.set(127);
        channel.try_send(DisplayIntent::BrightnessUp).unwrap();
        let effects = processor.process_pending(&mut engine, &mut brightness);
        assert!(!effects.brightness_changed);
        assert_eq!(brightness.target(), 127);
    }
}
