#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::FramePacer;
    use std::thread::sleep;
    use std::time::{Duration, Instant};

    #[test]
    fn test_pacer_period() {
        assert_eq!(FramePacer::new(50).period(), Duration::from_millis(20));
        // Zero is clamped to one frame per second
        assert_eq!(FramePacer::new(0).period(), Duration::from_secs(1));
    }

    #[test]
    fn test_wait_for_next_frame_keeps_rate() {
        let mut pacer = FramePacer::new(100);
        let start = Instant::now();
        for _ in 0..5 {
            pacer.wait_for_next_frame();
        }
        let elapsed = start.elapsed();

        // Five 10ms frames, with a generous margin for scheduling
        assert!(elapsed >= Duration::from_millis(40), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(500), "{elapsed:?}");
    }

    #[test]
    fn test_late_caller_is_resynchronised() {
        let mut pacer = FramePacer::new(100);
        sleep(Duration::from_millis(50));

        // Behind schedule: returns at once instead of sleeping
        let start = Instant::now();
        pacer.wait_for_next_frame();
        assert!(start.elapsed() < Duration::from_millis(10));

        // The next frame is a full period away again
        let start = Instant::now();
        pacer.wait_for_next_frame();
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
