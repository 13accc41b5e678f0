// Animation timing as pure math. Callers sample `opacity`/`offset` with a
// clock of their choosing each frame; nothing here schedules or draws.

use std::time::{Duration, Instant};

/// Default transition length used by fades and slides.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto the eased curve. Input outside
    /// the unit interval is clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// Progress of a single time-boxed animation. Zero duration completes
/// immediately.
#[derive(Debug, Clone, Copy)]
pub struct Animation {
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl Animation {
    pub fn new(start: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            start,
            duration,
            easing,
        }
    }

    /// Eased progress in `[0, 1]` at `now`. Sampling before `start` reads 0,
    /// after the end 1.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        let linear = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        self.easing.apply(linear)
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    In,
    Out,
}

/// Opacity ramp for showing or hiding an element.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    animation: Animation,
    direction: FadeDirection,
}

impl Fade {
    pub fn fade_in(start: Instant, duration: Duration) -> Self {
        Self {
            animation: Animation::new(start, duration, Easing::EaseOut),
            direction: FadeDirection::In,
        }
    }

    pub fn fade_out(start: Instant, duration: Duration) -> Self {
        Self {
            animation: Animation::new(start, duration, Easing::EaseOut),
            direction: FadeDirection::Out,
        }
    }

    /// Opacity in `[0, 1]` at `now`: rising for fade-in, falling for fade-out.
    pub fn opacity(&self, now: Instant) -> f32 {
        let progress = self.animation.progress(now);
        match self.direction {
            FadeDirection::In => progress,
            FadeDirection::Out => 1.0 - progress,
        }
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        self.animation.is_complete(now)
    }
}

/// Horizontal slide-in from the left edge. `offset` is the fraction of the
/// travel distance still to cover: -1.0 fully off-screen, 0.0 at rest.
#[derive(Debug, Clone, Copy)]
pub struct Slide {
    animation: Animation,
}

impl Slide {
    pub fn from_left(start: Instant, duration: Duration) -> Self {
        Self {
            animation: Animation::new(start, duration, Easing::EaseOut),
        }
    }

    pub fn offset(&self, now: Instant) -> f32 {
        self.animation.progress(now) - 1.0
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        self.animation.is_complete(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            // Clamped outside the unit interval.
            assert_eq!(easing.apply(-0.5), 0.0);
            assert_eq!(easing.apply(1.5), 1.0);
        }
    }

    #[test]
    fn test_easing_is_monotonic() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            let mut last = 0.0;
            for step in 0..=20 {
                let value = easing.apply(step as f32 / 20.0);
                assert!(value >= last, "{easing:?} decreased at step {step}");
                last = value;
            }
        }
    }

    #[test]
    fn test_animation_progress_over_time() {
        let start = Instant::now();
        let animation = Animation::new(start, Duration::from_millis(300), Easing::Linear);

        assert_eq!(animation.progress(start), 0.0);
        let halfway = animation.progress(start + Duration::from_millis(150));
        assert!((halfway - 0.5).abs() < 1e-3);
        assert_eq!(animation.progress(start + Duration::from_millis(300)), 1.0);
        assert_eq!(animation.progress(start + Duration::from_secs(5)), 1.0);
        assert!(animation.is_complete(start + Duration::from_millis(300)));
        assert!(!animation.is_complete(start + Duration::from_millis(299)));
    }

    #[test]
    fn test_sampling_before_start_reads_zero() {
        let start = Instant::now() + Duration::from_secs(10);
        let animation = Animation::new(start, Duration::from_millis(300), Easing::Linear);
        assert_eq!(animation.progress(Instant::now()), 0.0);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let start = Instant::now();
        let fade = Fade::fade_out(start, Duration::ZERO);
        assert_eq!(fade.opacity(start), 0.0);
        assert!(fade.is_complete(start));
    }

    #[test]
    fn test_fade_directions() {
        let start = Instant::now();
        let duration = Duration::from_millis(300);
        let fade_in = Fade::fade_in(start, duration);
        let fade_out = Fade::fade_out(start, duration);

        assert_eq!(fade_in.opacity(start), 0.0);
        assert_eq!(fade_out.opacity(start), 1.0);

        let end = start + duration;
        assert_eq!(fade_in.opacity(end), 1.0);
        assert_eq!(fade_out.opacity(end), 0.0);

        let mid = start + duration / 2;
        assert!(fade_in.opacity(mid) > 0.0 && fade_in.opacity(mid) < 1.0);
        assert!(fade_out.opacity(mid) > 0.0 && fade_out.opacity(mid) < 1.0);
    }

    #[test]
    fn test_slide_travels_from_left_to_rest() {
        let start = Instant::now();
        let slide = Slide::from_left(start, Duration::from_millis(300));
        assert_eq!(slide.offset(start), -1.0);
        let mid = slide.offset(start + Duration::from_millis(150));
        assert!(mid > -1.0 && mid < 0.0);
        assert_eq!(slide.offset(start + Duration::from_millis(300)), 0.0);
    }
}
