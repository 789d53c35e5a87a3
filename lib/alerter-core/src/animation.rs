use std::time::{Duration, Instant};

/// Trait for types that can be interpolated.
pub trait Interpolatable: Sized + Clone {
    fn interpolate(&self, target: &Self, t: f64) -> Self;
}

impl Interpolatable for f64 {
    fn interpolate(&self, target: &Self, t: f64) -> Self {
        self + (target - self) * t
    }
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - 4.0 * (1.0 - t) * (1.0 - t) * (1.0 - t)
    }
}

/// Frame-driven animator. Callers pass the frame instant in, so the same animator
/// works for the real UI turn and for tests that fast-forward time.
pub struct Animator<T, F>
where
    T: Interpolatable,
    F: Fn(f64) -> f64,
{
    pub from: T,
    pub to: T,
    pub duration: Duration,
    pub start_time: Option<Instant>,
    pub ease_fn: F,
    pub animating: bool,
    pub last_value: T,
}

impl<T, F> Animator<T, F>
where
    T: Interpolatable,
    F: Fn(f64) -> f64,
{
    pub fn new(value: T, ease_fn: F) -> Self {
        Self {
            from: value.clone(),
            to: value.clone(),
            duration: Duration::ZERO,
            start_time: None,
            ease_fn,
            animating: false,
            last_value: value,
        }
    }

    /// Animates from the last produced value towards `to`.
    pub fn start_at(&mut self, to: T, duration: Duration, now: Instant) {
        let from = self.last_value.clone();
        self.from = from;
        self.to = to;
        self.duration = duration;
        self.start_time = Some(now);
        self.animating = true;
    }

    /// Returns Some(new_value) if animating, None if finished
    pub fn update_at(&mut self, now: Instant) -> Option<T> {
        if !self.animating {
            return None;
        }

        let Some(start) = self.start_time else {
            self.animating = false;
            return None;
        };

        if self.duration.is_zero() {
            self.animating = false;
            self.last_value = self.to.clone();
            return Some(self.to.clone());
        }

        let elapsed = now.saturating_duration_since(start).as_secs_f64();
        let mut t = (elapsed / self.duration.as_secs_f64()).clamp(0.0, 1.0);
        if t >= 1.0 {
            t = 1.0;
            self.animating = false;
        }
        let eased_t = (self.ease_fn)(t);
        let value = self.from.interpolate(&self.to, eased_t);
        self.last_value = value.clone();
        Some(value)
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn current_value(&self) -> &T {
        &self.last_value
    }
}
