use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{FRAME_INTERVAL_MS, SPRING_DAMPING, SPRING_MASS, SPRING_STIFFNESS};

/// Rest threshold for values measured in pixels.
pub const PIXEL_REST: f64 = 0.5;
/// Rest threshold for values in `[0, 1]`.
pub const FRACTION_REST: f64 = 0.001;

/// Damped spring that chases a moving target between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    stiffness: f64,
    damping: f64,
    mass: f64,
    rest: f64,
    value: f64,
    velocity: f64,
}

impl Spring {
    /// A spring at rest on `initial`. It counts as settled once both the
    /// distance to the target and the speed drop below `rest`.
    pub fn new(initial: f64, rest: f64) -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
            rest,
            value: initial,
            velocity: 0.0,
        }
    }

    pub fn is_settled(&self, target: f64) -> bool {
        (target - self.value).abs() < self.rest && self.velocity.abs() < self.rest
    }

    /// Advances by `dt` seconds (semi-implicit Euler) and returns the new value.
    /// Snaps onto `target` once at rest.
    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        let force = -self.stiffness * (self.value - target) - self.damping * self.velocity;
        self.velocity += force / self.mass * dt;
        self.value += self.velocity * dt;

        if self.is_settled(target) {
            self.value = target;
            self.velocity = 0.0;
        }
        self.value
    }
}

/// Spring-smoothed copy of `target`. Ticks every frame only while unsettled.
#[hook]
pub fn use_spring(target: f64, rest: f64) -> f64 {
    let spring = use_mut_ref(|| Spring::new(target, rest));
    let value = use_state_eq(|| target);

    let animating = !spring.borrow().is_settled(target);
    {
        let spring = spring.clone();
        let value = value.clone();
        use_interval(
            move || {
                let next = spring.borrow_mut().step(target, FRAME_INTERVAL_MS as f64 / 1000.0);
                value.set(next);
            },
            if animating { FRAME_INTERVAL_MS } else { 0 },
        );
    }

    *value
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 0.016;

    fn run_until_settled(spring: &mut Spring, target: f64) -> Vec<f64> {
        let mut values = Vec::new();
        while !spring.is_settled(target) {
            values.push(spring.step(target, DT));
            assert!(values.len() < 300, "spring did not settle");
        }
        values
    }

    #[test]
    fn pixel_spring_settles_on_target_without_overshoot() {
        let mut spring = Spring::new(600.0, PIXEL_REST);
        let values = run_until_settled(&mut spring, 300.0);
        assert!(values.iter().all(|&v| v >= 300.0));
        assert_eq!(values.last(), Some(&300.0));
    }

    #[test]
    fn fraction_spring_tracks_progress_finely() {
        let mut spring = Spring::new(0.0, FRACTION_REST);
        // A pixel threshold would already call this settled.
        assert!(!spring.is_settled(0.4));

        let values = run_until_settled(&mut spring, 0.4);
        assert!(values.len() > 10);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.iter().all(|&v| v <= 0.4));
        assert_eq!(values.last(), Some(&0.4));
    }

    #[test]
    fn settled_spring_stays_put() {
        let mut spring = Spring::new(450.0, PIXEL_REST);
        assert!(spring.is_settled(450.0));
        assert_eq!(spring.step(450.0, DT), 450.0);
    }
}
