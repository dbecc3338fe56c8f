//! Damped spring over a 2D offset.

use cardstack_core::Offset;

/// Integration substep cap; long frames are split so stiff springs stay
/// numerically stable.
const MAX_SUBSTEP_S: f32 = 0.008;

/// Position settle tolerance in px.
const POSITION_EPSILON: f32 = 0.5;

/// Velocity settle tolerance in px/s.
const VELOCITY_EPSILON: f32 = 5.0;

/// A damped spring pulling an [`Offset`] towards a target.
///
/// Advanced by `step(dt)` with semi-implicit Euler integration. Unlike a
/// tween, the response shape depends on the starting displacement and
/// velocity, not on a fixed duration.
#[derive(Debug, Clone)]
pub struct Spring {
    position: Offset,
    velocity: Offset,
    target: Offset,
    stiffness: f32,
    damping: f32,
}

impl Spring {
    /// `damping_ratio` of 1.0 is critically damped; below 1.0 overshoots.
    pub fn new(position: Offset, target: Offset, stiffness: f32, damping_ratio: f32) -> Self {
        let stiffness = stiffness.max(1.0);
        let damping = 2.0 * damping_ratio.max(0.0) * stiffness.sqrt();
        Self {
            position,
            velocity: Offset::ZERO,
            target,
            stiffness,
            damping,
        }
    }

    pub fn with_velocity(mut self, velocity: Offset) -> Self {
        self.velocity = velocity;
        self
    }

    /// Advances the simulation by `dt` seconds and returns the new position.
    /// Snaps to the target once within the settle tolerances.
    pub fn step(&mut self, dt: f32) -> Offset {
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 && !self.is_settled() {
            let h = remaining.min(MAX_SUBSTEP_S);
            let displacement = self.position - self.target;
            let acceleration = -(displacement * self.stiffness) - self.velocity * self.damping;
            self.velocity += acceleration * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        if self.is_settled() {
            self.finish();
        }
        self.position
    }

    pub fn position(&self) -> Offset {
        self.position
    }

    pub fn is_settled(&self) -> bool {
        (self.position - self.target).abs_max() < POSITION_EPSILON
            && self.velocity.abs_max() < VELOCITY_EPSILON
    }

    /// Forces the spring onto its target, e.g. when a settle deadline hits.
    pub fn finish(&mut self) {
        self.position = self.target;
        self.velocity = Offset::ZERO;
    }
}
