//! Damped spring used for settle and exit animations.
//!
//! Each animated axis owns one [`Spring`]. Springs are stepped with a fixed
//! sub-step so that frame hitches don't blow up the integration.

use serde::{Deserialize, Serialize};

/// Largest integration step in seconds.
const MAX_SUBSTEP: f64 = 1.0 / 240.0;

/// Physical parameters of a spring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    /// Velocity-proportional friction.
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Displacement-proportional pull toward the target.
    #[serde(default = "default_stiffness")]
    pub stiffness: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
    /// Distance from the target under which the spring may come to rest.
    #[serde(default = "default_rest_displacement")]
    pub rest_displacement: f64,
    /// Speed under which the spring may come to rest (units per second).
    #[serde(default = "default_rest_speed")]
    pub rest_speed: f64,
}

fn default_damping() -> f64 {
    15.0
}

fn default_stiffness() -> f64 {
    150.0
}

fn default_mass() -> f64 {
    1.0
}

fn default_rest_displacement() -> f64 {
    0.01
}

fn default_rest_speed() -> f64 {
    2.0
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            stiffness: default_stiffness(),
            mass: default_mass(),
            rest_displacement: default_rest_displacement(),
            rest_speed: default_rest_speed(),
        }
    }
}

/// One animated scalar pulled toward a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl Spring {
    /// Starts at rest at `from`, heading for `to`.
    pub fn new(from: f64, to: f64, config: SpringConfig) -> Self {
        Self {
            position: from,
            velocity: 0.0,
            target: to,
            config,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// True once both displacement and speed are under the rest thresholds.
    pub fn is_settled(&self) -> bool {
        (self.position - self.target).abs() <= self.config.rest_displacement
            && self.velocity.abs() <= self.config.rest_speed
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Snaps exactly onto the target once the spring comes to rest.
    pub fn step(&mut self, dt: f64) {
        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
            return;
        }

        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let displacement = self.position - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            // semi-implicit Euler
            self.velocity += force / self.config.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }
}
