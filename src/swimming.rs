//! Swimming workout variant.
//!
//! Swimming diverges from the land workouts twice: distance is derived
//! from the stroke count with a longer per-stroke length, while mean speed
//! is derived from pool laps and is independent of the stroke count.

use crate::models::{Training, M_IN_KM};

/// Pool swimming workout.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    /// Stroke count reported by the sensor.
    pub action: u32,
    /// Workout duration in hours.
    pub duration_hours: f64,
    /// Athlete weight in kilograms.
    pub weight_kg: f64,
    /// Pool length in meters.
    pub pool_length_m: f64,
    /// Number of completed pool lengths.
    pub pool_count: u32,
}

impl Swimming {
    /// Stroke length in meters, replacing the default stride length.
    pub const LEN_STEP: f64 = 1.38;
    /// Shift added to mean speed in the calorie estimate.
    pub const CALORIES_SPEED_SHIFT: f64 = 1.1;
    /// Weight multiplier of the calorie estimate.
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_count: u32,
    ) -> Self {
        Self {
            action,
            duration_hours,
            weight_kg,
            pool_length_m,
            pool_count,
        }
    }
}

impl Training for Swimming {
    fn label(&self) -> &'static str {
        "Swimming"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn step_length_m(&self) -> f64 {
        Self::LEN_STEP
    }

    /// Lap-based speed, computed independently of the stroke distance.
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_count as f64 / M_IN_KM / self.duration_hours
    }

    fn calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.weight_kg
            * self.duration_hours
    }
}
