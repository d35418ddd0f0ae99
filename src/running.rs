//! Running workout variant.

use crate::models::{Training, M_IN_KM, MIN_IN_H};

/// Running workout built from a step-counter package.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    /// Step count reported by the sensor.
    pub action: u32,
    /// Workout duration in hours.
    pub duration_hours: f64,
    /// Athlete weight in kilograms.
    pub weight_kg: f64,
}

impl Running {
    /// Multiplier applied to mean speed in the calorie estimate.
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    /// Shift added to the scaled mean speed in the calorie estimate.
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_hours,
            weight_kg,
        }
    }
}

impl Training for Running {
    fn label(&self) -> &'static str {
        "Running"
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

    fn calories_kcal(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.weight_kg
            / M_IN_KM
            * self.duration_hours
            * MIN_IN_H
    }
}
