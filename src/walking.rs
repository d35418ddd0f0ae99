//! Sports walking workout variant.

use crate::models::{Training, MIN_IN_H};

/// Sports walking workout; the calorie estimate additionally depends on
/// the athlete's height.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    /// Step count reported by the sensor.
    pub action: u32,
    /// Workout duration in hours.
    pub duration_hours: f64,
    /// Athlete weight in kilograms.
    pub weight_kg: f64,
    /// Athlete height in centimeters.
    pub height_cm: f64,
}

impl SportsWalking {
    /// Weight coefficient of the calorie estimate.
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Coefficient of the speed-squared-over-height term.
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    /// km/h to m/s conversion factor.
    pub const KMH_IN_MSEC: f64 = 0.278;
    /// Centimeters in a meter.
    pub const CM_IN_M: f64 = 100.0;

    pub fn new(action: u32, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            action,
            duration_hours,
            weight_kg,
            height_cm,
        }
    }
}

impl Training for SportsWalking {
    fn label(&self) -> &'static str {
        "SportsWalking"
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
        let speed_msec = Self::KMH_IN_MSEC * self.mean_speed_kmh();
        let height_m = self.height_cm / Self::CM_IN_M;
        (Self::CALORIES_WEIGHT_MULTIPLIER * self.weight_kg
            + speed_msec.powi(2) / height_m
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.weight_kg)
            * self.duration_hours
            * MIN_IN_H
    }
}
