//! Core training abstraction shared by all workout variants.
//!
//! A training is an immutable record of raw sensor values; distance, mean
//! speed, and calories are derived on demand and never stored.

use crate::report::WorkoutSummary;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour; the calorie formulas work in minutes.
pub const MIN_IN_H: f64 = 60.0;

/// Default stride length in meters (running and sports walking).
pub const LEN_STEP: f64 = 0.65;

/// A single recorded workout, able to derive its summary metrics.
///
/// The provided methods implement the common step-based distance and the
/// distance-over-duration mean speed. Swimming overrides both the stride
/// length (stroke length) and the speed basis (pool laps).
pub trait Training: std::fmt::Debug {
    /// Training type label used verbatim in the summary line.
    fn label(&self) -> &'static str;

    /// Step or stroke count reported by the sensor.
    fn action(&self) -> u32;

    /// Workout duration in hours. Must be positive; the speed and calorie
    /// formulas divide by it.
    fn duration_hours(&self) -> f64;

    /// Athlete weight in kilograms.
    fn weight_kg(&self) -> f64;

    /// Stride or stroke length in meters.
    fn step_length_m(&self) -> f64 {
        LEN_STEP
    }

    /// Distance covered, in kilometers.
    fn distance_km(&self) -> f64 {
        self.action() as f64 * self.step_length_m() / M_IN_KM
    }

    /// Mean speed over the workout, in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_hours()
    }

    /// Estimated energy expenditure, in kilocalories.
    fn calories_kcal(&self) -> f64;

    /// Derive the displayable summary for this workout.
    fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            label: self.label(),
            duration_hours: self.duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}
