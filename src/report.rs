//! Workout summary rendering.
//!
//! The summary is a fixed single-line template; every numeric field is
//! rendered with exactly three decimal places and a `.` decimal point.

use std::fmt;

/// Immutable report message derived from a single workout.
///
/// Holds the training type label and the four metrics; consumed only to
/// produce display text.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSummary {
    /// Training type label, substituted verbatim.
    pub label: &'static str,

    /// Workout duration in hours.
    pub duration_hours: f64,

    /// Distance covered in kilometers.
    pub distance_km: f64,

    /// Mean speed in km/h.
    pub mean_speed_kmh: f64,

    /// Calories burned in kilocalories.
    pub calories_kcal: f64,
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.label,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}
