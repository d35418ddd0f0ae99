//! Workout registry and sensor package dispatch.
//!
//! The registry is a fixed table mapping a workout code to the variant's
//! constructor and its required reading count. Dispatch validates first
//! and constructs second; an invalid package never partially constructs.

use crate::error::DispatchError;
use crate::models::Training;
use crate::running::Running;
use crate::swimming::Swimming;
use crate::walking::SportsWalking;

/// Constructor turning an arity-checked reading slice into a training.
type Build = fn(&[f64]) -> Box<dyn Training>;

/// One workout type known to the dispatcher.
pub struct RegistryEntry {
    /// Short sensor code identifying the activity.
    pub code: &'static str,
    /// Training type label produced by the variant.
    pub label: &'static str,
    /// Number of readings the variant is constructed from.
    pub arity: usize,
    build: Build,
}

// Readings are assigned positionally: (action, duration, weight[, height
// | pool_length, pool_count]). Arity is checked by read_package before
// any build function runs.

fn build_running(data: &[f64]) -> Box<dyn Training> {
    Box::new(Running::new(data[0] as u32, data[1], data[2]))
}

fn build_walking(data: &[f64]) -> Box<dyn Training> {
    Box::new(SportsWalking::new(data[0] as u32, data[1], data[2], data[3]))
}

fn build_swimming(data: &[f64]) -> Box<dyn Training> {
    Box::new(Swimming::new(
        data[0] as u32,
        data[1],
        data[2],
        data[3],
        data[4] as u32,
    ))
}

/// Fixed table of supported workout types.
const REGISTRY: &[RegistryEntry] = &[
    RegistryEntry {
        code: "RUN",
        label: "Running",
        arity: 3,
        build: build_running,
    },
    RegistryEntry {
        code: "WLK",
        label: "SportsWalking",
        arity: 4,
        build: build_walking,
    },
    RegistryEntry {
        code: "SWM",
        label: "Swimming",
        arity: 5,
        build: build_swimming,
    },
];

/// Registered workout types, in display order.
pub fn registry() -> &'static [RegistryEntry] {
    REGISTRY
}

/// Decode a sensor package into the matching training instance.
///
/// Fails with [`DispatchError::UnknownWorkoutType`] for an unregistered
/// code and [`DispatchError::ArgumentCountMismatch`] when the reading
/// count differs from the variant's field count.
pub fn read_package(
    workout_type: &str,
    data: &[f64],
) -> Result<Box<dyn Training>, DispatchError> {
    let entry = REGISTRY
        .iter()
        .find(|entry| entry.code == workout_type)
        .ok_or_else(|| DispatchError::UnknownWorkoutType {
            code: workout_type.to_string(),
        })?;

    if data.len() != entry.arity {
        return Err(DispatchError::ArgumentCountMismatch {
            code: workout_type.to_string(),
            expected: entry.arity,
            actual: data.len(),
        });
    }

    tracing::debug!(code = workout_type, readings = data.len(), "dispatching sensor package");
    Ok((entry.build)(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn run_package_dispatches_to_running() {
        let training = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(training.label(), "Running");
        assert!((training.calories_kcal() - 797.805).abs() < 1e-6);
    }

    #[test]
    fn wlk_package_dispatches_to_walking() {
        let training = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(training.label(), "SportsWalking");
    }

    #[test]
    fn swm_package_dispatches_to_swimming() {
        let training = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(training.label(), "Swimming");
        assert!((training.mean_speed_kmh() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = read_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            DispatchError::UnknownWorkoutType {
                code: "XYZ".to_string()
            }
        );
    }

    #[test]
    fn code_matching_is_case_sensitive() {
        let err = read_package("run", &[15000.0, 1.0, 75.0]).unwrap_err();
        assert!(matches!(err, DispatchError::UnknownWorkoutType { .. }));
    }

    #[test]
    fn wrong_reading_count_is_rejected_before_construction() {
        let err = read_package("WLK", &[9000.0, 1.0, 75.0]).unwrap_err();
        assert_eq!(
            err,
            DispatchError::ArgumentCountMismatch {
                code: "WLK".to_string(),
                expected: 4,
                actual: 3,
            }
        );
    }

    #[test]
    fn registry_arities_match_the_variants() {
        let expected = [("RUN", 3), ("WLK", 4), ("SWM", 5)];
        for (entry, (code, arity)) in registry().iter().zip(expected) {
            assert_eq!(entry.code, code);
            assert_eq!(entry.arity, arity);
        }
    }

    proptest! {
        /// Any registered code with the exact reading count constructs its
        /// variant; the readings only need a positive duration.
        #[test]
        fn exact_arity_always_dispatches(values in prop::collection::vec(0.5f64..10_000.0, 5)) {
            for entry in registry() {
                let training = read_package(entry.code, &values[..entry.arity]).unwrap();
                prop_assert_eq!(training.label(), entry.label);
            }
        }

        #[test]
        fn wrong_arity_never_constructs(
            values in prop::collection::vec(0.5f64..10_000.0, 7),
            len in 0usize..=7,
        ) {
            for entry in registry() {
                if len == entry.arity {
                    continue;
                }
                let err = read_package(entry.code, &values[..len]).unwrap_err();
                prop_assert!(
                    matches!(
                        err,
                        DispatchError::ArgumentCountMismatch { expected, actual, .. }
                            if expected == entry.arity && actual == len
                    ),
                    "expected ArgumentCountMismatch for code {} with len {}",
                    entry.code,
                    len
                );
            }
        }
    }
}
