// Library interface for FitRS modules
// This allows integration tests to access the core functionality

pub mod decode;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
pub mod running;
pub mod swimming;
pub mod walking;

// Re-export commonly used types for convenience
pub use decode::{read_packages, Package, PackageFormat};
pub use dispatch::{read_package, registry, RegistryEntry};
pub use error::{DecodeError, DispatchError, FitrsError, Result};
pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
pub use models::Training;
pub use report::WorkoutSummary;
pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;
