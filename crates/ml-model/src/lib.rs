//! ml-model: one-dimensional mean-line model of a centrifugal compressor stage.
//!
//! Provides:
//! - Stage geometry with derived annulus areas
//! - Calorically perfect gas constants with derived cp and inlet density
//! - The mean-line evaluator (velocity triangle, Euler work, pressure ratio)
//! - An optional validating wrapper
//!
//! The evaluator is a pure function of its inputs. Geometry and gas are
//! immutable values passed by reference, so any number of configurations
//! can coexist in one process.
//!
//! # Example
//!
//! ```
//! use ml_model::{EmpiricalFactors, GasProperties, GeometryConstants, OperatingPoint, evaluate};
//!
//! let geometry = GeometryConstants::reference().unwrap();
//! let gas = GasProperties::standard_air().unwrap();
//!
//! let result = evaluate(
//!     &OperatingPoint::new(70_000.0, 0.2),
//!     &EmpiricalFactors::new(0.92, 0.76),
//!     &geometry,
//!     &gas,
//! );
//! assert!(result.pressure_ratio > 1.0);
//! ```

pub mod error;
pub mod evaluator;
pub mod gas;
pub mod geometry;
pub mod validate;

// Re-exports
pub use error::{ModelError, ModelResult};
pub use evaluator::{
    EmpiricalFactors, MeanLineModel, OperatingPoint, PerformanceResult, evaluate, evaluate_raw,
};
pub use gas::GasProperties;
pub use geometry::{Annulus, GeometryConstants, flow_area};
pub use validate::{ValidationPolicy, check_factors, check_operating_point, evaluate_checked};
