//! ml-sweep: parametric sweeps over the mean-line model.
//!
//! Provides:
//! - Ranged and listed parameter values
//! - Cartesian sweep grids with fixed or swept speed, flow, slip and efficiency
//! - Sequential and rayon-parallel executors that keep each result's key
//!
//! # Example
//!
//! ```
//! use ml_model::{
//!     EmpiricalFactors, GasProperties, GeometryConstants, MeanLineModel, ValidationPolicy,
//! };
//! use ml_sweep::{SweepGrid, execute_sweep};
//!
//! let geometry = GeometryConstants::reference().unwrap();
//! let gas = GasProperties::standard_air().unwrap();
//! let grid = SweepGrid::operating_map(
//!     vec![60_000.0, 70_000.0],
//!     vec![0.1, 0.2],
//!     EmpiricalFactors::new(0.92, 0.76),
//! )
//! .unwrap();
//!
//! let model = MeanLineModel::new(&geometry, &gas);
//! let result = execute_sweep(model, &grid, ValidationPolicy::Unchecked);
//! assert_eq!(result.records.len(), 4);
//! ```

pub mod error;
pub mod executor;
pub mod grid;
pub mod sweeps;

pub use error::{SweepConfigResult, SweepError};
pub use executor::{SweepRecord, SweepResult, execute_sweep, execute_sweep_parallel};
pub use grid::{SweepGrid, SweepKey, for_each_combination, map_combinations};
pub use sweeps::{ParameterValues, SweepDefinition, SweepType};
