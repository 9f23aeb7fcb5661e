//! # helix_core - Helical Gear Reducer Calculation Engine
//!
//! `helix_core` sizes two-stage helical gear reducers: ratio split, module
//! selection and strength check per stage, gear shafts with keyways, and
//! rolling bearing life. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Static data**: Tables and catalogs are built once and never mutated
//!
//! ## Quick Start
//!
//! ```rust
//! use helix_core::calculations::reducer::{size_reducer, ReducerInput, ReducerStageDesign};
//! use helix_core::DesignConstants;
//!
//! let input = ReducerInput::new(
//!     7.5,
//!     1450.0,
//!     100.0,
//!     ReducerStageDesign::new(15.0, "DIN 17 200, 42 CrMo 4", 0.6),
//!     ReducerStageDesign::new(12.0, "DIN 17 200, 42 CrMo 4", 0.8),
//! );
//! let result = size_reducer(&input, &DesignConstants::default()).unwrap();
//! println!("modules {} / {} mm", result.stage1.module_mm, result.stage2.module_mm);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Ratio split, gear stage, reducer, bearing and shaft calculations
//! - [`equations`] - Gear, shaft and bearing formulas
//! - [`tables`] - Form factor, helix factor, standard series, keyways
//! - [`factors`] - Working factor and design constants
//! - [`materials`] - Gear-grade and general-structural material catalogs
//! - [`bearings`] - Rolling bearing catalog
//! - [`export`] - Drafting data records
//! - [`errors`] - Structured error types

pub mod bearings;
pub mod calculations;
pub mod equations;
pub mod errors;
pub mod export;
pub mod factors;
pub mod materials;
pub mod tables;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationOutput, CalculationRequest};
pub use errors::{CalcError, CalcResult};
pub use factors::DesignConstants;
