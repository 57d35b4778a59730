//! Empirical running-time comparison of classic in-memory sorting
//! algorithms across synthetic input distributions.
//!
//! The core is three pieces: the scenario generator producing the input
//! shapes under test, the sorting-algorithm collection behind a uniform
//! contract, and the benchmark harness timing the cross product of
//! scenarios, window lengths and algorithms. Formatting and persistence of
//! the resulting table are left to the caller.

pub mod error;
pub mod generator;
pub mod harness;
pub mod registry;
pub mod scenarios;
pub mod sorts;

pub use error::Error;
pub use harness::{run, Measurement, RunConfig, ScenarioReport, SizeRow};
pub use scenarios::Scenario;
pub use sorts::Algorithm;
