//! Deterministic example employee data for offline demonstration.
//!
//! This crate generates believable, reproducible employee records from a
//! `u64` seed so the dashboard can run without network access and tests
//! have realistic fixtures. It is independent of dashboard domain types to
//! avoid a dependency cycle; the dashboard converts records at the point of
//! use.
//!
//! # Example
//!
//! ```
//! use example_data::generate_example_employees;
//!
//! let employees = generate_example_employees(42, 3).expect("generation succeeds");
//! assert_eq!(employees.len(), 3);
//! assert_eq!(employees[0].id, 1);
//! ```

mod catalogue;
mod error;
mod generator;
mod seed;

pub use catalogue::{COUNTRIES, DEPARTMENTS, ROLES, TITLES};
pub use error::GenerationError;
pub use generator::{MAX_EMPLOYEES, generate_example_employees};
pub use seed::ExampleEmployeeSeed;
