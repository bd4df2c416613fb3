//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! This module follows the hexagonal architecture pattern, providing concrete
//! implementations of domain port traits:
//!
//! - **dummyjson**: reqwest-backed remote user source
//! - **example_source**: offline user source over generated employees
//! - **storage**: directory-backed key/value store standing in for browser
//!   local storage
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod dummyjson;
pub mod example_source;
pub mod storage;
