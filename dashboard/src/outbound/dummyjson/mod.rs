//! DummyJSON outbound adapter.
//!
//! This module provides a thin HTTP implementation of the `UserSource` port
//! against the public DummyJSON users dataset.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_ENDPOINT, DummyJsonUserSource};
