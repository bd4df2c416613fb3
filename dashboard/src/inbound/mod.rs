//! Inbound adapters that translate operator input into domain service calls
//! while keeping framework details at the edge.
//!
//! The command-line front end lives under [`cli`].

pub mod cli;
