//! HR dashboard library modules.
//!
//! The domain holds the session gate, bookmark store and listing
//! derivations; `outbound` adapts storage and the remote user service;
//! `inbound::cli` is the command-line front end.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod telemetry;

pub use config::DashboardSettings;
