//! Infrastructure layer: in-memory product store and configuration files.

pub mod config;
pub mod read_model;
