//! Health Planner CLI Library
//!
//! Terminal front end and single-slot report storage around the core crate.
//! Exposed as a library for integration tests.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod store;
