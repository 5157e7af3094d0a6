//! Shared fixtures for the advocate directory test suites.

pub mod fixtures;
pub mod sandbox;
