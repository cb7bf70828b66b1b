//! Shared helpers for the skill's integration tests.

pub mod datasets;
pub mod logging;
