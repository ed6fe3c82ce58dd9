//! Initialization logic for the logging of the workspace binaries as well as
//! logging helper functions.

pub mod tracing;
