//! Configuration modules for the faculty directory.
//!
//! Configuration is read from environment variables once at startup. See
//! each submodule for specific variable names and their defaults; session
//! configuration lives in the `facultydir-session` crate.

pub mod server;
