//! Presentation Layer
//!
//! The `reset-admin` console: command tree, handlers and terminal output.

pub mod cli;
