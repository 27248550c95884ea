//! iconcheck CLI library.
//!
//! Resolves which asset catalog to check and renders validation results for
//! the `iconcheck` binary.

pub mod commands;
pub mod location;
