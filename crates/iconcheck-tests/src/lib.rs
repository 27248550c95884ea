//! iconcheck End-to-End Test Infrastructure
//!
//! Builds throwaway asset catalogs on disk and runs the `iconcheck` binary
//! against them.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p iconcheck-tests
//! ```

pub mod fixtures;
pub mod harness;
