//! Shared test utilities for roadmap integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Searches that depend on "now" use a `FixedClock` so
//! results are deterministic.

pub mod assertions;
pub mod builders;
pub mod fake_upstream;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
