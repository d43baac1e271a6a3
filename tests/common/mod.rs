//! Shared test utilities for marksink integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Every sink built here writes into a `tempfile`
//! directory that is removed when the returned guard drops.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
