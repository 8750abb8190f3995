//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! report to the writer they are given; diagnostics go through `tracing`.

pub mod arrays;
pub mod bias;
pub mod pointers;
pub mod relax;
pub mod seeds;
