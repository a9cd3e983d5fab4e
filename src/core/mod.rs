//! Core application primitives (pipeline, orchestrating runtime)

pub mod pipeline;
pub mod runtime;

pub use pipeline::*;
pub use runtime::*;
