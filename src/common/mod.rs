//! Small numeric helpers shared across indicators and reporting

pub mod math;
