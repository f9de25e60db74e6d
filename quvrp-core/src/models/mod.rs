//! A collection of models to represent problem and solution in Vehicle Routing Problem domain.

pub mod problem;
pub mod solution;
