//! A collection of algorithm building blocks.

pub mod qubo;
