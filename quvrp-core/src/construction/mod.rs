//! Contains functionality to build a feasible solution from the problem definition.

pub mod heuristics;
