//! Core crate contains building blocks to solve a ***Vehicle Routing Problem*** via
//! a QUBO reformulation with a quantum-inspired sampling heuristic and a greedy
//! classical baseline.
//!
//! The crate offers two independent solving pipelines over the same problem model:
//!
//! * [`solver::solve_with_qaoa`] formulates the problem as a Quadratic Unconstrained
//!   Binary Optimization matrix, samples a binary assignment vector with a jittered
//!   nearest neighbor walk standing in for quantum sampling and decodes it back into
//!   routes;
//! * [`solver::solve_classical`] constructs routes directly with a round-robin
//!   nearest neighbor heuristic, bypassing the QUBO machinery entirely.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub mod algorithms;
pub mod construction;
pub mod generator;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
