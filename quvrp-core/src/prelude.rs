//! This module reimports a commonly used types.

// Reimport core types
pub use crate::solver::solve_classical;
pub use crate::solver::solve_with_qaoa;
pub use crate::solver::{QaoaBackend, QaoaConfig};
pub use crate::solver::{QaoaMetrics, compute_metrics};

pub use crate::models::problem::{DEPOT_ID, DistanceMatrix, Node, Vehicle, VrpProblem};
pub use crate::models::solution::{Route, SolverKind, VrpSolution};

pub use crate::algorithms::qubo::{BinaryVector, QuboMatrix, VariableLayout, decode, encode};

// Reimport utils
pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::InfoLogger;
pub use crate::utils::{Float, GenericError, GenericResult};
pub use crate::utils::{Noise, Random};
