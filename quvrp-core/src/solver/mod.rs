//! Contains the top level solving interface: two interchangeable strategies which turn
//! a [`VrpProblem`] into a [`VrpSolution`], one dressed as a QAOA pipeline and one
//! plain greedy.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod diagnostics;
pub use self::diagnostics::*;

use crate::algorithms::qubo::{DEFAULT_PENALTY, encode};
use crate::construction::heuristics::{JitteredNearestNeighbor, NearestNeighbor, RouteConstructor};
use crate::models::problem::VrpProblem;
use crate::models::solution::{Route, SolverKind, VrpSolution};
use crate::utils::{Environment, Float, GenericResult, Timer};
use std::fmt;
use std::str::FromStr;

/// Specifies a backend name accepted by the QAOA pipeline.
///
/// The backend only labels the synthetic diagnostics output: no actual quantum
/// circuit is executed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum QaoaBackend {
    /// An ideal statevector simulation backend.
    #[default]
    StatevectorSimulator,
    /// A shot based simulation backend.
    QasmSimulator,
}

impl fmt::Display for QaoaBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QaoaBackend::StatevectorSimulator => write!(f, "statevector_simulator"),
            QaoaBackend::QasmSimulator => write!(f, "qasm_simulator"),
        }
    }
}

impl FromStr for QaoaBackend {
    type Err = crate::utils::GenericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "statevector_simulator" => Ok(QaoaBackend::StatevectorSimulator),
            "qasm_simulator" => Ok(QaoaBackend::QasmSimulator),
            _ => Err(format!("unknown QAOA backend: {s}").into()),
        }
    }
}

/// Specifies QAOA pipeline parameters.
///
/// The parameters size and label the synthetic diagnostics, they do not affect the
/// quality of the binary solution.
#[derive(Clone, Debug)]
pub struct QaoaConfig {
    /// Amount of QAOA layers (the `p` parameter), must be at least 1.
    pub layers: usize,
    /// Amount of measurement shots, must be at least 1.
    pub shots: usize,
    /// A backend name.
    pub backend: QaoaBackend,
}

impl Default for QaoaConfig {
    fn default() -> Self {
        Self { layers: 1, shots: 1024, backend: QaoaBackend::default() }
    }
}

impl QaoaConfig {
    pub(crate) fn validate(&self) -> GenericResult<()> {
        if self.layers < 1 {
            return Err("invalid QAOA config: layers must be at least 1".into());
        }

        if self.shots < 1 {
            return Err("invalid QAOA config: shots must be at least 1".into());
        }

        Ok(())
    }
}

/// Solves the problem with the quantum-inspired pipeline: the problem is reformulated
/// as QUBO, a binary assignment vector is sampled and decoded back into routes.
///
/// NOTE: the sampling heuristic constructs its vector from the problem distances
/// directly, so the QUBO matrix is formulated for inspection and reporting only. Use
/// [`crate::algorithms::qubo::encode`] to retrieve it.
pub fn solve_with_qaoa(
    problem: &VrpProblem,
    config: &QaoaConfig,
    environment: &Environment,
) -> GenericResult<VrpSolution> {
    config.validate()?;

    let timer = Timer::start();

    let qubo = encode(problem, DEFAULT_PENALTY)?;
    (environment.logger)(&format!(
        "formulated QUBO with {} binary variables for backend '{}' (p={}, shots={})",
        qubo.dimension(),
        config.backend,
        config.layers,
        config.shots
    ));

    let constructor = JitteredNearestNeighbor::new(environment.random.clone());
    let routes = constructor.construct(problem)?;

    finalize(routes, SolverKind::Quantum, timer, environment)
}

/// Solves the problem with the greedy classical heuristic, bypassing QUBO entirely.
pub fn solve_classical(problem: &VrpProblem, environment: &Environment) -> GenericResult<VrpSolution> {
    let timer = Timer::start();

    let routes = NearestNeighbor::default().construct(problem)?;

    finalize(routes, SolverKind::Classical, timer, environment)
}

fn finalize(routes: Vec<Route>, solver: SolverKind, timer: Timer, environment: &Environment) -> GenericResult<VrpSolution> {
    let total_distance: Float = routes.iter().map(|route| route.distance).sum();
    let execution_time = timer.elapsed();

    let solution = VrpSolution { routes, total_distance, execution_time, solver };

    (environment.logger)(&format!(
        "{} solver built {} route(s) with total distance {:.2}, took {}ms",
        solution.solver,
        solution.routes.len(),
        solution.total_distance,
        solution.execution_time.as_millis()
    ));

    Ok(solution)
}
