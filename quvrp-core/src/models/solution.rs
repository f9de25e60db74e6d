use crate::models::problem::DEPOT_ID;
use crate::utils::Float;
use std::fmt;
use std::time::Duration;

/// Represents a sequence of visits done by a single vehicle.
#[derive(Clone, Debug)]
pub struct Route {
    /// An id of the vehicle which serves the route.
    pub vehicle_id: usize,
    /// Visited node ids. Starts at the depot and, for a non-trivial route, ends at the depot.
    pub path: Vec<usize>,
    /// Accumulated travel distance of consecutive path edges.
    pub distance: Float,
}

impl Route {
    /// Creates a new empty route for the given vehicle starting at the depot.
    pub fn new(vehicle_id: usize) -> Self {
        Self { vehicle_id, path: vec![DEPOT_ID], distance: 0. }
    }

    /// Returns true if the route has not visited any non-depot node.
    pub fn is_trivial(&self) -> bool {
        self.path.len() <= 2
    }
}

/// Specifies which solving strategy produced a solution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolverKind {
    /// The quantum-inspired sampling heuristic.
    Quantum,
    /// The greedy classical heuristic.
    Classical,
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverKind::Quantum => write!(f, "quantum"),
            SolverKind::Classical => write!(f, "classical"),
        }
    }
}

/// Represents a VRP solution.
#[derive(Clone, Debug)]
pub struct VrpSolution {
    /// Non-trivial routes, one per vehicle which visited at least one node.
    pub routes: Vec<Route>,
    /// Sum of route distances.
    pub total_distance: Float,
    /// Time spent to produce the solution.
    pub execution_time: Duration,
    /// A tag of the strategy which produced the solution.
    pub solver: SolverKind,
}
