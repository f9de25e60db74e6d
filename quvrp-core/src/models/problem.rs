#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::utils::{Float, GenericResult};

/// An id of the depot node where every vehicle route starts and ends.
pub const DEPOT_ID: usize = 0;

/// Represents a single location to visit.
#[derive(Clone, Debug)]
pub struct Node {
    /// Node id in `0..n` range where 0 is always the depot.
    pub id: usize,
    /// A 2-D coordinate used for display purposes.
    pub coordinate: (Float, Float),
    /// An optional display label.
    pub label: Option<String>,
}

/// Represents a vehicle of the fleet.
#[derive(Clone, Debug)]
pub struct Vehicle {
    /// Vehicle id in `0..v` range.
    pub id: usize,
    /// An optional capacity. Not used by the current heuristics, but kept as part
    /// of the problem contract.
    pub capacity: Option<Float>,
    /// An optional display label.
    pub label: Option<String>,
}

/// A square matrix of non-negative travel distances with zero diagonal.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    data: Vec<Float>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a new instance of `DistanceMatrix` from row-major data.
    pub fn new(data: Vec<Float>, size: usize) -> GenericResult<Self> {
        if data.len() != size * size {
            return Err(format!("invalid distance matrix: expected {} values, got {}", size * size, data.len()).into());
        }

        if data.iter().any(|&distance| distance < 0.) {
            return Err("invalid distance matrix: negative distance".into());
        }

        Ok(Self { data, size })
    }

    /// Creates a new instance of `DistanceMatrix` from a vector of rows.
    pub fn from_rows(rows: Vec<Vec<Float>>) -> GenericResult<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return Err("invalid distance matrix: not a square matrix".into());
        }

        Self::new(rows.into_iter().flatten().collect(), size)
    }

    /// Returns distance between two nodes.
    pub fn get(&self, from: usize, to: usize) -> Float {
        self.data[from * self.size + to]
    }

    /// Returns amount of nodes covered by the matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Defines a VRP problem: nodes to visit, a fleet and travel distances between nodes.
pub struct VrpProblem {
    /// Nodes to visit, node 0 is the depot.
    pub nodes: Vec<Node>,
    /// Available vehicles.
    pub vehicles: Vec<Vehicle>,
    /// Travel distances between nodes.
    pub distances: DistanceMatrix,
}

impl VrpProblem {
    /// Creates a new instance of `VrpProblem` checking that node and matrix dimensions agree.
    pub fn new(nodes: Vec<Node>, vehicles: Vec<Vehicle>, distances: DistanceMatrix) -> GenericResult<Self> {
        if nodes.len() != distances.size() {
            return Err(format!(
                "invalid problem: {} nodes does not match distance matrix of size {}",
                nodes.len(),
                distances.size()
            )
            .into());
        }

        Ok(Self { nodes, vehicles, distances })
    }

    /// Returns amount of nodes in the problem.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns amount of vehicles in the fleet.
    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }
}
