#[cfg(test)]
#[path = "../../../tests/unit/construction/heuristics/jittered_sampling_test.rs"]
mod jittered_sampling_test;

use super::RouteConstructor;
use crate::algorithms::qubo::{BinaryVector, VariableLayout, decode};
use crate::models::problem::{DEPOT_ID, VrpProblem};
use crate::models::solution::Route;
use crate::utils::{Float, GenericResult, Noise, Random, compare_floats};
use std::sync::Arc;

/// A multiplicative jitter applied to candidate distances to emulate the variability
/// of quantum sampling.
const JITTER_RANGE: (Float, Float) = (-0.25, 0.25);

/// A quantum-inspired construction strategy: a nearest neighbor walk where every
/// candidate distance is perturbed by ±25% multiplicative noise before comparison.
///
/// The strategy emits a binary assignment vector over the same `x[i,j,k]` variables
/// the QUBO encoder formulates, but deliberately does not consume the QUBO matrix
/// itself: it re-reads distances from the problem instance. This mirrors how a
/// sampling backend would return raw bitstrings for the decoder to interpret.
pub struct JitteredNearestNeighbor {
    noise: Noise,
}

impl JitteredNearestNeighbor {
    /// Creates a new instance of `JitteredNearestNeighbor`.
    pub fn new(random: Arc<dyn Random + Send + Sync>) -> Self {
        Self { noise: Noise::new(1., JITTER_RANGE, random) }
    }

    /// Constructs a binary assignment vector for the given problem.
    ///
    /// Vehicles are processed in order: each starts at the depot and repeatedly claims
    /// the unvisited node with the lowest jittered distance, then closes its route back
    /// to the depot once no choice remains. When vehicles are exhausted before the
    /// unvisited pool drains, the remaining nodes are silently left unassigned.
    pub fn sample(&self, problem: &VrpProblem) -> BinaryVector {
        let n = problem.node_count();
        let v = problem.vehicle_count();
        let layout = VariableLayout::new(n, v);

        let mut binary = vec![0; layout.len()];
        let mut unvisited: Vec<usize> = (0..n).filter(|&id| id != DEPOT_ID).collect();

        for vehicle in 0..v {
            if unvisited.is_empty() {
                break;
            }

            let mut current = DEPOT_ID;

            while let Some(position) = self.pick_next(problem, current, &unvisited) {
                let chosen = unvisited.swap_remove(position);
                binary[layout.index(current, chosen, vehicle)] = 1;
                current = chosen;
            }

            if current != DEPOT_ID {
                binary[layout.index(current, DEPOT_ID, vehicle)] = 1;
            }
        }

        binary
    }

    fn pick_next(&self, problem: &VrpProblem, current: usize, unvisited: &[usize]) -> Option<usize> {
        unvisited
            .iter()
            .enumerate()
            .map(|(position, &candidate)| (position, self.noise.generate(problem.distances.get(current, candidate))))
            .min_by(|(_, a), (_, b)| compare_floats(*a, *b))
            .map(|(position, _)| position)
    }
}

impl RouteConstructor for JitteredNearestNeighbor {
    fn construct(&self, problem: &VrpProblem) -> GenericResult<Vec<Route>> {
        Ok(decode(&self.sample(problem), problem))
    }
}
