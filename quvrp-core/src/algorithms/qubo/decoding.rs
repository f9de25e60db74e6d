#[cfg(test)]
#[path = "../../../tests/unit/algorithms/qubo/decoding_test.rs"]
mod decoding_test;

use super::VariableLayout;
use crate::models::problem::{DEPOT_ID, VrpProblem};
use crate::models::solution::Route;
use rustc_hash::FxHashSet;

/// Decodes a binary assignment vector into per-vehicle routes.
///
/// The function is pure: it never mutates its inputs and repeated calls with the same
/// vector produce identical routes. It does not validate that the vector represents a
/// feasible single-assignment solution: when a node is claimed by multiple variables,
/// the first vehicle to reach it in decode order wins and later claims are silently
/// ignored. Nodes which no set variable covers are silently left out of every route.
pub fn decode(binary: &[u8], problem: &VrpProblem) -> Vec<Route> {
    let n = problem.node_count();
    let v = problem.vehicle_count();
    let layout = VariableLayout::new(n, v);

    debug_assert_eq!(binary.len(), layout.len());

    let mut visited = FxHashSet::default();
    visited.insert(DEPOT_ID);

    let mut routes = Vec::with_capacity(v);

    for vehicle in 0..v {
        let mut route = Route::new(vehicle);
        let mut current = DEPOT_ID;

        loop {
            let next = (0..n)
                .find(|&to| !visited.contains(&to) && binary[layout.index(current, to, vehicle)] == 1);

            match next {
                Some(to) => {
                    route.path.push(to);
                    route.distance += problem.distances.get(current, to);
                    visited.insert(to);
                    current = to;
                }
                None => break,
            }
        }

        if route.path.len() > 1 {
            route.path.push(DEPOT_ID);
            route.distance += problem.distances.get(current, DEPOT_ID);
        }

        routes.push(route);
    }

    routes.into_iter().filter(|route| !route.is_trivial()).collect()
}
