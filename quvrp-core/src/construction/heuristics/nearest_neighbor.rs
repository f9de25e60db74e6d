#[cfg(test)]
#[path = "../../../tests/unit/construction/heuristics/nearest_neighbor_test.rs"]
mod nearest_neighbor_test;

use super::RouteConstructor;
use crate::models::problem::{DEPOT_ID, VrpProblem};
use crate::models::solution::Route;
use crate::utils::{GenericResult, compare_floats};

/// A greedy classical construction strategy: vehicles take turns in round-robin order
/// and each appends the nearest still unassigned node to its current path end. Every
/// non-depot node ends up on exactly one route; non-trivial routes are closed back to
/// the depot.
#[derive(Default)]
pub struct NearestNeighbor {}

impl RouteConstructor for NearestNeighbor {
    fn construct(&self, problem: &VrpProblem) -> GenericResult<Vec<Route>> {
        let v = problem.vehicle_count();
        if v == 0 {
            return Err("cannot construct routes: no vehicles in the problem".into());
        }

        let mut routes: Vec<_> = (0..v).map(Route::new).collect();
        let mut unassigned: Vec<usize> = (0..problem.node_count()).filter(|&id| id != DEPOT_ID).collect();

        let mut turn = 0;
        while !unassigned.is_empty() {
            let route = &mut routes[turn % v];
            let current = *route.path.last().unwrap();

            let (position, &nearest) = unassigned
                .iter()
                .enumerate()
                .min_by(|&(_, &a), &(_, &b)| {
                    compare_floats(problem.distances.get(current, a), problem.distances.get(current, b))
                })
                .unwrap();

            route.path.push(nearest);
            route.distance += problem.distances.get(current, nearest);
            unassigned.swap_remove(position);

            turn += 1;
        }

        for route in routes.iter_mut().filter(|route| route.path.len() > 1) {
            let current = *route.path.last().unwrap();
            route.path.push(DEPOT_ID);
            route.distance += problem.distances.get(current, DEPOT_ID);
        }

        Ok(routes.into_iter().filter(|route| !route.is_trivial()).collect())
    }
}
