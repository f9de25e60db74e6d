#[cfg(test)]
#[path = "../../../tests/unit/algorithms/qubo/encoding_test.rs"]
mod encoding_test;

use super::{QuboMatrix, VariableLayout};
use crate::models::problem::{DEPOT_ID, VrpProblem};
use crate::utils::{Float, GenericResult};

/// A default penalty coefficient, chosen empirically large relative to typical
/// distance magnitudes so that constraint terms dominate the objective term.
pub const DEFAULT_PENALTY: Float = 10.;

/// Encodes a VRP problem into a QUBO matrix over `x[i,j,k]` routing variables.
///
/// Four additive passes populate the matrix: the distance objective on the diagonal,
/// the destination- and source-uniqueness constraints as the standard `(Σx - 1)²`
/// penalty expansion, and a flow-continuity constraint which rewards consistent
/// in/out edge usage per node and vehicle. Entries only accumulate, they are never
/// overwritten.
///
/// The depot is excluded from the uniqueness constraints: it is visited by multiple
/// vehicles at route start and end.
pub fn encode(problem: &VrpProblem, penalty: Float) -> GenericResult<QuboMatrix> {
    if penalty <= 0. {
        return Err(format!("invalid penalty: {penalty}, must be positive").into());
    }

    let n = problem.node_count();
    let v = problem.vehicle_count();

    let layout = VariableLayout::new(n, v);
    let mut matrix = QuboMatrix::new(layout);

    if layout.is_empty() {
        return Ok(matrix);
    }

    apply_objective(&mut matrix, problem, layout);
    apply_destination_uniqueness(&mut matrix, layout, penalty, n, v);
    apply_source_uniqueness(&mut matrix, layout, penalty, n, v);
    apply_flow_continuity(&mut matrix, layout, penalty, n, v);

    Ok(matrix)
}

/// Adds `distance[i][j]` to the diagonal of every `x[i,j,k]`: using an edge costs its distance.
fn apply_objective(matrix: &mut QuboMatrix, problem: &VrpProblem, layout: VariableLayout) {
    let n = problem.node_count();
    let v = problem.vehicle_count();

    for from in 0..n {
        for to in 0..n {
            if from == to {
                continue;
            }
            for vehicle in 0..v {
                let index = layout.index(from, to, vehicle);
                matrix.add(index, index, problem.distances.get(from, to));
            }
        }
    }
}

/// Requires every non-depot node to be entered exactly once: `(Σ x[i,j,k] - 1)²` over
/// all variables with destination `j`.
fn apply_destination_uniqueness(matrix: &mut QuboMatrix, layout: VariableLayout, penalty: Float, n: usize, v: usize) {
    for to in 0..n {
        if to == DEPOT_ID {
            continue;
        }

        let variables: Vec<_> = (0..n)
            .filter(|&from| from != to)
            .flat_map(|from| (0..v).map(move |vehicle| layout.index(from, to, vehicle)))
            .collect();

        apply_exactly_one(matrix, &variables, penalty);
    }
}

/// Requires every non-depot node to be left exactly once: `(Σ x[i,j,k] - 1)²` over
/// all variables with origin `i`.
fn apply_source_uniqueness(matrix: &mut QuboMatrix, layout: VariableLayout, penalty: Float, n: usize, v: usize) {
    for from in 0..n {
        if from == DEPOT_ID {
            continue;
        }

        let variables: Vec<_> = (0..n)
            .filter(|&to| to != from)
            .flat_map(|to| (0..v).map(move |vehicle| layout.index(from, to, vehicle)))
            .collect();

        apply_exactly_one(matrix, &variables, penalty);
    }
}

/// Rewards consistent in/out usage per non-depot node and vehicle: each incoming and
/// outgoing edge pair gets `+penalty` on both diagonals and `-2·penalty` on the cross term.
fn apply_flow_continuity(matrix: &mut QuboMatrix, layout: VariableLayout, penalty: Float, n: usize, v: usize) {
    for node in 0..n {
        if node == DEPOT_ID {
            continue;
        }

        for vehicle in 0..v {
            for from in 0..n {
                if from == node {
                    continue;
                }
                for to in 0..n {
                    if to == node {
                        continue;
                    }

                    let incoming = layout.index(from, node, vehicle);
                    let outgoing = layout.index(node, to, vehicle);

                    matrix.add(incoming, incoming, penalty);
                    matrix.add(outgoing, outgoing, penalty);
                    matrix.add(incoming, outgoing, -2. * penalty);
                }
            }
        }
    }
}

/// Applies the `(Σx - 1)²` expansion over the given variables: `-penalty` per diagonal
/// and `+2·penalty` once per distinct pair, accumulated at the upper index pair.
fn apply_exactly_one(matrix: &mut QuboMatrix, variables: &[usize], penalty: Float) {
    for &index in variables {
        matrix.add(index, index, -penalty);
    }

    for (position, &first) in variables.iter().enumerate() {
        for &second in variables.iter().skip(position + 1) {
            let (row, col) = if first < second { (first, second) } else { (second, first) };
            matrix.add(row, col, 2. * penalty);
        }
    }
}
