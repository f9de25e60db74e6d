//! Provides generators for synthetic demonstration instances: random symmetric
//! distance matrices, circular node layouts and complete demo problems.

#[cfg(test)]
#[path = "../../tests/unit/generator/generator_test.rs"]
mod generator_test;

use crate::models::problem::{DEPOT_ID, DistanceMatrix, Node, Vehicle, VrpProblem};
use crate::utils::{Float, GenericResult, Random};
use std::f64::consts::PI;
use std::sync::Arc;

/// A default upper bound for generated distances.
pub const DEFAULT_MAX_DISTANCE: i32 = 100;

/// A radius of the circle the nodes are laid out on.
const LAYOUT_RADIUS: Float = 100.;

/// A minimum extent used as a fallback when the layout degenerates to a point.
const MIN_EXTENT: Float = 1.;

/// Generates a symmetric distance matrix with integer distances in `[1, max_distance]`
/// and a zero diagonal.
pub fn generate_distance_matrix(
    node_count: usize,
    max_distance: i32,
    random: &(dyn Random),
) -> GenericResult<DistanceMatrix> {
    if max_distance < 1 {
        return Err(format!("invalid max distance: {max_distance}, must be at least 1").into());
    }

    let mut data = vec![0.; node_count * node_count];

    for from in 0..node_count {
        for to in (from + 1)..node_count {
            let distance = random.uniform_int(1, max_distance) as Float;
            data[from * node_count + to] = distance;
            data[to * node_count + from] = distance;
        }
    }

    DistanceMatrix::new(data, node_count)
}

/// Places nodes of the matrix evenly on a circle of fixed radius.
///
/// This is a deliberate display simplification: the layout does not reconstruct the
/// metric embedding of the distance matrix.
pub fn generate_node_coordinates(matrix: &DistanceMatrix) -> Vec<Node> {
    let n = matrix.size();

    (0..n)
        .map(|id| {
            let angle = 2. * PI * id as Float / n.max(1) as Float;
            Node {
                id,
                coordinate: (LAYOUT_RADIUS * angle.cos(), LAYOUT_RADIUS * angle.sin()),
                label: Some(if id == DEPOT_ID { "Depot".to_string() } else { format!("Node {id}") }),
            }
        })
        .collect()
}

/// Scales node coordinates to fit the given extent, preserving the aspect ratio.
///
/// A degenerate layout where all coordinates coincide is guarded by a minimum extent
/// fallback so the scale factor stays finite.
pub fn scale_to_extent(nodes: &[Node], width: Float, height: Float) -> Vec<(Float, Float)> {
    let (min_x, max_x) = bounds(nodes.iter().map(|node| node.coordinate.0));
    let (min_y, max_y) = bounds(nodes.iter().map(|node| node.coordinate.1));

    let extent_x = (max_x - min_x).max(MIN_EXTENT);
    let extent_y = (max_y - min_y).max(MIN_EXTENT);
    let scale = (width / extent_x).min(height / extent_y);

    nodes.iter().map(|node| ((node.coordinate.0 - min_x) * scale, (node.coordinate.1 - min_y) * scale)).collect()
}

/// Generates a complete demonstration problem with the given dimensions.
pub fn generate_problem(
    node_count: usize,
    vehicle_count: usize,
    random: Arc<dyn Random + Send + Sync>,
) -> GenericResult<VrpProblem> {
    let distances = generate_distance_matrix(node_count, DEFAULT_MAX_DISTANCE, random.as_ref())?;
    let nodes = generate_node_coordinates(&distances);
    let vehicles = (0..vehicle_count)
        .map(|id| Vehicle { id, capacity: None, label: Some(format!("Vehicle {id}")) })
        .collect();

    VrpProblem::new(nodes, vehicles, distances)
}

fn bounds(values: impl Iterator<Item = Float>) -> (Float, Float) {
    values.fold((Float::MAX, Float::MIN), |(min, max), value| (min.min(value), max.max(value)))
}
