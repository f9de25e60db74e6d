use super::*;
use crate::utils::DefaultRandom;

#[test]
fn can_generate_symmetric_matrix_with_zero_diagonal() {
    let random = DefaultRandom::default();
    let matrix = generate_distance_matrix(5, DEFAULT_MAX_DISTANCE, &random).unwrap();

    for from in 0..5 {
        assert_eq!(matrix.get(from, from), 0.);
        for to in 0..5 {
            assert_eq!(matrix.get(from, to), matrix.get(to, from));
            if from != to {
                let distance = matrix.get(from, to);
                assert!((1. ..=DEFAULT_MAX_DISTANCE as Float).contains(&distance));
                assert_eq!(distance.fract(), 0., "distance is not integer valued");
            }
        }
    }
}

#[test]
fn can_repeat_matrix_generation_with_same_seed() {
    let first = generate_distance_matrix(6, 50, &DefaultRandom::new_with_seed(7)).unwrap();
    let second = generate_distance_matrix(6, 50, &DefaultRandom::new_with_seed(7)).unwrap();

    for from in 0..6 {
        for to in 0..6 {
            assert_eq!(first.get(from, to), second.get(from, to));
        }
    }
}

#[test]
fn can_reject_invalid_max_distance() {
    assert!(generate_distance_matrix(3, 0, &DefaultRandom::default()).is_err());
}

#[test]
fn can_place_nodes_on_circle() {
    let matrix = generate_distance_matrix(8, 10, &DefaultRandom::default()).unwrap();

    let nodes = generate_node_coordinates(&matrix);

    assert_eq!(nodes.len(), 8);
    assert_eq!(nodes[0].label.as_deref(), Some("Depot"));
    for node in nodes.iter() {
        let (x, y) = node.coordinate;
        assert!(((x * x + y * y).sqrt() - LAYOUT_RADIUS).abs() < 1e-9);
    }
}

#[test]
fn can_scale_degenerate_layout() {
    let nodes: Vec<_> =
        (0..3).map(|id| Node { id, coordinate: (42., 42.), label: None }).collect();

    let scaled = scale_to_extent(&nodes, 800., 600.);

    assert_eq!(scaled.len(), 3);
    for &(x, y) in scaled.iter() {
        assert!(x.is_finite() && y.is_finite());
    }
}

#[test]
fn can_generate_complete_problem() {
    let problem = generate_problem(6, 2, Arc::new(DefaultRandom::new_with_seed(11))).unwrap();

    assert_eq!(problem.node_count(), 6);
    assert_eq!(problem.vehicle_count(), 2);
    assert_eq!(problem.nodes[0].id, DEPOT_ID);
    assert_eq!(problem.distances.size(), 6);
}
