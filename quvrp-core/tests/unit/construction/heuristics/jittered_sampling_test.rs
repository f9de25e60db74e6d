use super::*;
use crate::helpers::models::{create_test_problem, test_distance_rows};
use crate::helpers::utils::FakeRandom;
use crate::utils::DefaultRandom;
use rustc_hash::FxHashSet;

#[test]
fn can_degrade_to_nearest_neighbor_without_jitter() {
    let problem = create_test_problem(test_distance_rows(), 1);
    // one scripted zero per candidate evaluation: 3 + 2 + 1 scans
    let random = Arc::new(FakeRandom::new(vec![], vec![0.; 6]));

    let constructor = JitteredNearestNeighbor::new(random);
    let binary = constructor.sample(&problem);

    let layout = VariableLayout::new(4, 1);
    assert_eq!(binary.len(), layout.len());
    assert_eq!(binary[layout.index(3, DEPOT_ID, 0)], 1, "route is not closed back to the depot");

    let routes = decode(&binary, &problem);
    assert_eq!(routes[0].path, vec![0, 1, 2, 3, 0]);
    assert_eq!(routes[0].distance, 14.);
}

#[test]
fn can_repeat_sampling_with_same_seed() {
    let problem = create_test_problem(test_distance_rows(), 2);

    let first = JitteredNearestNeighbor::new(Arc::new(DefaultRandom::new_with_seed(42))).sample(&problem);
    let second = JitteredNearestNeighbor::new(Arc::new(DefaultRandom::new_with_seed(42))).sample(&problem);

    assert_eq!(first, second);
}

#[test]
fn can_keep_sampled_solutions_feasible() {
    let problem = create_test_problem(test_distance_rows(), 2);

    for seed in 0..10 {
        let constructor = JitteredNearestNeighbor::new(Arc::new(DefaultRandom::new_with_seed(seed)));
        let routes = constructor.construct(&problem).unwrap();

        let mut visited = FxHashSet::default();
        for route in routes.iter() {
            assert_eq!(*route.path.first().unwrap(), DEPOT_ID);
            assert_eq!(*route.path.last().unwrap(), DEPOT_ID);

            for &node in route.path.iter().filter(|&&node| node != DEPOT_ID) {
                assert!(visited.insert(node), "node {node} is visited twice (seed {seed})");
            }
        }
        assert_eq!(visited, FxHashSet::from_iter([1, 2, 3]), "not all nodes are visited (seed {seed})");
    }
}

#[test]
fn can_tolerate_empty_fleet() {
    let problem = create_test_problem(test_distance_rows(), 0);

    let constructor = JitteredNearestNeighbor::new(Arc::new(DefaultRandom::default()));
    let binary = constructor.sample(&problem);

    assert!(binary.is_empty());
    assert!(decode(&binary, &problem).is_empty());
}
