use super::*;
use crate::helpers::models::{create_depot_only_problem, create_test_problem, test_distance_rows};
use crate::helpers::utils::{create_test_environment, create_test_environment_with_seed};
use crate::models::problem::DEPOT_ID;
use rustc_hash::FxHashSet;

#[test]
fn can_solve_classical_example() {
    let problem = create_test_problem(test_distance_rows(), 1);

    let solution = solve_classical(&problem, &create_test_environment()).unwrap();

    assert_eq!(solution.solver, SolverKind::Classical);
    assert_eq!(solution.routes.len(), 1);
    assert_eq!(solution.routes[0].path, vec![0, 1, 2, 3, 0]);
    assert_eq!(solution.total_distance, 14.);
}

#[test]
fn can_solve_with_qaoa_keeping_feasibility() {
    let problem = create_test_problem(test_distance_rows(), 2);
    let environment = create_test_environment_with_seed(1);

    let solution = solve_with_qaoa(&problem, &QaoaConfig::default(), &environment).unwrap();

    assert_eq!(solution.solver, SolverKind::Quantum);

    let mut visited = FxHashSet::default();
    let mut recomputed = 0.;
    for route in solution.routes.iter() {
        recomputed += route.path.windows(2).map(|leg| problem.distances.get(leg[0], leg[1])).sum::<Float>();
        route.path.iter().filter(|&&node| node != DEPOT_ID).for_each(|&node| {
            assert!(visited.insert(node));
        });
    }
    assert_eq!(visited, FxHashSet::from_iter([1, 2, 3]));
    assert_eq!(solution.total_distance, recomputed);
}

#[test]
fn can_handle_depot_only_problem_with_both_solvers() {
    let problem = create_depot_only_problem(2);
    let environment = create_test_environment();

    let classical = solve_classical(&problem, &environment).unwrap();
    let quantum = solve_with_qaoa(&problem, &QaoaConfig::default(), &environment).unwrap();

    assert!(classical.routes.is_empty());
    assert!(quantum.routes.is_empty());
    assert_eq!(classical.total_distance, 0.);
    assert_eq!(quantum.total_distance, 0.);
}

#[test]
fn can_reject_invalid_qaoa_config() {
    let problem = create_test_problem(test_distance_rows(), 1);
    let environment = create_test_environment();

    let zero_layers = QaoaConfig { layers: 0, ..QaoaConfig::default() };
    let zero_shots = QaoaConfig { shots: 0, ..QaoaConfig::default() };

    assert!(solve_with_qaoa(&problem, &zero_layers, &environment).is_err());
    assert!(solve_with_qaoa(&problem, &zero_shots, &environment).is_err());
}

#[test]
fn can_parse_backend_names() {
    assert_eq!("statevector_simulator".parse::<QaoaBackend>().unwrap(), QaoaBackend::StatevectorSimulator);
    assert_eq!("qasm_simulator".parse::<QaoaBackend>().unwrap(), QaoaBackend::QasmSimulator);
    assert!("ibmq_ghost".parse::<QaoaBackend>().is_err());
}

#[test]
fn can_emit_log_messages() {
    let problem = create_test_problem(test_distance_rows(), 1);

    let messages = std::sync::Arc::new(std::sync::Mutex::new(Vec::<String>::new()));
    let sink = messages.clone();
    let environment = Environment::new(
        std::sync::Arc::new(crate::utils::DefaultRandom::new_with_seed(0)),
        std::sync::Arc::new(move |msg: &str| sink.lock().unwrap().push(msg.to_string())),
    );

    solve_with_qaoa(&problem, &QaoaConfig::default(), &environment).unwrap();

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].contains("16 binary variables"));
    assert!(messages[1].starts_with("quantum solver"));
}
