//! From instance file to exact and greedy centers.

use std::io::Write;
use std::path::PathBuf;

use kcenter::prelude::*;
use orlib::io::*;

fn log_init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn write_instance(name: &str, text: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("{}-{}.txt", name, std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(text.as_bytes()).unwrap();
    path
}

// 6-cycle with unit weights, plus a chord 1-4 of weight 5 that is never a shortcut
const CYCLE: &str = "6 7 2
1 2 1
2 3 1
3 4 1
4 5 1
5 6 1
6 1 1
1 4 5
";

#[test]
fn cycle_instance() {
    log_init_test();
    //
    let path = write_instance("kcenter-cycle", CYCLE);
    let instance = read_instance(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(instance.get_nb_edges_read(), 7);
    //
    let dist = DistanceMatrix::floyd_warshall(instance.get_graph());
    assert_eq!(dist.get(0, 3), Distance::Finite(3));
    assert_eq!(dist.get_max_finite(), Some(3));
    //
    let k = instance.get_nb_centers();
    let exact = ExactSolver::new(&dist, k).unwrap().solve();
    assert_eq!(exact.get_radius(), Distance::Finite(1));
    assert_eq!(exact.get_centers(), &[0, 3]);
    //
    let greedy = GreedySelector::new(&dist, k, GreedyArg::default())
        .unwrap()
        .select();
    assert_eq!(greedy.get_centers(), &[0, 3]);
    assert!(greedy.get_radius() <= exact.get_radius().scale(2));
    //
    let parallel = ExactSolver::new(&dist, k)
        .unwrap()
        .solve_with(&ExactArg::new(true));
    assert_eq!(parallel, exact);
}

#[test]
fn solvers_share_matrix_across_threads() {
    log_init_test();
    //
    let instance = parse_instance(std::io::Cursor::new(CYCLE)).unwrap();
    let dist = DistanceMatrix::floyd_warshall(instance.get_graph());
    let (exact, greedy) = rayon::join(
        || exact_kcenter(&dist, 3),
        || greedy_kcenter(&dist, 3),
    );
    let exact = exact.unwrap();
    let greedy = greedy.unwrap();
    assert_eq!(exact.get_radius(), Distance::Finite(1));
    assert!(greedy.get_radius() <= Distance::Finite(2));
}

#[test]
fn k_larger_than_instance() {
    let instance = parse_instance(std::io::Cursor::new("3 2 4\n1 2 1\n2 3 1\n")).unwrap();
    let dist = DistanceMatrix::floyd_warshall(instance.get_graph());
    let k = instance.get_nb_centers();
    assert_eq!(
        exact_kcenter(&dist, k).unwrap_err(),
        KCenterError::TooManyCenters { k: 4, n: 3 }
    );
    assert!(GreedySelector::new(&dist, k, GreedyArg::default()).is_err());
}
