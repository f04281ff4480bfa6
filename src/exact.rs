//! Exact k-center by exhaustive enumeration.
//!
//! All C(n,k) subsets of k vertices are visited in lexicographic order and the covering
//! radius of each is computed, so the cost is O(C(n,k) * n * k). It is the baseline
//! against which the farthest-first heuristic of [greedy](super::greedy) is compared and
//! is usable only for small n or small k.
//!
//! Among subsets achieving the minimal radius, the first one in lexicographic order is returned.

use rayon::prelude::*;

use crate::distance::Distance;
use crate::distmatrix::DistanceMatrix;
use crate::error::{KCenterError, Result};
use crate::solution::{Solution, covering_radius};

/// Enumerates the k-subsets of 0..n in lexicographic order.
///
/// The current subset lives in an index buffer owned by the iterator, it is lent by
/// [next_combination](Self::next_combination) and must be copied to be kept.
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    // number of leading indices never modified
    nb_fixed: usize,
    started: bool,
    done: bool,
}

impl Combinations {
    /// all k-subsets of 0..n. Yields nothing if k > n, one empty subset if k = 0.
    pub fn new(n: usize, k: usize) -> Self {
        Combinations {
            n,
            indices: (0..k).collect(),
            nb_fixed: 0,
            started: false,
            done: k > n,
        }
    }

    /// the k-subsets of 0..n whose smallest element is first.
    /// Yields nothing if k = 0 or first + k > n.
    pub fn with_first(n: usize, k: usize, first: usize) -> Self {
        Combinations {
            n,
            indices: (first..first + k).collect(),
            nb_fixed: 1,
            started: false,
            done: k == 0 || first + k > n,
        }
    }

    /// advance to next subset and lend it
    pub fn next_combination(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.indices);
        }
        let k = self.indices.len();
        // rightmost index that can still be incremented
        let mut i = k;
        loop {
            if i == self.nb_fixed {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] < self.n - k + i {
                break;
            }
        }
        self.indices[i] += 1;
        for j in (i + 1)..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(&self.indices)
    } // end of next_combination
} // end of impl Combinations

//========================================================================================

/// Parameters of the exact solver
#[derive(Copy, Clone, Debug, Default)]
pub struct ExactArg {
    /// split enumeration on the smallest center and run the parts with rayon
    pub parallel: bool,
}

impl ExactArg {
    pub fn new(parallel: bool) -> Self {
        ExactArg { parallel }
    }
}

/// Exhaustive k-center solver on a distance matrix.
pub struct ExactSolver<'a> {
    dist: &'a DistanceMatrix,
    nb_centers: usize,
}

impl<'a> ExactSolver<'a> {
    /// Checks k <= n before anything is enumerated.
    pub fn new(dist: &'a DistanceMatrix, nb_centers: usize) -> Result<Self> {
        let n = dist.get_nb_vertices();
        if nb_centers > n {
            log::error!("ExactSolver asked for {} centers, only {} vertices", nb_centers, n);
            return Err(KCenterError::TooManyCenters { k: nb_centers, n });
        }
        Ok(ExactSolver { dist, nb_centers })
    }

    /// number of subsets the solver will examine, saturating at u128::MAX
    pub fn get_nb_combinations(&self) -> u128 {
        let n = self.dist.get_nb_vertices() as u128;
        let k = self.nb_centers.min(self.dist.get_nb_vertices() - self.nb_centers) as u128;
        let mut nb: u128 = 1;
        for i in 0..k {
            // nb * (n-i) is divisible by (i+1)
            nb = match nb.checked_mul(n - i) {
                Some(p) => p / (i + 1),
                None => return u128::MAX,
            };
        }
        nb
    }

    /// Runs the solver, sequentially or in parallel as asked by arg.
    /// Both give the same solution.
    pub fn solve_with(&self, arg: &ExactArg) -> Solution {
        if arg.parallel {
            self.solve_parallel()
        } else {
            self.solve()
        }
    }

    /// Sequential enumeration.
    ///
    /// With k = 0 the solution has no center and its radius is [Distance::Unreachable]
    /// (0 if the graph has no vertex).
    pub fn solve(&self) -> Solution {
        log::info!(
            "ExactSolver::solve nb vertices : {}, nb centers : {}, nb combinations : {}",
            self.dist.get_nb_vertices(),
            self.nb_centers,
            self.get_nb_combinations()
        );
        if self.nb_centers == 0 {
            return self.no_center();
        }
        let combinations = Combinations::new(self.dist.get_nb_vertices(), self.nb_centers);
        let best = self.best_of(combinations).unwrap_or_else(|| self.no_center());
        log::info!("ExactSolver::solve done, {}", best);
        best
    } // end of solve

    /// Parallel version of [solve](Self::solve): one task per possible smallest center.
    /// Partial results are reduced in order of their smallest center so that ties are
    /// broken exactly as in the sequential enumeration.
    pub fn solve_parallel(&self) -> Solution {
        let n = self.dist.get_nb_vertices();
        let k = self.nb_centers;
        log::info!(
            "ExactSolver::solve_parallel nb vertices : {}, nb centers : {}, nb combinations : {}",
            n,
            k,
            self.get_nb_combinations()
        );
        if k == 0 {
            return self.no_center();
        }
        let partials: Vec<Option<Solution>> = (0..=(n - k))
            .into_par_iter()
            .map(|first| self.best_of(Combinations::with_first(n, k, first)))
            .collect();
        //
        let mut best: Option<Solution> = None;
        for partial in partials.into_iter().flatten() {
            if best
                .as_ref()
                .is_none_or(|b| partial.get_radius() < b.get_radius())
            {
                best = Some(partial);
            }
        }
        let best = best.unwrap_or_else(|| self.no_center());
        log::info!("ExactSolver::solve_parallel done, {}", best);
        best
    } // end of solve_parallel

    // scan subsets, keep the first one with strictly smallest radius
    fn best_of(&self, mut combinations: Combinations) -> Option<Solution> {
        let mut best: Option<Solution> = None;
        while let Some(centers) = combinations.next_combination() {
            let radius = covering_radius(self.dist, centers);
            log::trace!("centers {:?} radius {}", centers, radius);
            if best.as_ref().is_none_or(|b| radius < b.get_radius()) {
                log::debug!("improved radius : {}, centers : {:?}", radius, centers);
                best = Some(Solution::new(centers.to_vec(), radius));
                // nothing can beat 0
                if radius == Distance::ZERO {
                    break;
                }
            }
        }
        best
    } // end of best_of

    fn no_center(&self) -> Solution {
        Solution::new(Vec::new(), covering_radius(self.dist, &[]))
    }
} // end of impl ExactSolver

/// Checks preconditions and solves sequentially.
pub fn exact_kcenter(dist: &DistanceMatrix, nb_centers: usize) -> Result<Solution> {
    Ok(ExactSolver::new(dist, nb_centers)?.solve())
}

//========================================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use crate::graph::{Graph, random_connected_graph};

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn unit_path(n: usize) -> DistanceMatrix {
        let mut graph = Graph::new(n);
        for i in 1..n {
            graph.add_edge(i - 1, i, 1).unwrap();
        }
        DistanceMatrix::floyd_warshall(&graph)
    }

    fn collect(mut combinations: Combinations) -> Vec<Vec<usize>> {
        let mut all = Vec::new();
        while let Some(c) = combinations.next_combination() {
            all.push(c.to_vec());
        }
        all
    }

    #[test]
    fn combinations_lexicographic() {
        let all = collect(Combinations::new(4, 2));
        let expected = vec![
            vec![0, 1],
            vec![0, 2],
            vec![0, 3],
            vec![1, 2],
            vec![1, 3],
            vec![2, 3],
        ];
        assert_eq!(all, expected);
        //
        assert_eq!(collect(Combinations::new(5, 3)).len(), 10);
        assert_eq!(collect(Combinations::new(3, 3)), vec![vec![0, 1, 2]]);
        assert_eq!(collect(Combinations::new(3, 0)), vec![Vec::<usize>::new()]);
        assert!(collect(Combinations::new(2, 3)).is_empty());
    }

    #[test]
    fn combinations_with_first() {
        assert_eq!(
            collect(Combinations::with_first(4, 2, 1)),
            vec![vec![1, 2], vec![1, 3]]
        );
        assert_eq!(collect(Combinations::with_first(4, 2, 2)), vec![vec![2, 3]]);
        assert!(collect(Combinations::with_first(4, 2, 3)).is_empty());
        // partition of all subsets
        let nb: usize = (0..5)
            .map(|first| collect(Combinations::with_first(6, 3, first)).len())
            .sum();
        assert_eq!(nb, 20);
    }

    #[test]
    fn nb_combinations() {
        let dist = unit_path(10);
        assert_eq!(ExactSolver::new(&dist, 3).unwrap().get_nb_combinations(), 120);
        assert_eq!(ExactSolver::new(&dist, 10).unwrap().get_nb_combinations(), 1);
        assert_eq!(ExactSolver::new(&dist, 0).unwrap().get_nb_combinations(), 1);
    }

    #[test]
    fn path_of_four() {
        log_init_test();
        //
        let dist = unit_path(4);
        let solution = exact_kcenter(&dist, 2).unwrap();
        assert_eq!(solution.get_radius(), Distance::Finite(1));
        // first optimal pair in lexicographic order
        assert_eq!(solution.get_centers(), &[0, 2]);
        // no pair does better
        let mut all = Combinations::new(4, 2);
        while let Some(c) = all.next_combination() {
            assert!(covering_radius(&dist, c) >= solution.get_radius());
        }
    }

    #[test]
    fn too_many_centers() {
        let dist = unit_path(3);
        let res = exact_kcenter(&dist, 4);
        assert_eq!(res, Err(KCenterError::TooManyCenters { k: 4, n: 3 }));
    }

    #[test]
    fn all_vertices_centers() {
        let dist = unit_path(5);
        let solution = exact_kcenter(&dist, 5).unwrap();
        assert_eq!(solution.get_radius(), Distance::ZERO);
        assert_eq!(solution.get_centers(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn no_center() {
        let dist = unit_path(3);
        let solution = exact_kcenter(&dist, 0).unwrap();
        assert!(solution.get_centers().is_empty());
        assert_eq!(solution.get_radius(), Distance::Unreachable);
        //
        let empty = DistanceMatrix::floyd_warshall(&Graph::new(0));
        let solution = exact_kcenter(&empty, 0).unwrap();
        assert_eq!(solution.get_radius(), Distance::ZERO);
    }

    #[test]
    fn disconnected_components() {
        log_init_test();
        // components {0,1,2} path and {3,4} edge
        let mut graph = Graph::new(5);
        graph.add_edge(0, 1, 2).unwrap();
        graph.add_edge(1, 2, 2).unwrap();
        graph.add_edge(3, 4, 7).unwrap();
        let dist = DistanceMatrix::floyd_warshall(&graph);
        // one center cannot reach both components
        let one = exact_kcenter(&dist, 1).unwrap();
        assert_eq!(one.get_radius(), Distance::Unreachable);
        assert_eq!(one.get_centers(), &[0]);
        //
        let two = exact_kcenter(&dist, 2).unwrap();
        assert_eq!(two.get_radius(), Distance::Finite(7));
        assert_eq!(two.get_centers(), &[0, 3]);
    }

    #[test]
    fn parallel_matches_sequential() {
        log_init_test();
        //
        for seed in 0..6 {
            let graph = random_connected_graph(11, 8, 9, 1789 + seed);
            let dist = DistanceMatrix::floyd_warshall(&graph);
            for k in 0..=4 {
                let solver = ExactSolver::new(&dist, k).unwrap();
                let sequential = solver.solve_with(&ExactArg::default());
                let parallel = solver.solve_with(&ExactArg::new(true));
                assert_eq!(sequential, parallel, "seed {} k {}", seed, k);
                assert_eq!(
                    sequential.get_radius(),
                    covering_radius(&dist, sequential.get_centers())
                );
            }
        }
    }

    #[test]
    fn deterministic() {
        let graph = random_connected_graph(10, 6, 5, 777);
        let dist = DistanceMatrix::floyd_warshall(&graph);
        let first = exact_kcenter(&dist, 3).unwrap();
        for _ in 0..3 {
            assert_eq!(exact_kcenter(&dist, 3).unwrap(), first);
        }
    }
} // end of mod tests
