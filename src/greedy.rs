//! Farthest-first traversal (Gonzalez heuristic) for k-center.
//!
//! Centers are chosen one at a time, each new center being the vertex farthest from the
//! centers already chosen. Once the distance matrix is known the cost is O(k * n).

use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;
use rand_xoshiro::rand_core::SeedableRng;

use crate::distance::Distance;
use crate::distmatrix::DistanceMatrix;
use crate::error::{KCenterError, Result};
use crate::solution::Solution;

/// How the first center is chosen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SeedVertex {
    /// a given vertex
    Fixed(usize),
    /// a vertex drawn uniformly with a generator initialized by this seed
    Random(u64),
}

impl Default for SeedVertex {
    fn default() -> Self {
        SeedVertex::Fixed(0)
    }
}

/// Parameters of the greedy selector
#[derive(Copy, Clone, Debug, Default)]
pub struct GreedyArg {
    pub seed: SeedVertex,
}

impl GreedyArg {
    pub fn new(seed: SeedVertex) -> Self {
        GreedyArg { seed }
    }
}

//========================================================================================

#[cfg_attr(doc, katexit::katexit)]
/// Farthest-first selection of at most k centers.
///
/// If $r^{*}$ is the optimal covering radius for k centers, the radius $r$ reported by
/// [select](Self::select) satisfies $ r \le 2 r^{*} $ as the distance matrix is a metric.
///
/// The order of centers in the returned [Solution] is the selection order.
pub struct GreedySelector<'a> {
    dist: &'a DistanceMatrix,
    nb_centers: usize,
    // first center, meaningless if there is no vertex
    seed_vertex: usize,
}

impl<'a> GreedySelector<'a> {
    /// Checks k <= n and the seed vertex before any selection.
    pub fn new(dist: &'a DistanceMatrix, nb_centers: usize, arg: GreedyArg) -> Result<Self> {
        let n = dist.get_nb_vertices();
        if nb_centers > n {
            log::error!("GreedySelector asked for {} centers, only {} vertices", nb_centers, n);
            return Err(KCenterError::TooManyCenters { k: nb_centers, n });
        }
        let seed_vertex = match arg.seed {
            SeedVertex::Fixed(vertex) => {
                if vertex >= n && n > 0 {
                    return Err(KCenterError::SeedOutOfRange { vertex, n });
                }
                vertex
            }
            SeedVertex::Random(seed) => {
                if n > 0 {
                    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                    rng.random_range(0..n)
                } else {
                    0
                }
            }
        };
        log::debug!("GreedySelector seed vertex : {}", seed_vertex);
        Ok(GreedySelector {
            dist,
            nb_centers,
            seed_vertex,
        })
    } // end of new

    pub fn get_seed_vertex(&self) -> usize {
        self.seed_vertex
    }

    /// Runs the farthest-first traversal.
    ///
    /// The radius returned is the distance to the centers of the vertex that would be
    /// chosen next, i.e. the covering radius of the centers.
    /// Selection stops before k centers when every vertex is at distance 0 of a center,
    /// so no vertex is chosen twice.
    /// With k = 0 there is no center and the radius is [Distance::Unreachable] (0 if there is no vertex).
    pub fn select(&self) -> Solution {
        let n = self.dist.get_nb_vertices();
        log::info!(
            "GreedySelector::select nb vertices : {}, nb centers : {}",
            n,
            self.nb_centers
        );
        if n == 0 {
            return Solution::new(Vec::new(), Distance::ZERO);
        }
        if self.nb_centers == 0 {
            return Solution::new(Vec::new(), Distance::Unreachable);
        }
        // distance of each vertex to its nearest chosen center
        let mut to_centers = vec![Distance::Unreachable; n];
        let mut centers = Vec::<usize>::with_capacity(self.nb_centers);
        let mut next = self.seed_vertex;
        let radius = loop {
            centers.push(next);
            let row = self.dist.row(next);
            for (j, d) in to_centers.iter_mut().enumerate() {
                if row[j] < *d {
                    *d = row[j];
                }
            }
            let (farthest, gap) = farthest_vertex(&to_centers);
            log::debug!(
                "center {} : vertex {}, next farthest {} at {}",
                centers.len(),
                next,
                farthest,
                gap
            );
            if centers.len() == self.nb_centers || gap == Distance::ZERO {
                break gap;
            }
            next = farthest;
        };
        let solution = Solution::new(centers, radius);
        log::info!("GreedySelector::select done, {}", solution);
        solution
    } // end of select
} // end of impl GreedySelector

// first vertex attaining the max distance to centers
fn farthest_vertex(to_centers: &[Distance]) -> (usize, Distance) {
    let mut farthest = (0, to_centers[0]);
    for (j, d) in to_centers.iter().enumerate().skip(1) {
        if *d > farthest.1 {
            farthest = (j, *d);
        }
    }
    farthest
}

/// Checks preconditions and runs farthest-first from vertex 0.
pub fn greedy_kcenter(dist: &DistanceMatrix, nb_centers: usize) -> Result<Solution> {
    Ok(GreedySelector::new(dist, nb_centers, GreedyArg::default())?.select())
}

//========================================================================================

// end of mod tests
