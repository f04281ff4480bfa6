//! All pairs shortest path matrix computed by Floyd-Warshall.
//!
//! The matrix is the metric closure of the graph: it is symmetric, has a zero diagonal and
//! satisfies the triangle inequality. Pairs in different connected components stay
//! [Distance::Unreachable]. Once built the matrix is never modified, so it can be shared
//! between solvers running on different threads.

use ndarray::{Array2, ArrayView1};
use quantiles::ckms::CKMS;

use crate::distance::Distance;
use crate::graph::Graph;

#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    dist: Array2<Distance>,
}

impl DistanceMatrix {
    /// Runs Floyd-Warshall on the adjacency matrix of graph. O(n^3) time, O(n^2) memory.
    pub fn floyd_warshall(graph: &Graph) -> Self {
        let mut dist = graph.get_adjacency().clone();
        let n = dist.nrows();
        log::info!("floyd_warshall, nb vertices : {}", n);
        //
        for k in 0..n {
            for i in 0..n {
                // no path through k from i, nothing to relax on this row
                let d_ik = dist[[i, k]];
                if !d_ik.is_finite() {
                    continue;
                }
                for j in 0..n {
                    if let Some(through_k) = d_ik.checked_add(dist[[k, j]]) {
                        if through_k < dist[[i, j]] {
                            dist[[i, j]] = through_k;
                        }
                    }
                }
            }
            log::trace!("floyd_warshall intermediate vertex {} done", k);
        }
        //
        let res = DistanceMatrix { dist };
        log::debug!(
            "floyd_warshall done, nb unreachable pairs : {}",
            res.get_nb_unreachable_pairs()
        );
        res
    } // end of floyd_warshall

    pub fn get_nb_vertices(&self) -> usize {
        self.dist.nrows()
    }

    pub fn get(&self, i: usize, j: usize) -> Distance {
        self.dist[[i, j]]
    }

    /// distances from vertex i to all vertices
    pub fn row(&self, i: usize) -> ArrayView1<'_, Distance> {
        self.dist.row(i)
    }

    /// number of unordered pairs {i,j} without a path
    pub fn get_nb_unreachable_pairs(&self) -> usize {
        let n = self.get_nb_vertices();
        let mut nb_unreachable = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                if !self.dist[[i, j]].is_finite() {
                    nb_unreachable += 1;
                }
            }
        }
        nb_unreachable
    }

    /// true if every pair of vertices is joined by a path
    pub fn is_connected(&self) -> bool {
        self.get_nb_unreachable_pairs() == 0
    }

    /// largest finite distance between two vertices, None if the matrix is empty
    pub fn get_max_finite(&self) -> Option<u64> {
        self.dist.iter().filter_map(|d| d.finite()).max()
    }

    /// Quantile summary of finite distances between distinct vertices (each pair once).
    /// Gives the scale of the radii the solvers can return.
    pub fn quantiles(&self) -> CKMS<f64> {
        let n = self.get_nb_vertices();
        let mut q_dist = CKMS::<f64>::new(0.01);
        for i in 0..n {
            for j in (i + 1)..n {
                if let Some(d) = self.dist[[i, j]].finite() {
                    q_dist.insert(d as f64);
                }
            }
        }
        q_dist
    } // end of quantiles
} // end of impl DistanceMatrix

//========================================================================================

// end of mod tests
