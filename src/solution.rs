//! A set of centers with its covering radius.

use std::fmt;

use crate::distance::Distance;
use crate::distmatrix::DistanceMatrix;

/// Centers chosen by a solver and the covering radius they achieve.
///
/// For the exact solver centers are in increasing order, for the greedy selector they
/// are in selection order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    centers: Vec<usize>,
    radius: Distance,
}

impl Solution {
    pub fn new(centers: Vec<usize>, radius: Distance) -> Self {
        Solution { centers, radius }
    }

    pub fn get_centers(&self) -> &[usize] {
        &self.centers
    }

    pub fn get_radius(&self) -> Distance {
        self.radius
    }

    pub fn get_nb_centers(&self) -> usize {
        self.centers.len()
    }

    /// for each vertex, the rank (in centers) of its nearest center and the distance to it.
    /// Ties go to the first center. Empty if there are no centers.
    pub fn dispatch(&self, dist: &DistanceMatrix) -> Vec<(usize, Distance)> {
        if self.centers.is_empty() {
            return Vec::new();
        }
        (0..dist.get_nb_vertices())
            .map(|v| {
                let mut best = (0, dist.get(v, self.centers[0]));
                for (rank, c) in self.centers.iter().enumerate().skip(1) {
                    let d = dist.get(v, *c);
                    if d < best.1 {
                        best = (rank, d);
                    }
                }
                best
            })
            .collect()
    } // end of dispatch

    /// for each center (in rank order), the largest distance of a vertex dispatched to it.
    pub fn cluster_radii(&self, dist: &DistanceMatrix) -> Vec<Distance> {
        let mut radii = vec![Distance::ZERO; self.centers.len()];
        for (rank, d) in self.dispatch(dist) {
            if d > radii[rank] {
                radii[rank] = d;
            }
        }
        radii
    }

    pub fn log(&self) {
        log::info!(
            "solution nb centers : {}, radius : {}, centers : {:?}",
            self.centers.len(),
            self.radius,
            self.centers
        );
    }
} // end of impl Solution

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "centers {:?} radius {}", self.centers, self.radius)
    }
}

/// Covering radius of a set of centers: the max over vertices v of min over centers c of D\[v\]\[c\].
///
/// Boundaries:
/// - no center and at least one vertex : no vertex is covered, the radius is [Distance::Unreachable].
/// - no vertex : nothing to cover, the radius is 0.
///
/// O(n * k).
pub fn covering_radius(dist: &DistanceMatrix, centers: &[usize]) -> Distance {
    let n = dist.get_nb_vertices();
    if n == 0 {
        return Distance::ZERO;
    }
    if centers.is_empty() {
        return Distance::Unreachable;
    }
    let mut radius = Distance::ZERO;
    for v in 0..n {
        let row = dist.row(v);
        let to_nearest = centers
            .iter()
            .map(|c| row[*c])
            .min()
            .unwrap_or(Distance::Unreachable);
        if to_nearest > radius {
            radius = to_nearest;
            // cannot get worse
            if radius == Distance::Unreachable {
                break;
            }
        }
    }
    radius
} // end of covering_radius

//========================================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use crate::graph::Graph;

    // star centered at 0 with leaves 1,2,3 at distance 1,2,3 and an isolated vertex 4
    fn star_plus_isolated() -> DistanceMatrix {
        let mut graph = Graph::new(5);
        for leaf in 1..4 {
            graph.add_edge(0, leaf, leaf as u64).unwrap();
        }
        DistanceMatrix::floyd_warshall(&graph)
    }

    #[test]
    fn radius_of_star() {
        let dist = star_plus_isolated();
        assert_eq!(covering_radius(&dist, &[0]), Distance::Unreachable);
        assert_eq!(covering_radius(&dist, &[0, 4]), Distance::Finite(3));
        assert_eq!(covering_radius(&dist, &[3, 4]), Distance::Finite(5));
        assert_eq!(covering_radius(&dist, &[0, 1, 2, 3, 4]), Distance::ZERO);
    }

    #[test]
    fn radius_boundaries() {
        let dist = star_plus_isolated();
        assert_eq!(covering_radius(&dist, &[]), Distance::Unreachable);
        let empty = DistanceMatrix::floyd_warshall(&Graph::new(0));
        assert_eq!(covering_radius(&empty, &[]), Distance::ZERO);
    }

    #[test]
    fn dispatch_to_nearest() {
        let dist = star_plus_isolated();
        let solution = Solution::new(vec![4, 3], covering_radius(&dist, &[4, 3]));
        let dispatch = solution.dispatch(&dist);
        assert_eq!(dispatch.len(), 5);
        assert_eq!(dispatch[0], (1, Distance::Finite(3)));
        assert_eq!(dispatch[3], (1, Distance::ZERO));
        assert_eq!(dispatch[4], (0, Distance::ZERO));
        let max_assigned = dispatch.iter().map(|(_, d)| *d).max().unwrap();
        assert_eq!(max_assigned, solution.get_radius());
    }

    #[test]
    fn radius_per_center() {
        let dist = star_plus_isolated();
        let solution = Solution::new(vec![0, 4], covering_radius(&dist, &[0, 4]));
        let radii = solution.cluster_radii(&dist);
        assert_eq!(radii, vec![Distance::Finite(3), Distance::ZERO]);
        assert_eq!(radii.iter().max().copied(), Some(solution.get_radius()));
        // isolated vertex 4 left uncovered
        let solution = Solution::new(vec![1], covering_radius(&dist, &[1]));
        assert_eq!(solution.cluster_radii(&dist), vec![Distance::Unreachable]);
        assert!(Solution::new(vec![], Distance::Unreachable).cluster_radii(&dist).is_empty());
    }
} // end of mod tests
