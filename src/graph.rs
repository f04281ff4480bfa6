//! Undirected weighted graph stored as a dense adjacency matrix.
//!
//! Absent edges are [Distance::Unreachable], the diagonal is 0.

use ndarray::Array2;

use crate::distance::Distance;
use crate::error::{KCenterError, Result};

/// The adjacency matrix of an undirected graph with non negative integer weights.
#[derive(Clone, Debug)]
pub struct Graph {
    adjacency: Array2<Distance>,
}

impl Graph {
    /// a graph with nb_vertices vertices and no edge
    pub fn new(nb_vertices: usize) -> Self {
        let mut adjacency =
            Array2::<Distance>::from_elem((nb_vertices, nb_vertices), Distance::Unreachable);
        for i in 0..nb_vertices {
            adjacency[[i, i]] = Distance::ZERO;
        }
        Graph { adjacency }
    }

    /// Validates an adjacency matrix: square, zero diagonal and symmetric.
    pub fn from_adjacency(adjacency: Array2<Distance>) -> Result<Self> {
        let (nrows, ncols) = adjacency.dim();
        if nrows != ncols {
            return Err(KCenterError::NonSquareMatrix { nrows, ncols });
        }
        for i in 0..nrows {
            if adjacency[[i, i]] != Distance::ZERO {
                return Err(KCenterError::NonZeroDiagonal {
                    vertex: i,
                    value: adjacency[[i, i]],
                });
            }
            for j in 0..i {
                if adjacency[[i, j]] != adjacency[[j, i]] {
                    return Err(KCenterError::Asymmetric { u: j, v: i });
                }
            }
        }
        Ok(Graph { adjacency })
    }

    /// Same as [from_adjacency](Self::from_adjacency) from a row representation,
    /// each row must have as many entries as there are rows.
    pub fn from_rows(rows: &[Vec<Distance>]) -> Result<Self> {
        let nrows = rows.len();
        let mut values = Vec::<Distance>::with_capacity(nrows * nrows);
        for row in rows {
            if row.len() != nrows {
                return Err(KCenterError::NonSquareMatrix {
                    nrows,
                    ncols: row.len(),
                });
            }
            values.extend_from_slice(row);
        }
        let adjacency = Array2::from_shape_vec((nrows, nrows), values).map_err(|_| {
            KCenterError::NonSquareMatrix {
                nrows,
                ncols: nrows,
            }
        })?;
        Graph::from_adjacency(adjacency)
    }

    /// Sets the weight of edge (u,v) in both directions, replacing any previous weight.
    /// A self loop leaves the diagonal at 0.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: u64) -> Result<()> {
        let n = self.get_nb_vertices();
        for vertex in [u, v] {
            if vertex >= n {
                return Err(KCenterError::VertexOutOfRange { vertex, n });
            }
        }
        if u == v {
            log::debug!("ignoring self loop on vertex {}", u);
            return Ok(());
        }
        self.adjacency[[u, v]] = Distance::Finite(weight);
        self.adjacency[[v, u]] = Distance::Finite(weight);
        Ok(())
    } // end of add_edge

    pub fn get_nb_vertices(&self) -> usize {
        self.adjacency.nrows()
    }

    /// number of (undirected) edges present
    pub fn get_nb_edges(&self) -> usize {
        let n = self.get_nb_vertices();
        let mut nb_edges = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                if self.adjacency[[i, j]].is_finite() {
                    nb_edges += 1;
                }
            }
        }
        nb_edges
    }

    pub fn get_weight(&self, u: usize, v: usize) -> Distance {
        self.adjacency[[u, v]]
    }

    pub(crate) fn get_adjacency(&self) -> &Array2<Distance> {
        &self.adjacency
    }
} // end of impl Graph

//========================================================================================

/// random connected graph: a random spanning tree plus nb_extra random edges.
/// Used by tests of the solvers.
#[cfg(test)]
pub(crate) fn random_connected_graph(
    nb_vertices: usize,
    nb_extra: usize,
    max_weight: u64,
    seed: u64,
) -> Graph {
    use rand::Rng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use rand_xoshiro::rand_core::SeedableRng;
    //
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut graph = Graph::new(nb_vertices);
    for v in 1..nb_vertices {
        let u = rng.random_range(0..v);
        graph
            .add_edge(u, v, rng.random_range(1..=max_weight))
            .unwrap();
    }
    if nb_vertices > 1 {
        for _ in 0..nb_extra {
            let u = rng.random_range(0..nb_vertices);
            let v = rng.random_range(0..nb_vertices);
            graph
                .add_edge(u, v, rng.random_range(1..=max_weight))
                .unwrap();
        }
    }
    graph
} // end of random_connected_graph

// end of mod tests
