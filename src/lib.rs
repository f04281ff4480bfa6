//! Metric k-center on weighted undirected graphs.
//!
//! The graph is turned into its all pairs shortest path matrix by Floyd-Warshall
//! (see [distmatrix]), then centers are chosen either exactly by enumeration of all k-subsets
//! (see [exact]) or by the farthest-first 2-approximation (see [greedy]).
//! Both solvers only read the distance matrix and can run concurrently on it.

pub mod prelude;

pub mod distance;
pub mod error;
pub mod graph;

pub mod distmatrix;
pub mod solution;

pub mod exact;
pub mod greedy;
