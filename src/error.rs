//! Errors reported by the k-center core.
//!
//! All of them are precondition violations detected before an algorithm starts.

use thiserror::Error;

use crate::distance::Distance;

/// Result type alias for the core.
pub type Result<T> = std::result::Result<T, KCenterError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KCenterError {
    /// more centers asked than vertices available
    #[error("asked for {k} centers but graph has only {n} vertices")]
    TooManyCenters { k: usize, n: usize },

    /// adjacency rows do not all have as many entries as there are rows
    #[error("adjacency matrix is not square: {nrows} rows, a row of length {ncols}")]
    NonSquareMatrix { nrows: usize, ncols: usize },

    #[error("self distance of vertex {vertex} is {value}, expected 0")]
    NonZeroDiagonal { vertex: usize, value: Distance },

    /// undirected graphs only
    #[error("asymmetric weights between vertices {u} and {v}")]
    Asymmetric { u: usize, v: usize },

    #[error("vertex {vertex} out of range, graph has {n} vertices")]
    VertexOutOfRange { vertex: usize, n: usize },

    #[error("seed vertex {vertex} out of range, graph has {n} vertices")]
    SeedOutOfRange { vertex: usize, n: usize },
}
