//! Instances loading and reporting for the k-center experiments.

pub mod io;
