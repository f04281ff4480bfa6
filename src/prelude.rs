// inclusion facility

pub use crate::distance::*;
pub use crate::error::KCenterError;
pub use crate::graph::Graph;

pub use crate::distmatrix::*;
pub use crate::solution::*;

pub use crate::exact::*;
pub use crate::greedy::*;
