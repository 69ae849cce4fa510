pub mod error;
pub mod percolation;
pub mod percolationstats;
pub mod quickfind;
pub mod quickunion;
pub mod session;
pub mod unionfind;

pub use error::{Error, Result};
pub use percolation::Percolation;
pub use percolationstats::PercolationStats;
pub use quickfind::QuickFind;
pub use quickunion::QuickUnion;
pub use unionfind::{DisjointSet, UnionFind};
