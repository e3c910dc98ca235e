pub use solver::*;

mod solver;
