//! Cox–Ross–Rubinstein binomial lattice.
//!
//! [`TreeParameters`] holds the per-step lattice quantities derived from a
//! market snapshot; [`BinomialTreePricer`] runs backward induction over a
//! single rolling array of node values and handles both European and
//! American exercise.

mod binomial;
mod params;

pub use binomial::{BinomialTreePricer, MAX_TREE_STEPS};
pub use params::TreeParameters;
