//! Core data structures and logic algorithms

pub mod goal;
pub mod stream;
pub mod subst;
pub mod term;
pub mod var;
