//! A relational logic programming engine in the miniKanren tradition.
//!
//! Programs are built from *goals*: computations that take a
//! substitution (a set of variable bindings) and produce a lazy stream
//! of substitutions, one per way of satisfying the goal. The primitive
//! goal [`eq`](goals::primitive::eq) unifies two terms; combinators
//! and macros compose goals into conjunctions, disjunctions (fair or
//! depth-first), committed choices, and recursive relations. The
//! [`run!`] macro drives the search and reifies each answer into a
//! printable [`Term`](core::term::Term).
//!
//! Unification performs no occurs check: binding a variable to a term
//! containing that variable is accepted, and reifying such an answer
//! diverges. Programs that never unify a variable into itself are
//! unaffected.
//!
//! ```
//! use kanrel::prelude::*;
//! use kanrel::{conde, defrel, run};
//!
//! defrel! {
//!     flavoro(f) {
//!         conde!(
//!             eq(f.clone(), "chocolate");
//!             eq(f, "vanilla"))
//!     }
//! }
//!
//! let flavors = run!(*, q, flavoro(q)).into_vec();
//! assert_eq!(flavors, vec![Term::from("chocolate"), Term::from("vanilla")]);
//! ```

pub mod core;
pub mod database;
pub mod error;
pub mod goals;
pub mod macros;
pub mod prelude;
pub mod testing;

// re-exported for use by macro expansions
#[doc(hidden)]
pub use log;
