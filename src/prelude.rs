//! The commonly used parts of the crate in one import.

pub use crate::core::goal::Goal;
pub use crate::core::stream::{Stream, StreamIter};
pub use crate::core::subst::Substitution;
pub use crate::core::term::Term;
pub use crate::core::var::{ReifiedVar, Var};
pub use crate::database::{facts, Database, Recursive};
pub use crate::error::Error;
pub use crate::goals::combinators::*;
pub use crate::goals::list::*;
pub use crate::goals::primitive::*;
pub use crate::goals::StatSubs;
