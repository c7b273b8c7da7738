//! Library of goals

use crate::core::subst::Substitution;

pub mod combinators;
pub mod list;
pub mod primitive;

pub type StatSubs = Substitution<'static>;
