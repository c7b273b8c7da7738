//! The value domain the engine reasons over.

use crate::core::var::{ReifiedVar, Var};
use crate::error::Error;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A logic term: a variable, an atom, or a pair of terms.
///
/// Terms are immutable; new terms are built, never mutated in place.
/// Pairs share their children through `Arc`, so cloning is cheap.
#[derive(Clone, PartialEq)]
pub enum Term {
    /// An unbound or substitution-bound logic variable.
    Var(Var),
    /// A variable that remained fresh in a reified answer.
    Reified(ReifiedVar),
    /// The empty-sequence marker.
    Nil,
    Bool(bool),
    Int(i64),
    /// Symbols and strings.
    Str(Arc<str>),
    /// A cons cell; proper lists are chains of pairs ending in `Nil`.
    Pair(Arc<Term>, Arc<Term>),
}

impl Term {
    pub fn var(v: Var) -> Self {
        Term::Var(v)
    }

    pub fn rv(name: &'static str, index: usize) -> Self {
        Term::Reified(ReifiedVar { name, index })
    }

    pub fn cons(car: impl Into<Term>, cdr: impl Into<Term>) -> Self {
        Term::Pair(Arc::new(car.into()), Arc::new(cdr.into()))
    }

    pub fn try_as_var(&self) -> Option<Var> {
        match self {
            Term::Var(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_ground(&self) -> bool {
        match self {
            Term::Var(_) | Term::Reified(_) => false,
            Term::Pair(a, d) => a.is_ground() && d.is_ground(),
            _ => true,
        }
    }

    /// Extract an integer.
    ///
    /// Observing a variable where a concrete value is required is a
    /// usage error, reported here instead of masked as a logic failure.
    pub fn as_i64(&self) -> Result<i64, Error> {
        match self {
            Term::Int(n) => Ok(*n),
            Term::Var(_) | Term::Reified(_) => Err(Error::NonGround(self.clone())),
            other => Err(Error::TypeMismatch {
                expected: "integer",
                got: other.clone(),
            }),
        }
    }

    /// Extract a symbol or string.
    pub fn as_str(&self) -> Result<&str, Error> {
        match self {
            Term::Str(s) => Ok(s),
            Term::Var(_) | Term::Reified(_) => Err(Error::NonGround(self.clone())),
            other => Err(Error::TypeMismatch {
                expected: "string",
                got: other.clone(),
            }),
        }
    }

    /// Collect a proper list into a vector.
    pub fn try_to_vec(&self) -> Result<Vec<Term>, Error> {
        let mut items = vec![];
        let mut rest = self;
        loop {
            match rest {
                Term::Nil => return Ok(items),
                Term::Pair(a, d) => {
                    items.push((**a).clone());
                    rest = d;
                }
                Term::Var(_) | Term::Reified(_) => return Err(Error::NonGround(self.clone())),
                _ => {
                    return Err(Error::TypeMismatch {
                        expected: "proper list",
                        got: self.clone(),
                    })
                }
            }
        }
    }
}

impl Debug for Term {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Term::Var(v) => write!(f, "{:?}", v),
            Term::Reified(rv) => write!(f, "{:?}", rv),
            Term::Nil => write!(f, "()"),
            Term::Bool(b) => write!(f, "{:?}", b),
            Term::Int(n) => write!(f, "{}", n),
            Term::Str(s) => write!(f, "{}", s),
            Term::Pair(a, d) => {
                write!(f, "({:?}", a)?;
                let mut rest = d;
                loop {
                    match &**rest {
                        Term::Nil => break,
                        Term::Pair(a, d) => {
                            write!(f, " {:?}", a)?;
                            rest = d;
                        }
                        other => {
                            write!(f, " . {:?}", other)?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}

impl From<Var> for Term {
    fn from(v: Var) -> Self {
        Term::Var(v)
    }
}

impl From<ReifiedVar> for Term {
    fn from(rv: ReifiedVar) -> Self {
        Term::Reified(rv)
    }
}

impl From<()> for Term {
    fn from(_: ()) -> Self {
        Term::Nil
    }
}

impl From<bool> for Term {
    fn from(b: bool) -> Self {
        Term::Bool(b)
    }
}

impl From<i64> for Term {
    fn from(n: i64) -> Self {
        Term::Int(n)
    }
}

impl From<i32> for Term {
    fn from(n: i32) -> Self {
        Term::Int(i64::from(n))
    }
}

impl From<u32> for Term {
    fn from(n: u32) -> Self {
        Term::Int(i64::from(n))
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::Str(Arc::from(s))
    }
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        Term::Str(Arc::from(s.as_str()))
    }
}

impl From<(Term, Term)> for Term {
    fn from((car, cdr): (Term, Term)) -> Self {
        Term::cons(car, cdr)
    }
}

impl From<Vec<Term>> for Term {
    fn from(items: Vec<Term>) -> Self {
        let mut list = Term::Nil;
        for item in items.into_iter().rev() {
            list = Term::cons(item, list);
        }
        list
    }
}
