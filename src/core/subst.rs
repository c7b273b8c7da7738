//! Substitutions map variables to terms.
//!
//! The store is triangular: a bound term may itself contain variables
//! bound later in the same substitution, or variables that are still
//! free. Reads must therefore chase bindings with `walk` instead of a
//! single lookup. Bindings are only ever appended; backtracking means
//! switching to a previously captured substitution value, never
//! undoing mutations.

use crate::core::term::Term;
use crate::core::var::{ReifiedVar, Var};
use indexmap::IndexMap;
use std::borrow::Cow;
use std::fmt::Formatter;

/// Insertion-ordered, append-only mapping of variables to terms.
#[derive(Clone, PartialEq)]
pub struct Substitution<'s> {
    subs: Cow<'s, IndexMap<Var, Term>>,
}

impl Default for Substitution<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'s> Substitution<'s> {
    /// Initialize an empty substitution.
    pub fn empty() -> Self {
        Substitution {
            subs: Cow::Owned(IndexMap::new()),
        }
    }

    /// Get the number of substituted variables.
    pub fn n_subs(&self) -> usize {
        self.subs.len()
    }

    /// Chase bindings until reaching an unbound variable or a
    /// non-variable term. Never descends into the structure of a pair.
    ///
    /// Idempotent: walking an already-walked term is a no-op.
    pub fn walk<'a>(&'a self, t: &'a Term) -> &'a Term {
        let mut t = t;
        while let Term::Var(v) = t {
            match self.subs.get(v) {
                Some(next) => t = next,
                None => break,
            }
        }
        t
    }

    /// Resolve variables at every level of `t`.
    pub fn walk_star(&self, t: &Term) -> Term {
        match self.walk(t) {
            Term::Pair(a, d) => {
                let (a, d) = (a.clone(), d.clone());
                Term::cons(self.walk_star(&a), self.walk_star(&d))
            }
            t => t.clone(),
        }
    }

    /// Append a variable => term binding.
    ///
    /// No occurs-check is performed: binding a variable to a term that
    /// contains that same variable is accepted, and reifying such a
    /// binding diverges. This matches the engine's documented
    /// unification semantics.
    pub fn extend(mut self, x: Var, t: Term) -> Self {
        self.subs.to_mut().insert(x, t);
        self
    }

    /// Attempt to unify `u` and `v` under this substitution.
    ///
    /// Returns the (possibly extended) substitution on success, `None`
    /// on structural mismatch. A `None` here is the ordinary backtrack
    /// signal, not an error.
    pub fn unify(self, u: &Term, v: &Term) -> Option<Self> {
        let u = self.walk(u).clone();
        let v = self.walk(v).clone();
        match (u, v) {
            (Term::Var(a), Term::Var(b)) if a == b => Some(self),
            (Term::Var(a), t) | (t, Term::Var(a)) => Some(self.extend(a, t)),
            (Term::Pair(a1, d1), Term::Pair(a2, d2)) => {
                self.unify(&a1, &a2)?.unify(&d1, &d2)
            }
            (u, v) if u == v => Some(self),
            _ => None,
        }
    }

    /// Replace all variables contained in `t` with their substituted
    /// values and rename the variables that remain free.
    ///
    /// Names are assigned in depth-first left-to-right order of first
    /// appearance, so reification is deterministic across runs.
    pub fn reify(&self, t: &Term) -> Term {
        let t = self.walk_star(t);
        let mut names = IndexMap::new();
        rename_fresh(&t, &mut names)
    }
}

fn rename_fresh(t: &Term, names: &mut IndexMap<Var, ReifiedVar>) -> Term {
    match t {
        Term::Var(v) => {
            let next = ReifiedVar {
                name: v.name(),
                index: names.len(),
            };
            Term::Reified(*names.entry(*v).or_insert(next))
        }
        Term::Pair(a, d) => Term::cons(rename_fresh(a, names), rename_fresh(d, names)),
        _ => t.clone(),
    }
}

impl std::fmt::Debug for Substitution<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut iter = self.subs.iter();
        if let Some((var, val)) = iter.next() {
            write!(f, "{:?}: {:?}", var, val)?;
        }
        for (var, val) in iter {
            write!(f, ", {:?}: {:?}", var, val)?;
        }
        write!(f, "}}")
    }
}

/// Construct a substitution from `var: term` bindings.
#[macro_export]
macro_rules! substitution {
    () => { $crate::prelude::Substitution::empty() };

    ($($var:ident : $val:expr),* $(,)?) => {{
        let mut s = $crate::prelude::Substitution::empty();
        $(
            s = s.extend($var.clone(), $crate::prelude::Term::from($val.clone()));
        )*
        s
    }}
}
