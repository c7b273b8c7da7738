//! Relational list programming.
//!
//! Lists are chains of pairs ending in `Nil`, as built by [`list!`].
//! All relations here are defined with `defrel!`, so they can recurse
//! and run in any direction the search can support.

use crate::core::term::Term;
use crate::goals::combinators::{ifte, once};
use crate::goals::primitive::eq;
use crate::{all, conde, defrel, fresh};

/// Build a proper list term from its elements.
#[macro_export]
macro_rules! list {
    () => {
        $crate::core::term::Term::Nil
    };
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::core::term::Term::cons($first, $crate::list!($($rest),*))
    };
}

defrel! {
    /// `pair` is the cons of `car` and `cdr`.
    pub conso(car, cdr, pair) {
        eq(Term::cons(car, cdr), pair)
    }
}

defrel! {
    /// `car` is the first element of `pair`.
    pub caro(pair, car) {
        fresh!((d), conso(car, d, pair))
    }
}

defrel! {
    /// `cdr` is the rest of `pair`.
    pub cdro(pair, cdr) {
        fresh!((a), conso(a, cdr, pair))
    }
}

defrel! {
    /// `x` is the empty list.
    pub nullo(x) {
        eq(x, ())
    }
}

defrel! {
    /// `p` is a cons cell.
    pub pairo(p) {
        fresh!((a, d), conso(a, d, p))
    }
}

defrel! {
    /// `x` is an element of `list`.
    ///
    /// With `list` fresh this enumerates ever-longer open lists that
    /// contain `x`.
    pub membero(x, list) {
        conde!(
            fresh!((d), conso(x.clone(), d, list.clone()));
            fresh!((a, d), conso(a, d, list), membero(x, d)))
    }
}

defrel! {
    /// `out` is `l` followed by `s`.
    pub appendo(l, s, out) {
        conde!(
            nullo(l.clone()), eq(s.clone(), out.clone());
            fresh!((a, d, res),
                conso(a, d, l),
                conso(a, res, out),
                appendo(d, s, res)))
    }
}

defrel! {
    /// `r` is `l` reversed.
    pub reverso(l, r) {
        conde!(
            nullo(l.clone()), nullo(r.clone());
            fresh!((a, d, rd),
                conso(a, d, l),
                reverso(d, rd),
                appendo(rd, vec![Term::var(a)], r)))
    }
}

defrel! {
    /// `rest` is `list` with one occurrence of `x` removed.
    ///
    /// With `x` fresh this selects each element of `list` in turn,
    /// which makes it the workhorse of permutation-style searches.
    pub selecto(x, list, rest) {
        conde!(
            conso(x.clone(), rest.clone(), list.clone());
            fresh!((a, d, dr),
                conso(a, d, list),
                conso(a, dr, rest),
                selecto(x, d, dr)))
    }
}

defrel! {
    /// `out` is the set union of `a` and `b`: the elements of `a` not
    /// in `b`, followed by all of `b`. Elements shared between the
    /// operands keep their position in `b`.
    pub uniono(a, b, out) {
        conde!(
            nullo(a.clone()), eq(b.clone(), out.clone());
            fresh!((x, d, res),
                conso(x, d, a),
                ifte(
                    once(membero(x, b.clone())),
                    uniono(d, b.clone(), out.clone()),
                    all!(conso(x, res, out), uniono(d, b, res)))))
    }
}
