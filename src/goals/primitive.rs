//! Primitive goals: the leaves every search tree is built from.

use crate::core::goal::Goal;
use crate::core::stream::Stream;
use crate::core::term::Term;
use crate::core::var::Var;
use crate::goals::StatSubs;

/// Creates a goal that succeeds if `u` unifies with `v`.
///
/// This is the only goal that extends the substitution.
pub fn eq(u: impl Into<Term>, v: impl Into<Term>) -> impl Goal<StatSubs> {
    let u = u.into();
    let v = v.into();
    move |s: StatSubs| match s.unify(&u, &v) {
        Some(s) => Stream::singleton(s),
        None => Stream::empty(),
    }
}

/// Creates a goal that succeeds exactly once, with the substitution
/// unchanged.
pub fn succeed() -> impl Goal<StatSubs> {
    |s: StatSubs| Stream::singleton(s)
}

/// Creates a goal that never succeeds.
pub fn fail() -> impl Goal<StatSubs> {
    |_: StatSubs| -> Stream<StatSubs> { Stream::empty() }
}

/// Bridge a host-language test into the goal protocol: succeed once
/// if it held, fail otherwise.
pub fn predicate(holds: bool) -> impl Goal<StatSubs> {
    move |s: StatSubs| -> Stream<StatSubs> {
        if holds {
            Stream::singleton(s)
        } else {
            Stream::empty()
        }
    }
}

/// A goal that suspends forever without ever succeeding or failing.
pub fn nevero() -> impl Goal<StatSubs> {
    fn never(s: StatSubs) -> Stream<StatSubs> {
        Stream::suspension(move || never(s))
    }
    never
}

/// A goal that succeeds any number of times.
pub fn alwayso() -> impl Goal<StatSubs> {
    fn forever(s: StatSubs) -> Stream<StatSubs> {
        Stream::cons(s.clone(), Stream::suspension(move || forever(s)))
    }
    forever
}

/// Pass-through diagnostic goal: logs the current value of the given
/// variables at debug level, then succeeds with the substitution
/// unchanged. Purely observational; never alters search semantics.
pub fn inspect(label: &'static str, vars: Vec<(&'static str, Var)>) -> impl Goal<StatSubs> {
    move |s: StatSubs| {
        if log::log_enabled!(log::Level::Debug) {
            for (name, var) in &vars {
                log::debug!("{}: {} = {:?}", label, name, s.reify(&Term::var(*var)));
            }
        }
        Stream::singleton(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::subst::Substitution;
    use crate::core::var::Var;
    use crate::substitution;

    #[test]
    fn eq_binds_a_fresh_variable() {
        let x = Var::new("x");
        assert_eq!(
            eq(x, 42).apply(Substitution::empty()),
            Stream::singleton(substitution!(x: 42))
        );
    }

    #[test]
    fn eq_of_two_fresh_variables_binds_the_first_to_the_second() {
        let x = Var::new("x");
        let y = Var::new("y");
        assert_eq!(
            eq(x, y).apply(Substitution::empty()),
            Stream::singleton(substitution!(x: y))
        );
    }

    #[test]
    fn eq_of_equal_atoms_leaves_the_substitution_unchanged() {
        assert_eq!(
            eq(42, 42).apply(Substitution::empty()),
            Stream::singleton(Substitution::empty())
        );
    }

    #[test]
    fn eq_of_unequal_atoms_fails() {
        assert_eq!(eq(42, 123).apply(Substitution::empty()), Stream::Empty);
        assert_eq!(eq(true, false).apply(Substitution::empty()), Stream::Empty);
    }

    #[test]
    fn succeed_and_fail_are_the_unit_goals() {
        assert_eq!(
            succeed().apply(Substitution::empty()),
            Stream::singleton(Substitution::empty())
        );
        assert_eq!(fail().apply(Substitution::empty()), Stream::Empty);
    }

    #[test]
    fn predicate_reflects_the_host_test() {
        assert_eq!(
            predicate(1 < 2).apply(Substitution::empty()),
            Stream::singleton(Substitution::empty())
        );
        assert_eq!(predicate(2 < 1).apply(Substitution::empty()), Stream::Empty);
    }

    #[test]
    fn alwayso_succeeds_as_often_as_asked() {
        assert_eq!(
            alwayso().apply(Substitution::empty()).take_inf(3),
            Stream::from_iter(
                vec![
                    Substitution::empty(),
                    Substitution::empty(),
                    Substitution::empty()
                ]
                .into_iter()
            )
        );
    }

    #[test]
    fn inspect_does_not_alter_the_stream() {
        let x = Var::new("x");
        let g = inspect("here", vec![("x", x)]);
        assert_eq!(
            g.apply(substitution!(x: 1)),
            Stream::singleton(substitution!(x: 1))
        );
    }
}
