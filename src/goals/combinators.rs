//! Combinators that compose goals into larger goals.

use crate::core::goal::Goal;
use crate::core::stream::Stream;
use crate::core::term::Term;
use crate::error::Error;
use crate::goals::primitive::eq;
use crate::goals::StatSubs;
use std::sync::Arc;

/// Creates a goal that succeeds if both its subgoals succeed.
pub fn conj2(
    g1: impl Goal<StatSubs> + 'static,
    g2: impl Goal<StatSubs> + 'static,
) -> impl Goal<StatSubs> {
    let g2: Arc<dyn Goal<StatSubs>> = Arc::new(g2);
    move |s: StatSubs| g1.apply(s).append_map_inf(g2.clone())
}

/// Creates a goal that succeeds if one of its subgoals succeeds.
/// Answers arrive depth-first: all of `g1`'s before any of `g2`'s, so
/// an infinitely productive `g1` starves `g2`.
pub fn disj2(
    g1: impl Goal<StatSubs> + 'static,
    g2: impl Goal<StatSubs> + 'static,
) -> impl Goal<StatSubs> {
    move |s: StatSubs| Stream::append_inf(g1.apply(s.clone()), g2.apply(s))
}

/// Like [`disj2`], but the two answer streams are merged fairly: each
/// branch's next answer is delayed by at most one answer of the other,
/// so a diverging branch cannot hide a productive one.
pub fn disji2(
    g1: impl Goal<StatSubs> + 'static,
    g2: impl Goal<StatSubs> + 'static,
) -> impl Goal<StatSubs> {
    move |s: StatSubs| Stream::interleave_inf(g1.apply(s.clone()), g2.apply(s))
}

/// Soft cut: if `g_cond` has any answer, behave as `g_cond` and `g_then`;
/// only if `g_cond` fails outright, behave as `g_else` on the original
/// substitution. The condition is forced just far enough to decide.
pub fn ifte(
    g_cond: impl Goal<StatSubs> + 'static,
    g_then: impl Goal<StatSubs> + 'static,
    g_else: impl Goal<StatSubs> + 'static,
) -> impl Goal<StatSubs> {
    let g_then: Arc<dyn Goal<StatSubs>> = Arc::new(g_then);
    move |s: StatSubs| {
        let mut s_inf = g_cond.apply(s.clone());
        loop {
            match s_inf {
                Stream::Empty => return g_else.apply(s),
                Stream::Pair(_, _) => return s_inf.append_map_inf(g_then.clone()),
                Stream::Suspension(sup) => s_inf = sup(),
            }
        }
    }
}

/// Creates a goal that succeeds at most once, with `g`'s first answer.
pub fn once(g: impl Goal<StatSubs> + 'static) -> impl Goal<StatSubs> {
    move |s: StatSubs| g.apply(s).limit(1)
}

/// Creates a goal that delivers at most `n` of `g`'s answers; the
/// search beyond them is abandoned, not merely hidden.
pub fn at_most(n: usize, g: impl Goal<StatSubs> + 'static) -> impl Goal<StatSubs> {
    move |s: StatSubs| g.apply(s).limit(n)
}

/// Creates a goal that delivers at most the first two answers of `g`;
/// shorthand for `at_most(2, g)`.
pub fn twice(g: impl Goal<StatSubs> + 'static) -> impl Goal<StatSubs> {
    at_most(2, g)
}

/// First-order form of fresh-variable introduction, for callers that
/// assemble goals programmatically instead of through `fresh!`. The
/// variable is created anew on every application, so its identity
/// never leaks across search branches.
pub fn call_with_fresh<G: Goal<StatSubs>>(
    name: &'static str,
    f: impl Fn(crate::core::var::Var) -> G,
) -> impl Goal<StatSubs> {
    move |s: StatSubs| f(crate::core::var::Var::new(name)).apply(s)
}

/// Conjunction over a whole sequence of goals. Succeeds when every
/// goal in turn succeeds; an empty sequence succeeds once.
pub fn everyg(goals: Vec<Arc<dyn Goal<StatSubs>>>) -> impl Goal<StatSubs> {
    move |s: StatSubs| {
        let mut stream = Stream::singleton(s);
        for g in &goals {
            stream = stream.append_map_inf(g.clone());
        }
        stream
    }
}

/// One clause of a relation: unify the call arguments against the
/// clause head, then run the body goal. Arity is checked when the
/// clause is built, not when it runs.
pub fn clause(
    relation: &str,
    call_args: Vec<Term>,
    head: Vec<Term>,
    body: impl Goal<StatSubs> + 'static,
) -> Result<impl Goal<StatSubs>, Error> {
    if call_args.len() != head.len() {
        return Err(Error::ArityMismatch {
            relation: relation.to_string(),
            expected: head.len(),
            got: call_args.len(),
        });
    }
    Ok(ifte(
        everyg(
            call_args
                .into_iter()
                .zip(head)
                .map(|(a, h)| -> Arc<dyn Goal<StatSubs>> { Arc::new(eq(a, h)) })
                .collect(),
        ),
        body,
        crate::goals::primitive::fail(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::subst::Substitution;
    use crate::core::var::Var;
    use crate::goals::primitive::{alwayso, eq, fail, nevero, succeed};
    use crate::substitution;
    use crate::testing::{fails, succeeds};

    #[test]
    fn conj2_threads_bindings_left_to_right() {
        let x = Var::new("x");
        let y = Var::new("y");
        assert_eq!(
            conj2(eq(x, 1), eq(y, x)).apply(Substitution::empty()),
            Stream::singleton(substitution!(x: 1, y: 1))
        );
    }

    #[test]
    fn conj2_fails_if_either_conjunct_fails() {
        assert!(fails(conj2(succeed(), fail())));
        assert!(fails(conj2(fail(), succeed())));
    }

    #[test]
    fn disj2_collects_answers_of_both_branches() {
        let x = Var::new("x");
        assert_eq!(
            disj2(eq(x, 1), eq(x, 2)).apply(Substitution::empty()),
            Stream::cons(substitution!(x: 1), Stream::singleton(substitution!(x: 2)))
        );
    }

    #[test]
    fn disj2_starves_its_right_branch_behind_alwayso() {
        let x = Var::new("x");
        let g = disj2(conj2(alwayso(), eq(x, 1)), eq(x, 2));
        let answers: Vec<_> = g.apply(Substitution::empty()).take_inf(4).into_vec();
        assert!(answers.iter().all(|s| *s == substitution!(x: 1)));
    }

    #[test]
    fn disji2_lets_a_finite_branch_through_despite_alwayso() {
        let x = Var::new("x");
        let g = disji2(conj2(alwayso(), eq(x, 1)), eq(x, 2));
        let answers: Vec<_> = g.apply(Substitution::empty()).take_inf(2).into_vec();
        assert!(answers.contains(&substitution!(x: 2)));
    }

    #[test]
    fn ifte_commits_to_the_then_branch_when_the_condition_holds() {
        let y = Var::new("y");
        assert_eq!(
            ifte(succeed(), eq(y, false), eq(y, true)).apply(Substitution::empty()),
            Stream::singleton(substitution!(y: false))
        );
    }

    #[test]
    fn ifte_takes_the_else_branch_when_the_condition_fails() {
        let y = Var::new("y");
        assert_eq!(
            ifte(fail(), eq(y, false), eq(y, true)).apply(Substitution::empty()),
            Stream::singleton(substitution!(y: true))
        );
    }

    #[test]
    fn ifte_runs_the_then_branch_per_condition_answer() {
        let x = Var::new("x");
        let y = Var::new("y");
        assert_eq!(
            ifte(disj2(eq(x, 1), eq(x, 2)), eq(y, false), eq(y, true))
                .apply(Substitution::empty()),
            Stream::cons(
                substitution!(x: 1, y: false),
                Stream::singleton(substitution!(x: 2, y: false))
            )
        );
    }

    #[test]
    fn once_cuts_an_infinite_goal_down_to_one_answer() {
        assert_eq!(
            once(alwayso()).apply(Substitution::empty()).take_inf_all(),
            Stream::singleton(Substitution::empty())
        );
    }

    #[test]
    fn at_most_bounds_the_answers_of_an_infinite_goal() {
        let stream = at_most(3, alwayso())
            .apply(Substitution::empty())
            .take_inf_all();
        assert_eq!(stream.len(), Some(3));
    }

    #[test]
    fn at_most_zero_is_failure_even_for_nevero() {
        assert!(fails(at_most(0, nevero())));
    }

    #[test]
    fn twice_bounds_an_infinite_goal_to_two_answers() {
        let stream = twice(alwayso()).apply(Substitution::empty()).take_inf_all();
        assert_eq!(stream.len(), Some(2));

        // a single answer is not padded
        let x = Var::new("x");
        assert_eq!(
            twice(eq(x, 1)).apply(Substitution::empty()).take_inf_all(),
            Stream::singleton(substitution!(x: 1))
        );
    }

    #[test]
    fn call_with_fresh_passes_a_new_variable_to_its_body() {
        let g = call_with_fresh("v", |v| eq(v, 7));
        let answers = g.apply(Substitution::empty()).take_inf_all();
        assert_eq!(answers.len(), Some(1));
    }

    #[test]
    fn everyg_over_no_goals_succeeds_once() {
        assert!(succeeds(everyg(vec![])));
    }

    #[test]
    fn everyg_requires_all_goals_to_hold() {
        let x = Var::new("x");
        let y = Var::new("y");
        let goals: Vec<Arc<dyn Goal<StatSubs>>> =
            vec![Arc::new(eq(x, 1)), Arc::new(eq(y, 2))];
        assert_eq!(
            everyg(goals).apply(Substitution::empty()),
            Stream::singleton(substitution!(x: 1, y: 2))
        );
        let goals: Vec<Arc<dyn Goal<StatSubs>>> = vec![Arc::new(eq(x, 1)), Arc::new(fail())];
        assert!(fails(everyg(goals)));
    }

    #[test]
    fn clause_unifies_call_arguments_against_its_head() {
        let x = Var::new("x");
        let g = clause(
            "edge",
            vec![Term::from("a"), Term::var(x)],
            vec![Term::from("a"), Term::from("b")],
            succeed(),
        )
        .unwrap();
        assert_eq!(
            g.apply(Substitution::empty()),
            Stream::singleton(substitution!(x: "b"))
        );
    }

    #[test]
    fn clause_rejects_an_arity_mismatch() {
        let err = clause("edge", vec![Term::from("a")], vec![], succeed())
            .map(|_| ())
            .unwrap_err();
        assert_eq!(
            err,
            Error::ArityMismatch {
                relation: "edge".to_string(),
                expected: 0,
                got: 1,
            }
        );
    }
}
