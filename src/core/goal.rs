//! The goal abstraction.
//!
//! A goal is any computation that maps a substitution to a stream of
//! extended substitutions: the empty stream is failure, each element
//! is one way of satisfying the goal. Composing goals never inspects
//! their internals, only applies them.

use crate::core::stream::{Stream, StreamIter};

pub trait Goal<T> {
    /// Run the goal against a substitution.
    fn apply(&self, s: T) -> Stream<T>;

    /// Extract at most `n` answers, starting from scratch.
    fn run(&self, n: usize) -> Stream<T>
    where
        T: Default,
    {
        self.apply(T::default()).take_inf(n)
    }

    /// Extract every answer. Diverges if the goal has infinitely many.
    fn run_inf(&self) -> Stream<T>
    where
        T: Default,
    {
        self.apply(T::default()).take_inf_all()
    }

    /// Lazily iterate the answers; single-pass, restartable only by
    /// calling `iter` again.
    fn iter(&self) -> StreamIter<T>
    where
        T: Default,
    {
        self.apply(T::default()).into_iter()
    }
}

impl<T, G: Fn(T) -> Stream<T>> Goal<T> for G {
    fn apply(&self, s: T) -> Stream<T> {
        self(s)
    }
}
