//! Lazy streams of answers.
//!
//! A stream is the engine's success/failure control flow made
//! explicit: `Pair` carries one success together with the computation
//! that resumes the remaining alternatives, `Empty` signals that a
//! branch is exhausted, and `Suspension` is a resumable search state
//! that has not produced an answer yet. Consumers drive streams with
//! an explicit loop, so arbitrarily long suspension chains do not
//! grow the call stack.
//!
//! Dropping a stream drops the whole chain of pending alternatives;
//! no cleanup side effects are attached, so cancellation is free.

use crate::core::goal::Goal;
use std::sync::Arc;

pub enum Stream<T> {
    Empty,
    Pair(T, Box<Stream<T>>),
    Suspension(Box<dyn FnOnce() -> Stream<T>>),
}

impl<T> Stream<T> {
    pub fn empty() -> Self {
        Stream::Empty
    }

    pub fn singleton(x: T) -> Self {
        Stream::cons(x, Stream::Empty)
    }

    pub fn cons(a: T, d: Self) -> Self {
        Stream::Pair(a, Box::new(d))
    }

    pub fn suspension(sup: impl 'static + FnOnce() -> Stream<T>) -> Self {
        Stream::Suspension(Box::new(sup))
    }

    pub fn from_iter(mut iter: impl Iterator<Item = T>) -> Self {
        match iter.next() {
            None => Stream::Empty,
            Some(item) => Stream::cons(item, Stream::from_iter(iter)),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Stream::Empty)
    }

    /// Number of already-produced answers, or `None` if the stream
    /// ends in a suspension.
    pub fn len(&self) -> Option<usize> {
        match self {
            Stream::Empty => Some(0),
            Stream::Pair(_, d) => d.len().map(|l| l + 1),
            Stream::Suspension(_) => None,
        }
    }

    /// Force up to `n` answers, eagerly. Suspensions are driven in a
    /// loop, so arbitrarily deep chains stay off the call stack.
    pub fn take_inf(self, n: usize) -> Stream<T> {
        let mut answers = Vec::new();
        let mut stream = self;
        while answers.len() < n {
            match stream {
                Stream::Empty => break,
                Stream::Pair(a, d) => {
                    answers.push(a);
                    stream = *d;
                }
                Stream::Suspension(sup) => stream = sup(),
            }
        }
        Stream::of_answers(answers)
    }

    /// Force the whole stream, driving suspensions in a loop.
    /// Diverges on an infinite stream; bounding is the caller's
    /// responsibility.
    pub fn take_inf_all(self) -> Stream<T> {
        let mut answers = Vec::new();
        let mut stream = self;
        loop {
            match stream {
                Stream::Empty => break,
                Stream::Pair(a, d) => {
                    answers.push(a);
                    stream = *d;
                }
                Stream::Suspension(sup) => stream = sup(),
            }
        }
        Stream::of_answers(answers)
    }

    fn of_answers(answers: Vec<T>) -> Stream<T> {
        let mut stream = Stream::Empty;
        for a in answers.into_iter().rev() {
            stream = Stream::cons(a, stream);
        }
        stream
    }
}

impl<T: 'static> Stream<T> {
    /// Concatenate `t` after `s`, depth-first: every answer of `s`
    /// comes before any answer of `t`. An infinite `s` starves `t`.
    pub fn append_inf(s: Stream<T>, t: Stream<T>) -> Self {
        match s {
            Stream::Empty => t,
            Stream::Pair(a, d) => Stream::cons(a, Stream::append_inf(*d, t)),
            Stream::Suspension(sup) => Stream::suspension(move || Stream::append_inf(sup(), t)),
        }
    }

    /// Merge `s` and `t` fairly: the sources swap roles after every
    /// delivered answer and at every suspension, so neither source can
    /// defer the other's answers by more than a constant factor.
    pub fn interleave_inf(s: Stream<T>, t: Stream<T>) -> Self {
        match s {
            Stream::Empty => t,
            Stream::Pair(a, d) => Stream::cons(a, Stream::interleave_inf(t, *d)),
            Stream::Suspension(sup) => {
                Stream::suspension(move || Stream::interleave_inf(t, sup()))
            }
        }
    }

    /// Apply a goal to every answer and concatenate the resulting
    /// streams depth-first.
    pub fn append_map_inf(self, g: Arc<dyn Goal<T>>) -> Self {
        match self {
            Stream::Empty => Stream::Empty,
            Stream::Pair(a, d) => Stream::append_inf(g.apply(a), d.append_map_inf(g)),
            Stream::Suspension(sup) => Stream::suspension(move || sup().append_map_inf(g)),
        }
    }

    /// Cut the stream after `n` answers without forcing anything
    /// beyond them; the dropped remainder is never searched.
    pub fn limit(self, n: usize) -> Stream<T> {
        if n == 0 {
            return Stream::Empty;
        }
        match self {
            Stream::Empty => Stream::Empty,
            Stream::Pair(a, d) => Stream::cons(a, d.limit(n - 1)),
            Stream::Suspension(sup) => Stream::suspension(move || sup().limit(n)),
        }
    }

    pub fn map<U: 'static>(self, f: impl 'static + Fn(T) -> U) -> Stream<U> {
        match self {
            Stream::Empty => Stream::empty(),
            Stream::Pair(a, d) => Stream::cons(f(a), d.map(f)),
            Stream::Suspension(sup) => Stream::suspension(|| sup().map(f)),
        }
    }

    /// Force the whole stream into a vector. Diverges on an infinite
    /// stream.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T> std::iter::IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = StreamIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        StreamIter(self)
    }
}

impl<T: PartialEq> PartialEq for Stream<T> {
    fn eq(&self, other: &Self) -> bool {
        use Stream::*;
        match (self, other) {
            (Empty, Empty) => true,
            (Pair(a, x), Pair(b, y)) => a == b && x == y,
            _ => false,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Stream::Empty => write!(f, "()"),
            Stream::Suspension(_) => write!(f, "(...)"),
            Stream::Pair(x, next) => {
                let mut next = next;
                write!(f, "({:?}", x)?;
                loop {
                    match &**next {
                        Stream::Empty => break,
                        Stream::Pair(x, n) => {
                            write!(f, " {:?}", x)?;
                            next = n;
                        }
                        Stream::Suspension(_) => {
                            write!(f, "...")?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}

/// Single-pass driver over a stream of answers.
///
/// Suspensions are forced in a loop, not by recursion: this is the
/// trampoline that keeps unbounded searches off the call stack.
pub struct StreamIter<T>(Stream<T>);

impl<T> Iterator for StreamIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.0, Stream::Empty) {
                Stream::Empty => return None,
                Stream::Pair(a, d) => {
                    self.0 = *d;
                    return Some(a);
                }
                Stream::Suspension(sup) => self.0 = sup(),
            }
        }
    }
}
