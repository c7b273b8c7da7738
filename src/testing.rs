//! Support for writing concise tests over goals.

use crate::core::goal::Goal;
use crate::goals::StatSubs;

/// The goal produces no answers from an empty substitution.
pub fn fails(g: impl Goal<StatSubs>) -> bool {
    g.run(1).is_empty()
}

/// The goal produces at least one answer from an empty substitution.
pub fn succeeds(g: impl Goal<StatSubs>) -> bool {
    !g.run(1).is_empty()
}

/// The goal produces exactly one answer from an empty substitution.
pub fn has_unique_solution(g: impl Goal<StatSubs>) -> bool {
    g.run(2).len() == Some(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::combinators::disj2;
    use crate::goals::primitive::{fail, succeed};

    #[test]
    fn helpers_reflect_the_number_of_answers() {
        assert!(fails(fail()));
        assert!(succeeds(succeed()));
        assert!(has_unique_solution(succeed()));
        assert!(!has_unique_solution(fail()));
        assert!(!has_unique_solution(disj2(succeed(), succeed())));
    }
}
