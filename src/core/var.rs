use std::sync::atomic::{AtomicUsize, Ordering};

static VAR_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Named logic variable.
///
/// The variable name is purely descriptive to help understanding.
/// Any newly created variable is different from all previously
/// created variables, even if they have the same name.
/// However, variables can be copied, which preserves identity.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Var {
    name: &'static str,
    id: usize,
}

impl Var {
    /// Create a new unique logic variable.
    ///
    /// Ids are drawn from a process-wide monotonic counter and are
    /// never reused.
    pub fn new(name: &'static str) -> Self {
        let id = VAR_COUNTER.fetch_add(1, Ordering::Relaxed);
        Var { name, id }
    }

    /// Return the variable's name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl From<&'static str> for Var {
    fn from(name: &'static str) -> Self {
        Var::new(name)
    }
}

impl std::fmt::Debug for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Reified logic variable.
///
/// Reified variables stand for logic variables that remain fresh
/// after goals have run. The index is assigned by a depth-first
/// left-to-right walk of the answer, so repeated runs print
/// identically and distinct fresh variables never collide.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct ReifiedVar {
    pub name: &'static str,
    pub index: usize,
}

impl std::fmt::Debug for ReifiedVar {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}.{}", self.name, self.index)
    }
}
