//! The embedded query language.
//!
//! These macros provide the surface syntax over the goal combinators:
//! conjunction and disjunction over any number of goals, clause forms,
//! fresh-variable introduction, projection of bound values into host
//! code, relation definition, and the `run!` query driver.

/// Conjunction of any number of goals. The empty conjunction succeeds.
#[macro_export]
macro_rules! all {
    () => {
        $crate::goals::primitive::succeed()
    };
    ($g:expr $(,)?) => {
        $g
    };
    ($g0:expr, $($g:expr),+ $(,)?) => {
        $crate::goals::combinators::conj2($g0, $crate::all!($($g),+))
    };
}

/// Disjunction of any number of goals, searched depth-first. The empty
/// disjunction fails.
#[macro_export]
macro_rules! any {
    () => {
        $crate::goals::primitive::fail()
    };
    ($g:expr $(,)?) => {
        $g
    };
    ($g0:expr, $($g:expr),+ $(,)?) => {
        $crate::goals::combinators::disj2($g0, $crate::any!($($g),+))
    };
}

/// Disjunction of any number of goals with fair interleaving: every
/// branch keeps producing answers even next to a diverging sibling.
#[macro_export]
macro_rules! anyi {
    () => {
        $crate::goals::primitive::fail()
    };
    ($g:expr $(,)?) => {
        $g
    };
    ($g0:expr, $($g:expr),+ $(,)?) => {
        $crate::goals::combinators::disji2($g0, $crate::anyi!($($g),+))
    };
}

/// Clause syntax over [`any!`]: lines of comma-separated goals,
/// separated by `;`. Every line whose goals all succeed contributes
/// answers.
#[macro_export]
macro_rules! conde {
    ($($($g:expr),+);+ $(;)?) => {
        $crate::any!($($crate::all!($($g),+)),+)
    };
}

/// Like [`conde!`], but the lines' answer streams are interleaved
/// fairly.
#[macro_export]
macro_rules! condi {
    ($($($g:expr),+);+ $(;)?) => {
        $crate::anyi!($($crate::all!($($g),+)),+)
    };
}

/// Committed-choice clauses: the first line whose head goal succeeds
/// is selected and all later lines are discarded. The head may still
/// succeed multiple times.
#[macro_export]
macro_rules! conda {
    ($g0:expr, $($g:expr),+; $($rest:tt)+) => {
        $crate::goals::combinators::ifte(
            $g0,
            $crate::all!($($g),+),
            $crate::conda!($($rest)+))
    };
    ($g0:expr; $($rest:tt)+) => {
        $crate::goals::combinators::ifte(
            $g0,
            $crate::goals::primitive::succeed(),
            $crate::conda!($($rest)+))
    };
    ($($g:expr),+ $(;)?) => {
        $crate::all!($($g),+)
    };
}

/// Like [`conda!`], but the selected line's head goal succeeds at most
/// once.
#[macro_export]
macro_rules! condu {
    ($g0:expr, $($g:expr),+; $($rest:tt)+) => {
        $crate::goals::combinators::ifte(
            $crate::goals::combinators::once($g0),
            $crate::all!($($g),+),
            $crate::condu!($($rest)+))
    };
    ($g0:expr; $($rest:tt)+) => {
        $crate::goals::combinators::ifte(
            $crate::goals::combinators::once($g0),
            $crate::goals::primitive::succeed(),
            $crate::condu!($($rest)+))
    };
    ($g0:expr, $($g:expr),+ $(;)?) => {
        $crate::all!($crate::goals::combinators::once($g0), $($g),+)
    };
    ($g0:expr $(;)?) => {
        $crate::goals::combinators::once($g0)
    };
}

/// Bind fresh logic variables and run the body goals in their scope.
#[macro_export]
macro_rules! fresh {
    (($($x:ident),* $(,)?), $($g:expr),+ $(,)?) => {{
        $(let $x = $crate::core::var::Var::new(stringify!($x));)*
        $crate::all!($($g),+)
    }};
}

/// Alias of [`fresh!`].
#[macro_export]
macro_rules! exists {
    ($($t:tt)*) => {
        $crate::fresh!($($t)*)
    };
}

/// Rebind the named variables to their current values (resolved at
/// every level) and run the body goals. The body typically hands the
/// values to host code through [`predicate`](crate::goals::primitive::predicate).
///
/// The rebound names hold [`Term`](crate::core::term::Term)s, not
/// variables, so unifying against them is still possible but host
/// accessors like `as_i64` become available.
#[macro_export]
macro_rules! project {
    (($($x:ident),+ $(,)?), $($g:expr),+ $(,)?) => {
        move |s: $crate::goals::StatSubs| {
            use $crate::core::goal::Goal as _;
            $(let $x = s.walk_star(&$crate::core::term::Term::from($x.clone()));)+
            $crate::all!($($g),+).apply(s)
        }
    };
}

/// Define a relation as a host function over terms.
///
/// The body goals are wrapped in a suspension, so a relation may call
/// itself (directly or mutually) without recursing at construction
/// time. The `trace` form additionally logs each application with the
/// current values of its arguments at debug level.
#[macro_export]
macro_rules! defrel {
    (trace $(#[$attr:meta])* $vis:vis $name:ident($($args:ident),* $(,)?) { $($g:expr),* $(,)? }) => {
        $(#[$attr])*
        $vis fn $name($($args: impl 'static + Into<$crate::core::term::Term>),*)
            -> impl $crate::core::goal::Goal<$crate::goals::StatSubs>
        {
            use $crate::core::goal::Goal as _;
            $(let $args: $crate::core::term::Term = $args.into();)*
            move |s: $crate::goals::StatSubs| {
                $(let $args = $args.clone();)*
                if $crate::log::log_enabled!($crate::log::Level::Debug) {
                    let current: ::std::vec::Vec<$crate::core::term::Term> =
                        vec![$(s.walk_star(&$args)),*];
                    $crate::log::debug!(
                        "{}{:?}",
                        stringify!($name),
                        $crate::core::term::Term::from(current)
                    );
                }
                $crate::core::stream::Stream::suspension(move || {
                    $crate::all!($($g),*).apply(s)
                })
            }
        }
    };

    ($(#[$attr:meta])* $vis:vis $name:ident($($args:ident),* $(,)?) { $($g:expr),* $(,)? }) => {
        $(#[$attr])*
        $vis fn $name($($args: impl 'static + Into<$crate::core::term::Term>),*)
            -> impl $crate::core::goal::Goal<$crate::goals::StatSubs>
        {
            use $crate::core::goal::Goal as _;
            $(let $args: $crate::core::term::Term = $args.into();)*
            move |s: $crate::goals::StatSubs| {
                $(let $args = $args.clone();)*
                $crate::core::stream::Stream::suspension(move || {
                    $crate::all!($($g),*).apply(s)
                })
            }
        }
    };
}

/// Run a query: introduce the query variable (or a template of
/// variables), run the goals, and reify each answer.
///
/// Forms:
///   - `run!(*, q, goals...)` forces every answer.
///   - `run!(n, q, goals...)` forces at most `n` answers.
///   - `run!(iter, q, goals...)` returns a lazy iterator of answers.
///
/// In every form `q` may be replaced by a template `(x, y, ...)`; each
/// answer is then the list of the template variables' values.
#[macro_export]
macro_rules! run {
    (*, ($($x:ident),+ $(,)?), $($g:expr),+ $(,)?) => {{
        use $crate::core::goal::Goal as _;
        let __q = $crate::core::var::Var::new("__q");
        let __qt = $crate::core::term::Term::var(__q);
        $crate::fresh!(
            ($($x),+),
            $crate::goals::primitive::eq(
                vec![$($crate::core::term::Term::var($x)),+],
                __q
            ),
            $($g),+
        )
        .run_inf()
        .map(move |s| s.reify(&__qt))
    }};

    (*, $q:ident, $($g:expr),+ $(,)?) => {{
        use $crate::core::goal::Goal as _;
        let $q = $crate::core::var::Var::new(stringify!($q));
        let __qt = $crate::core::term::Term::var($q);
        $crate::all!($($g),+)
            .run_inf()
            .map(move |s| s.reify(&__qt))
    }};

    (iter, ($($x:ident),+ $(,)?), $($g:expr),+ $(,)?) => {{
        use $crate::core::goal::Goal as _;
        let __q = $crate::core::var::Var::new("__q");
        let __qt = $crate::core::term::Term::var(__q);
        $crate::fresh!(
            ($($x),+),
            $crate::goals::primitive::eq(
                vec![$($crate::core::term::Term::var($x)),+],
                __q
            ),
            $($g),+
        )
        .iter()
        .map(move |s| s.reify(&__qt))
    }};

    (iter, $q:ident, $($g:expr),+ $(,)?) => {{
        use $crate::core::goal::Goal as _;
        let $q = $crate::core::var::Var::new(stringify!($q));
        let __qt = $crate::core::term::Term::var($q);
        $crate::all!($($g),+)
            .iter()
            .map(move |s| s.reify(&__qt))
    }};

    ($n:expr, ($($x:ident),+ $(,)?), $($g:expr),+ $(,)?) => {{
        use $crate::core::goal::Goal as _;
        let __q = $crate::core::var::Var::new("__q");
        let __qt = $crate::core::term::Term::var(__q);
        $crate::fresh!(
            ($($x),+),
            $crate::goals::primitive::eq(
                vec![$($crate::core::term::Term::var($x)),+],
                __q
            ),
            $($g),+
        )
        .run($n)
        .map(move |s| s.reify(&__qt))
    }};

    ($n:expr, $q:ident, $($g:expr),+ $(,)?) => {{
        use $crate::core::goal::Goal as _;
        let $q = $crate::core::var::Var::new(stringify!($q));
        let __qt = $crate::core::term::Term::var($q);
        $crate::all!($($g),+)
            .run($n)
            .map(move |s| s.reify(&__qt))
    }};
}
