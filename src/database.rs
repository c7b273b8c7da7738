//! Fact tables and recursive knowledge bases.
//!
//! A [`Database`] holds named relations as plain tables of ground
//! rows. Queries unify call arguments against every row, so any mix of
//! bound and fresh arguments works. Databases are immutable once
//! shared; goals hold them through `Arc` and never observe growth.
//!
//! Relations that must refer to themselves, or to each other, are
//! built in two phases through [`Recursive`]: declare a handle, build
//! goals against it, then supply the definition. Resolution is
//! deferred to application time, so the definition may capture goals
//! that were built against the handle before `define` ran.

use crate::core::goal::Goal;
use crate::core::stream::Stream;
use crate::core::term::Term;
use crate::error::Error;
use crate::goals::StatSubs;
use indexmap::IndexMap;
use std::sync::{Arc, OnceLock};

struct Table {
    arity: usize,
    rows: Vec<Vec<Term>>,
}

/// Named fact tables.
#[derive(Default)]
pub struct Database {
    tables: IndexMap<String, Table>,
}

impl Database {
    pub fn new() -> Self {
        Default::default()
    }

    /// Add a fact. The first row inserted for a relation fixes its
    /// arity; later rows must match it.
    pub fn insert(&mut self, relation: &str, row: Vec<Term>) -> Result<(), Error> {
        match self.tables.get_mut(relation) {
            Some(table) => {
                if table.arity != row.len() {
                    return Err(Error::ArityMismatch {
                        relation: relation.to_string(),
                        expected: table.arity,
                        got: row.len(),
                    });
                }
                table.rows.push(row);
            }
            None => {
                self.tables.insert(
                    relation.to_string(),
                    Table {
                        arity: row.len(),
                        rows: vec![row],
                    },
                );
            }
        }
        Ok(())
    }

    /// Arity of a relation, or `None` if no fact was ever inserted.
    pub fn arity(&self, relation: &str) -> Option<usize> {
        self.tables.get(relation).map(|t| t.arity)
    }

    /// Total number of facts across all relations.
    pub fn n_facts(&self) -> usize {
        self.tables.values().map(|t| t.rows.len()).sum()
    }

    /// The rows of a relation. Unknown relations are empty, not an
    /// error: a query against them simply fails.
    pub fn rows<'a>(&'a self, relation: &str) -> impl Iterator<Item = &'a [Term]> + 'a {
        self.tables
            .get(relation)
            .into_iter()
            .flat_map(|t| t.rows.iter().map(|row| row.as_slice()))
    }
}

/// Creates a goal that succeeds once for every row of `relation` that
/// unifies with `args`.
///
/// Rows of a different arity than the call never unify and are
/// skipped. The rows are finite, so the resulting stream is fully
/// materialized up front.
pub fn facts(db: &Arc<Database>, relation: &'static str, args: Vec<Term>) -> impl Goal<StatSubs> {
    let db = Arc::clone(db);
    move |s: StatSubs| {
        let matches: Vec<StatSubs> = db
            .rows(relation)
            .filter(|row| row.len() == args.len())
            .filter_map(|row| {
                let mut s = Some(s.clone());
                for (arg, value) in args.iter().zip(row) {
                    s = s.and_then(|s| s.unify(arg, value));
                }
                s
            })
            .collect();
        Stream::from_iter(matches.into_iter())
    }
}

type RelationFn = Box<dyn Fn(Vec<Term>) -> Box<dyn Goal<StatSubs>> + Send + Sync>;

/// Handle for a relation that participates in recursion.
///
/// The handle is created before the relation body exists, so the body
/// (and any mutually recursive bodies) can capture a clone of it.
#[derive(Clone)]
pub struct Recursive {
    name: &'static str,
    cell: Arc<OnceLock<RelationFn>>,
}

impl Recursive {
    /// Phase one: create an undefined handle.
    pub fn declare(name: &'static str) -> Self {
        Recursive {
            name,
            cell: Arc::new(OnceLock::new()),
        }
    }

    /// Phase two: supply the relation body. Each handle accepts
    /// exactly one definition.
    pub fn define(
        &self,
        body: impl Fn(Vec<Term>) -> Box<dyn Goal<StatSubs>> + Send + Sync + 'static,
    ) -> Result<(), Error> {
        self.cell
            .set(Box::new(body))
            .map_err(|_| Error::Redefined(self.name))
    }

    /// Call the relation with the given arguments.
    ///
    /// The handle is dereferenced when the goal is applied, not when
    /// it is built, which is what permits building goals between
    /// `declare` and `define`.
    ///
    /// # Panics
    ///
    /// The returned goal panics on application if the handle is still
    /// undefined by then.
    pub fn apply_to(&self, args: Vec<Term>) -> impl Goal<StatSubs> {
        let handle = self.clone();
        move |s: StatSubs| {
            let handle = handle.clone();
            let args = args.clone();
            Stream::suspension(move || match handle.cell.get() {
                Some(body) => body(args).apply(s),
                None => panic!("relation {} was declared but never defined", handle.name),
            })
        }
    }
}

impl std::fmt::Debug for Recursive {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let state = if self.cell.get().is_some() {
            "defined"
        } else {
            "declared"
        };
        write!(f, "Recursive({}, {})", self.name, state)
    }
}

/// Define query functions over a [`Database`], one per fact table.
/// The function name doubles as the relation name.
#[macro_export]
macro_rules! db_rel {
    ($($vis:vis $name:ident($($args:ident),* $(,)?);)+) => {
        $(
            $vis fn $name(
                db: &::std::sync::Arc<$crate::database::Database>,
                $($args: impl 'static + Into<$crate::core::term::Term>),*
            ) -> impl $crate::core::goal::Goal<$crate::goals::StatSubs> {
                $crate::database::facts(db, stringify!($name), vec![$($args.into()),*])
            }
        )+
    };
}

/// Load ground facts into a database. Expands to fallible inserts, so
/// the surrounding function must return `Result`.
#[macro_export]
macro_rules! db_facts {
    ($db:ident { $($rel:ident($($t:expr),* $(,)?);)* }) => {
        $(
            $db.insert(
                stringify!($rel),
                vec![$($crate::core::term::Term::from($t)),*],
            )?;
        )*
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::var::Var;
    use crate::{conde, fresh, run};

    db_rel! {
        parent(p, c);
    }

    fn family() -> Arc<Database> {
        let mut db = Database::new();
        db.insert("parent", vec!["anna".into(), "bruno".into()])
            .unwrap();
        db.insert("parent", vec!["bruno".into(), "clara".into()])
            .unwrap();
        Arc::new(db)
    }

    #[test]
    fn facts_unify_against_every_row() {
        let db = family();
        let answers = run!(*, q, parent(&db, "anna", q)).into_vec();
        assert_eq!(answers, vec![Term::from("bruno")]);

        let answers = run!(*, (p, c), parent(&db, p, c)).into_vec();
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn unknown_relations_fail_instead_of_erroring() {
        let db = family();
        let answers = run!(*, q, facts(&db, "sibling", vec![Term::var(q)])).into_vec();
        assert_eq!(answers, vec![]);
    }

    #[test]
    fn insert_rejects_rows_of_the_wrong_arity() {
        let mut db = Database::new();
        db.insert("parent", vec!["anna".into(), "bruno".into()])
            .unwrap();
        assert_eq!(
            db.insert("parent", vec!["anna".into()]),
            Err(Error::ArityMismatch {
                relation: "parent".to_string(),
                expected: 2,
                got: 1,
            })
        );
    }

    #[test]
    fn db_facts_loads_rows_through_the_insert_path() {
        fn load() -> Result<Database, Error> {
            let mut db = Database::new();
            db_facts!(db {
                parent("anna", "bruno");
                parent("bruno", "clara");
                likes("anna", "tea");
            });
            Ok(db)
        }
        let db = load().unwrap();
        assert_eq!(db.n_facts(), 3);
        assert_eq!(db.arity("parent"), Some(2));
        assert_eq!(db.arity("likes"), Some(2));
        assert_eq!(db.arity("sibling"), None);
    }

    #[test]
    fn a_relation_can_recurse_through_its_own_handle() {
        let db = family();
        let ancestor = Recursive::declare("ancestor");

        let handle = ancestor.clone();
        let facts_db = Arc::clone(&db);
        ancestor
            .define(move |args| {
                let x = args[0].clone();
                let y = args[1].clone();
                let handle = handle.clone();
                Box::new(fresh!((z),
                    conde!(
                        parent(&facts_db, x.clone(), y.clone());
                        parent(&facts_db, x, z),
                        handle.apply_to(vec![Term::var(z), y]))))
            })
            .unwrap();

        let answers =
            run!(*, q, ancestor.apply_to(vec!["anna".into(), Term::var(q)])).into_vec();
        assert_eq!(answers, vec![Term::from("bruno"), Term::from("clara")]);
    }

    #[test]
    fn goals_may_be_built_before_the_definition_exists() {
        let db = family();
        let grandparent = Recursive::declare("grandparent");

        let x = Var::new("x");
        let early = grandparent.apply_to(vec!["anna".into(), Term::var(x)]);

        let facts_db = Arc::clone(&db);
        grandparent
            .define(move |args| {
                let a = args[0].clone();
                let c = args[1].clone();
                Box::new(fresh!((p),
                    parent(&facts_db, a, p),
                    parent(&facts_db, p, c)))
            })
            .unwrap();

        let answers = run!(*, q, crate::all!(early, crate::goals::primitive::eq(q, x)))
            .into_vec();
        assert_eq!(answers, vec![Term::from("clara")]);
    }

    #[test]
    fn a_handle_accepts_exactly_one_definition() {
        let rel = Recursive::declare("rel");
        rel.define(|_| Box::new(crate::goals::primitive::succeed()))
            .unwrap();
        assert_eq!(
            rel.define(|_| Box::new(crate::goals::primitive::succeed())),
            Err(Error::Redefined("rel"))
        );
    }

    #[test]
    #[should_panic(expected = "declared but never defined")]
    fn applying_an_undefined_handle_panics() {
        use crate::core::goal::Goal as _;
        let rel = Recursive::declare("ghost");
        rel.apply_to(vec![]).run(1);
    }
}
