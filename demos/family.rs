//! Query a small family knowledge base.
//!
//! Run with `RUST_LOG=debug` to watch the intermediate bindings of the
//! grandchildren query as the search explores them.

use kanrel::prelude::*;
use kanrel::{db_facts, db_rel, run};
use std::sync::Arc;

db_rel! {
    parent(p, c);
    male(p);
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let mut db = Database::new();
    db_facts!(db {
        parent("alice", "bruno");
        parent("alice", "carla");
        parent("bruno", "dora");
        parent("carla", "emil");
        male("bruno");
        male("emil");
    });
    let db = Arc::new(db);

    println!("children of alice:");
    for child in run!(iter, c, parent(&db, "alice", c)) {
        println!("  {:?}", child);
    }

    println!("grandchildren of alice:");
    for pair in run!(iter, (via, gc),
        parent(&db, "alice", via),
        inspect("via child", vec![("via", via)]),
        parent(&db, via, gc))
    {
        println!("  {:?}", pair);
    }

    println!("fathers:");
    for pair in run!(iter, (f, c), male(&db, f), parent(&db, f, c)) {
        println!("  {:?}", pair);
    }

    Ok(())
}
