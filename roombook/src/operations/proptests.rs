//! Property-based tests for the booking operations.
//!
//! These tests drive random booking sequences through the plan-execute
//! pipeline and check the store invariants afterwards.

use std::collections::HashSet;

use proptest::prelude::*;
use tempfile::TempDir;

use crate::database::{Database, DatabaseConfig};
use crate::error::Error;
use crate::{ReservationDate, RoomId, RoomRegistry};

use super::{PlanExecutor, ReserveOptions, ReservePlan};

fn open_database() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db = Database::open(DatabaseConfig::new(dir.path().join("prop.db"))).unwrap();
    Database::register_rooms(db.connection(), &RoomRegistry::defaults()).unwrap();
    (dir, db)
}

fn today() -> ReservationDate {
    ReservationDate::parse("20300101").unwrap()
}

// (day offset from today, room id, holder name)
fn request_strategy() -> impl Strategy<Value = (u64, u32, String)> {
    (0u64..15, 0u32..3, "[A-Za-z]{1,12}")
}

fn reserve(db: &mut Database, offset: u64, room: u32, name: &str) -> crate::Result<()> {
    let date = today().plus_days(offset).unwrap();
    let tx = db.begin_transaction()?;
    let plan = ReservePlan::new(ReserveOptions::new(date, RoomId::new(room), name), today())
        .build_plan(&tx)?;
    PlanExecutor::new(&tx).execute(&plan)?;
    tx.commit()?;
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    // At most one reservation per (date, room); every rejected request was a conflict
    #[test]
    fn uniqueness_invariant(requests in prop::collection::vec(request_strategy(), 1..30)) {
        let (_dir, mut db) = open_database();
        let mut expected = HashSet::new();

        for (offset, room, name) in &requests {
            match reserve(&mut db, *offset, *room, name) {
                Ok(()) => prop_assert!(expected.insert((*offset, *room))),
                Err(Error::ReservationConflict { .. }) => {
                    prop_assert!(expected.contains(&(*offset, *room)));
                }
                Err(e) => prop_assert!(false, "unexpected error: {e}"),
            }
        }

        let all = Database::list_all_reservations(db.connection()).unwrap();
        prop_assert_eq!(all.len(), expected.len());

        let pairs: HashSet<_> = all.iter().map(|r| (r.date(), r.room())).collect();
        prop_assert_eq!(pairs.len(), all.len());
    }

    // Listing is non-decreasing by date whatever the insertion order
    #[test]
    fn listing_is_ordered_by_date(requests in prop::collection::vec(request_strategy(), 1..30)) {
        let (_dir, mut db) = open_database();
        for (offset, room, name) in &requests {
            let _ = reserve(&mut db, *offset, *room, name);
        }

        let all = Database::list_all_reservations(db.connection()).unwrap();
        prop_assert!(all.windows(2).all(|pair| pair[0].date() <= pair[1].date()));
    }

    // Stored reservations read back with what was inserted
    #[test]
    fn insert_then_find_round_trip((offset, room, name) in request_strategy()) {
        let (_dir, mut db) = open_database();
        reserve(&mut db, offset, room, &name).unwrap();

        let date = today().plus_days(offset).unwrap();
        let found = Database::find_reservation(db.connection(), date, RoomId::new(room))
            .unwrap()
            .unwrap();
        prop_assert_eq!(found.holder().as_str(), name.as_str());
        prop_assert_eq!(found.room(), RoomId::new(room));
    }

    // Deleting the same id twice removes once and then reports no match
    #[test]
    fn delete_is_idempotent((offset, room, name) in request_strategy(), repeats in 2usize..5) {
        let (_dir, mut db) = open_database();
        reserve(&mut db, offset, room, &name).unwrap();
        let id = Database::list_all_reservations(db.connection()).unwrap()[0].id();

        prop_assert!(db.delete_reservation(id).unwrap());
        for _ in 1..repeats {
            prop_assert!(!db.delete_reservation(id).unwrap());
        }
    }
}
