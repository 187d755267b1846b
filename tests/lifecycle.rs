//! The shared transport runtime is process-wide, so this binary holds a
//! single test: no other session may exist while it counts.

use masto_http::{lifecycle_stats, Session};
use std::thread;

#[test]
fn test_runtime_is_reference_counted() {
    let before = lifecycle_stats();
    assert_eq!(before.active_sessions, 0);
    assert_eq!(before.initializations, 0);

    let first = Session::new().unwrap();
    let workers: Vec<_> = (0..2)
        .map(|_| {
            thread::spawn(|| {
                for _ in 0..10 {
                    let session = Session::new().unwrap();
                    let copy = session.try_clone().unwrap();
                    drop(session);
                    drop(copy);
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let during = lifecycle_stats();
    assert_eq!(during.active_sessions, 1);
    assert_eq!(during.initializations, 1);
    assert_eq!(during.teardowns, 0);

    drop(first);
    let after = lifecycle_stats();
    assert_eq!(after.active_sessions, 0);
    assert_eq!(after.initializations, 1);
    assert_eq!(after.teardowns, 1);

    // A new session starts a new runtime.
    let again = Session::new().unwrap();
    assert_eq!(lifecycle_stats().initializations, 2);
    drop(again);
    assert_eq!(lifecycle_stats().teardowns, 2);
}
