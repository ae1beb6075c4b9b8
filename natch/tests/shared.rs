//! Sharing a dispatcher across threads and statics.

use lazy_static::lazy_static;
use natch::{Dispatcher, match_plain, tables::HashCaseTable};
use std::thread;

mod common;
use common::{Step, halve, parity, triple_plus_one};

type Collatz = Dispatcher<u64, fn(&u64) -> &'static str, HashCaseTable<&'static str, Step>, Step>;

lazy_static! {
    static ref COLLATZ: Collatz = match_plain(
        parity as fn(&u64) -> &'static str,
        [("even", halve as Step), ("odd", triple_plus_one as Step)],
    );
}

fn stopping_time(mut n: u64) -> usize {
    let mut steps = 0;
    while n != 1 {
        n = COLLATZ.dispatch(n).unwrap();
        steps += 1;
    }
    steps
}

#[test]
fn test_static_dispatcher() {
    assert_eq!(stopping_time(1), 0);
    assert_eq!(stopping_time(6), 8);
    assert_eq!(stopping_time(27), 111);
}

#[test]
fn test_concurrent_dispatch() {
    let results: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = (1..=8u64)
            .map(|n| scope.spawn(move || stopping_time(n)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, vec![0, 1, 7, 2, 5, 8, 16, 3]);
}
