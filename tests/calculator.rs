mod common;

use {
    buildnum::{BuildNumberCalculator, ManualClock, epoch_from_unix},
    chrono::{Timelike, Utc},
    common::{EPOCH, at},
    std::{sync::Arc, thread},
};

#[test]
fn system_clock() {
    let before = Utc::now().naive_utc();
    let b = BuildNumberCalculator::default().build_number();
    let after = Utc::now().naive_utc();

    // The hour may roll over between the reads.
    assert!(b.hour() == before.hour() || b.hour() == after.hour());
    let days = |now: chrono::NaiveDateTime| (now - at(0, 0, 0)).num_days();
    assert!(b.days() >= days(before));
    assert!(b.days() <= days(after));
}

#[test]
fn manual_current_time() {
    let c = BuildNumberCalculator::<ManualClock>::new();
    assert_eq!(c.build_number().to_string(), "000");

    c.ts_provider().set_now(at(1, 5, 0));
    assert_eq!(c.build_number().to_string(), "105");

    c.ts_provider().set_now(at(305, 5, 30));
    assert_eq!(c.build_number().to_string(), "30505");

    c.ts_provider().set_now(at(2, 23, 59));
    assert_eq!(c.build_number().to_string(), "223");
}

#[test]
fn custom_epoch() {
    // One week after the default epoch.
    let epoch = epoch_from_unix(EPOCH + 7 * 24 * 60 * 60).unwrap();
    let c = BuildNumberCalculator::<ManualClock>::with_epoch(epoch);
    assert_eq!(c.epoch(), epoch);

    c.ts_provider().set_now(at(10, 8, 0));
    assert_eq!(c.build_number().to_string(), "308");

    c.ts_provider().set_now(at(7, 0, 0));
    assert_eq!(c.build_number().to_string(), "000");
}

#[test]
fn clock_is_read_once_per_build_number() {
    let c = Arc::new(BuildNumberCalculator::<ManualClock>::new());
    c.ts_provider().set_now(at(3, 4, 0));

    let handles = (0..8)
        .map(|_| {
            let c = c.clone();
            thread::spawn(move || c.build_number())
        })
        .collect::<Vec<_>>();
    for handle in handles {
        let b = handle.join().unwrap();
        assert_eq!((b.days(), b.hour()), (3, 4));
    }
}
