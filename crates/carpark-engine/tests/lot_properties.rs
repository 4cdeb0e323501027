// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use carpark_core::prelude::{ManualClock, TimeDelta, TimePoint};
use carpark_engine::prelude::*;
use carpark_model::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::path::Path;

const SEEDS: [u64; 6] = [1, 7, 42, 1337, 9001, 31337];
const STEPS: usize = 400;

#[inline]
fn plate(s: &str) -> LicensePlate {
    LicensePlate::from(s)
}

fn random_layout(rng: &mut ChaCha8Rng) -> Vec<Floor> {
    let mut b = LayoutBuilder::new();
    for f in 0..rng.random_range(1..=4usize) {
        let spots: Vec<SpotClass> = (0..rng.random_range(0..=6usize))
            .map(|_| SpotClass::ALL[rng.random_range(0..SpotClass::ALL.len())])
            .collect();
        b.add_floor_of(FloorIdentifier::new(f), spots);
    }
    b.build().unwrap()
}

fn assert_registry_matches_spots(lot: &Lot<ManualClock, FeeSchedule>) {
    let occupied: usize = lot
        .floors()
        .iter()
        .flat_map(|f| f.iter())
        .filter(|s| s.is_occupied())
        .count();
    assert_eq!(occupied, lot.parked_count());
    assert_eq!(lot.free_spot_count() + occupied, lot.capacity());

    for t in lot.active_tickets() {
        let spot = lot.spot_of(t.plate()).expect("ticket must point at a spot");
        assert_eq!(spot.occupant(), Some(t.vehicle()));
        assert!(spot.can_host(t.vehicle().class()));
        assert_eq!(spot.id(), t.location().spot());
    }
}

#[test]
fn random_operation_sequences_keep_lot_consistent() {
    for seed in SEEDS {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let clock = ManualClock::new(TimePoint::from_secs(0));
        let mut lot = Lot::new()
            .with_floors(random_layout(&mut rng))
            .with_clock(clock.clone());

        // A fixed pool of plates, each with its own class.
        let pool: Vec<Vehicle> = (0..12)
            .map(|i| {
                let class = VehicleClass::ALL[rng.random_range(0..VehicleClass::ALL.len())];
                Vehicle::new(format!("P{i}"), class)
            })
            .collect();
        let mut parked_since: HashMap<LicensePlate, TimePoint<i64>> = HashMap::new();

        for _ in 0..STEPS {
            clock.advance(TimeDelta::from_millis(rng.random_range(0..5_000)));
            let v = &pool[rng.random_range(0..pool.len())];

            if rng.random_bool(0.55) {
                let expected = lot.locate_available(v.class());
                let free_before = lot.free_spot_count();
                match lot.allocate(v.clone()) {
                    Err(LotError::DuplicateVehicle(e)) => {
                        assert!(parked_since.contains_key(v.plate()));
                        assert_eq!(e.plate(), v.plate());
                        assert_eq!(lot.free_spot_count(), free_before);
                    }
                    Ok(true) => {
                        assert!(!parked_since.contains_key(v.plate()));
                        let t = lot.ticket(v.plate()).unwrap();
                        assert_eq!(Some(t.location()), expected, "first fit, seed {seed}");
                        parked_since.insert(v.plate().clone(), t.issued_at());
                    }
                    Ok(false) => {
                        assert!(!parked_since.contains_key(v.plate()));
                        assert_eq!(expected, None);
                        assert_eq!(lot.free_spot_count_for(v.class()), 0);
                        assert_eq!(lot.free_spot_count(), free_before);
                        assert!(!lot.is_parked(v.plate()));
                    }
                    Err(e) => panic!("unexpected error for seed {seed}: {e}"),
                }
            } else {
                match lot.checkout(v.plate()) {
                    Ok(r) => {
                        let since = parked_since.remove(v.plate()).unwrap();
                        assert_eq!(r.ticket().issued_at(), since);
                        assert!(r.fee() >= 0.0);
                        assert_eq!(
                            r.fee(),
                            FeeSchedule::default().fee(r.duration(), v.class())
                        );
                        assert!(!lot.is_parked(v.plate()));
                    }
                    Err(LotError::UnknownTicket(e)) => {
                        assert!(!parked_since.contains_key(v.plate()));
                        assert_eq!(e.plate(), v.plate());
                    }
                    Err(e) => panic!("unexpected error for seed {seed}: {e}"),
                }
            }

            assert_eq!(lot.parked_count(), parked_since.len());
            assert_registry_matches_spots(&lot);
        }
    }
}

#[test]
fn large_vehicles_never_take_small_spots() {
    for seed in SEEDS {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut lot = Lot::new()
            .with_floors(random_layout(&mut rng))
            .with_clock(ManualClock::default());
        let mut i = 0;
        while lot.allocate(Vehicle::new(format!("T{i}"), VehicleClass::Large)).unwrap() {
            i += 1;
        }
        for t in lot.active_tickets() {
            assert_eq!(lot.spot_of(t.plate()).unwrap().class(), SpotClass::Large);
        }
        assert_eq!(lot.free_spot_count_for(VehicleClass::Large), 0);

        // Small vehicles still fit anywhere that is left.
        let left = lot.free_spot_count();
        let mut parked = 0;
        while lot.allocate(Vehicle::new(format!("M{parked}"), VehicleClass::Small)).unwrap() {
            parked += 1;
        }
        assert_eq!(parked, left);
        assert_eq!(lot.free_spot_count(), 0);
    }
}

#[test]
fn fee_is_monotone_for_random_durations() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let schedules = [FeeSchedule::default(), FeeSchedule::hourly()];
    for schedule in schedules {
        let mut durations: Vec<i64> = (0..200).map(|_| rng.random_range(0..10_000_000)).collect();
        durations.sort_unstable();
        for class in VehicleClass::ALL {
            let fees: Vec<f64> = durations
                .iter()
                .map(|d| schedule.fee(TimeDelta::from_millis(*d), class))
                .collect();
            assert!(fees.windows(2).all(|w| w[0] <= w[1]));
        }
        for d in durations {
            let d = TimeDelta::from_millis(d);
            let small = schedule.fee(d, VehicleClass::Small);
            let medium = schedule.fee(d, VehicleClass::Medium);
            let large = schedule.fee(d, VehicleClass::Large);
            assert!(small <= medium && medium <= large);
        }
    }
}

#[test]
fn demonstration_lot_parks_and_bills_a_car() {
    let floors = LayoutLoader::new()
        .from_path(Path::new(env!("CARGO_MANIFEST_DIR")).join("../../layouts/demo.txt"))
        .unwrap();
    let clock = ManualClock::new(TimePoint::from_secs(1_700_000_000));
    let mut lot = Lot::new().with_floors(floors).with_clock(clock.clone());

    assert!(lot.allocate(Vehicle::new("ABC123", VehicleClass::Medium)).unwrap());
    assert_eq!(
        lot.ticket(&plate("ABC123")).unwrap().location().spot(),
        SpotIdentifier::new(2)
    );
    clock.advance_secs(4);
    assert_eq!(lot.release(&plate("ABC123")).unwrap(), 36.0);
    assert_eq!(lot.free_spot_count(), 3);
}

#[test]
fn garage_layout_fills_floor_by_floor() {
    let floors = LayoutLoader::new()
        .from_path(Path::new(env!("CARGO_MANIFEST_DIR")).join("../../layouts/garage.txt"))
        .unwrap();
    let mut lot = Lot::new().with_floors(floors).with_clock(ManualClock::default());
    assert_eq!(lot.capacity(), 15);

    let mut floors_used = Vec::new();
    for i in 0..6 {
        let p = format!("T{i}");
        assert!(lot.allocate(Vehicle::new(p.as_str(), VehicleClass::Large)).unwrap());
        floors_used.push(*lot.ticket(&plate(&p)).unwrap().location().floor().value());
    }
    assert_eq!(floors_used, vec![0, 1, 2, 2, 2, 2]);
    assert!(!lot.allocate(Vehicle::new("T6", VehicleClass::Large)).unwrap());
}

#[test]
fn release_unknown_leaves_lot_unchanged() {
    let mut lot = Lot::new()
        .with_floors(
            LayoutLoader::new()
                .from_str("1 1 2 1 compact 2 large")
                .unwrap(),
        )
        .with_clock(ManualClock::default());
    lot.allocate(Vehicle::new("A", VehicleClass::Small)).unwrap();
    let before: Vec<_> = lot.active_tickets().cloned().collect();

    assert!(matches!(
        lot.release(&plate("ZZZ")),
        Err(LotError::UnknownTicket(_))
    ));
    let after: Vec<_> = lot.active_tickets().cloned().collect();
    assert_eq!(before, after);
    assert_eq!(lot.free_spot_count(), 1);
}

#[test]
fn shared_lot_configured_from_json() {
    let schedule = FeeSchedule::from_json_str(r#"{ "secondsPerHour": 3600.0 }"#).unwrap();
    let clock = ManualClock::new(TimePoint::from_secs(0));
    let lot = SharedLot::from(
        Lot::new()
            .with_floors(LayoutLoader::new().from_str("1 1 1 1 regular").unwrap())
            .with_clock(clock.clone())
            .with_policy(schedule),
    );
    assert!(lot.allocate(Vehicle::new("CAR", VehicleClass::Medium)).unwrap());
    clock.advance_secs(2 * 3600);
    assert_eq!(lot.release(&plate("CAR")).unwrap(), 18.0);
}
