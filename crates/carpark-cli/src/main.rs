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

use carpark_engine::prelude::*;
use carpark_model::prelude::*;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

const DWELL: Duration = Duration::from_secs(4);

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[derive(Serialize)]
struct RunRecord {
    plate: String,
    class: VehicleClass,
    floor: usize,
    spot: usize,
    start_ts: DateTime<Utc>,
    end_ts: DateTime<Utc>,
    runtime_ms: u128,
    fee: f64,
}

/// One floor with a compact, a regular and a large spot.
fn demo_floors() -> Result<Vec<Floor>, LayoutError> {
    let mut b = LayoutBuilder::new();
    b.add_floor_of(
        FloorIdentifier::new(1),
        [SpotClass::Compact, SpotClass::Regular, SpotClass::Large],
    );
    b.build()
}

fn main() -> Result<(), Box<dyn Error>> {
    enable_tracing();

    // carpark [layout.txt] [fees.json]
    let mut args = std::env::args().skip(1).map(PathBuf::from);
    let floors = match args.next() {
        Some(path) => {
            tracing::info!("Loading layout from {}", path.display());
            LayoutLoader::new().from_path(&path)?
        }
        None => demo_floors()?,
    };
    let schedule = match args.next() {
        Some(path) => {
            tracing::info!("Loading fee schedule from {}", path.display());
            FeeSchedule::from_path(&path)?
        }
        None => FeeSchedule::default(),
    };

    let mut lot = Lot::new().with_floors(floors).with_policy(schedule);
    tracing::info!(
        "Lot ready with {} floors and {} spots",
        lot.floors().len(),
        lot.capacity()
    );

    let car = Vehicle::new("ABC123", VehicleClass::Medium);
    let plate = car.plate().clone();
    if !lot.allocate(car.clone())? {
        println!("Parking failed");
        return Ok(());
    }
    println!("Car with license plate {} parked successfully", plate.as_str());

    let start_ts = Utc::now();
    let t0 = Instant::now();
    std::thread::sleep(DWELL);

    let receipt = lot.checkout(&plate)?;
    println!("Parking fee: ${:.2}", receipt.fee());

    let loc = receipt.ticket().location();
    let record = RunRecord {
        plate: plate.as_str().to_owned(),
        class: car.class(),
        floor: loc.floor().into_inner(),
        spot: loc.spot().into_inner(),
        start_ts,
        end_ts: Utc::now(),
        runtime_ms: t0.elapsed().as_millis(),
        fee: receipt.fee(),
    };
    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}
