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

use carpark_core::prelude::{TimeDelta, TimePoint};
use carpark_model::prelude::{FloorIdentifier, LicensePlate, SpotIdentifier, Vehicle};

/// Where a spot sits inside a lot: stable ids plus positional indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpotLocation {
    floor_index: usize,
    spot_index: usize,
    floor: FloorIdentifier,
    spot: SpotIdentifier,
}

impl SpotLocation {
    #[inline]
    pub fn new(
        floor_index: usize,
        spot_index: usize,
        floor: FloorIdentifier,
        spot: SpotIdentifier,
    ) -> Self {
        Self {
            floor_index,
            spot_index,
            floor,
            spot,
        }
    }

    #[inline]
    pub fn floor_index(&self) -> usize {
        self.floor_index
    }

    #[inline]
    pub fn spot_index(&self) -> usize {
        self.spot_index
    }

    #[inline]
    pub fn floor(&self) -> FloorIdentifier {
        self.floor
    }

    #[inline]
    pub fn spot(&self) -> SpotIdentifier {
        self.spot
    }
}

impl std::fmt::Display for SpotLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.floor, self.spot)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticket {
    vehicle: Vehicle,
    location: SpotLocation,
    issued_at: TimePoint<i64>,
}

impl Ticket {
    #[inline]
    pub fn new(vehicle: Vehicle, location: SpotLocation, issued_at: TimePoint<i64>) -> Self {
        Self {
            vehicle,
            location,
            issued_at,
        }
    }

    #[inline]
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    #[inline]
    pub fn plate(&self) -> &LicensePlate {
        self.vehicle.plate()
    }

    #[inline]
    pub fn location(&self) -> SpotLocation {
        self.location
    }

    #[inline]
    pub fn issued_at(&self) -> TimePoint<i64> {
        self.issued_at
    }
}

/// Outcome of a release: the retired ticket and what the stay cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    ticket: Ticket,
    released_at: TimePoint<i64>,
    duration: TimeDelta<i64>,
    fee: f64,
}

impl Receipt {
    #[inline]
    pub fn new(
        ticket: Ticket,
        released_at: TimePoint<i64>,
        duration: TimeDelta<i64>,
        fee: f64,
    ) -> Self {
        Self {
            ticket,
            released_at,
            duration,
            fee,
        }
    }

    #[inline]
    pub fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    #[inline]
    pub fn into_ticket(self) -> Ticket {
        self.ticket
    }

    #[inline]
    pub fn released_at(&self) -> TimePoint<i64> {
        self.released_at
    }

    #[inline]
    pub fn duration(&self) -> TimeDelta<i64> {
        self.duration
    }

    #[inline]
    pub fn fee(&self) -> f64 {
        self.fee
    }
}
