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

use crate::{
    err::{DuplicateVehicleError, LotError, UnknownTicketError},
    fee::{FeePolicy, FeeSchedule},
    ticket::{Receipt, SpotLocation, Ticket},
};
use carpark_core::prelude::{Clock, SystemClock, TimeDelta};
use carpark_model::prelude::{
    AlreadyOccupiedError, Floor, FloorIdentifier, LicensePlate, NotOccupiedError, Spot,
    SpotError, Vehicle, VehicleClass,
};
use std::collections::HashMap;

/// The allocation authority of a car park.
///
/// A lot owns its floors (scanned in insertion order) and the registry of
/// active tickets keyed by plate. It is the only place where tickets are
/// created or retired and where spot occupancy changes, so the registry and
/// the spots always agree: a plate has a ticket iff exactly one spot holds
/// that vehicle.
#[derive(Debug, Clone)]
pub struct Lot<C = SystemClock, P = FeeSchedule> {
    floors: Vec<Floor>,
    tickets: HashMap<LicensePlate, Ticket>,
    clock: C,
    policy: P,
}

impl Lot {
    /// An empty lot on the wall clock with the default rate table.
    #[inline]
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), SystemClock, FeeSchedule::default())
    }
}

impl Default for Lot {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, P> Lot<C, P> {
    #[inline]
    pub fn from_parts(floors: Vec<Floor>, clock: C, policy: P) -> Self {
        Self {
            floors,
            tickets: HashMap::new(),
            clock,
            policy,
        }
    }

    #[inline]
    pub fn with_clock<C2>(self, clock: C2) -> Lot<C2, P> {
        Lot {
            floors: self.floors,
            tickets: self.tickets,
            clock,
            policy: self.policy,
        }
    }

    #[inline]
    pub fn with_policy<P2>(self, policy: P2) -> Lot<C, P2> {
        Lot {
            floors: self.floors,
            tickets: self.tickets,
            clock: self.clock,
            policy,
        }
    }

    /// Appends `floors` after the existing ones.
    #[inline]
    pub fn with_floors<I>(mut self, floors: I) -> Self
    where
        I: IntoIterator<Item = Floor>,
    {
        self.floors.extend(floors);
        self
    }

    #[inline]
    pub fn add_floor(&mut self, floor: Floor) -> &mut Self {
        self.floors.push(floor);
        self
    }

    #[inline]
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    #[inline]
    pub fn floor(&self, id: FloorIdentifier) -> Option<&Floor> {
        self.floors.iter().find(|f| f.id() == id)
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    #[inline]
    pub fn ticket(&self, plate: &LicensePlate) -> Option<&Ticket> {
        self.tickets.get(plate)
    }

    #[inline]
    pub fn is_parked(&self, plate: &LicensePlate) -> bool {
        self.tickets.contains_key(plate)
    }

    #[inline]
    pub fn active_tickets(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.values()
    }

    #[inline]
    pub fn parked_count(&self) -> usize {
        self.tickets.len()
    }

    /// The spot currently holding `plate`, if any.
    pub fn spot_of(&self, plate: &LicensePlate) -> Option<&Spot> {
        let loc = self.tickets.get(plate)?.location();
        self.floors.get(loc.floor_index())?.spot(loc.spot_index())
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.floors.iter().map(Floor::len).sum()
    }

    #[inline]
    pub fn free_spot_count(&self) -> usize {
        self.floors.iter().map(Floor::free_count).sum()
    }

    #[inline]
    pub fn free_spot_count_for(&self, class: VehicleClass) -> usize {
        self.floors.iter().map(|f| f.free_count_for(class)).sum()
    }

    /// Where `allocate` would put a vehicle of `class` right now.
    pub fn locate_available(&self, class: VehicleClass) -> Option<SpotLocation> {
        self.floors.iter().enumerate().find_map(|(fi, floor)| {
            let hit = floor.find_available_position(class);
            tracing::trace!("Scanned {} for {}: {:?}", floor.id(), class, hit);
            hit.and_then(|si| {
                floor
                    .spot(si)
                    .map(|spot| SpotLocation::new(fi, si, floor.id(), spot.id()))
            })
        })
    }
}

impl<C: Clock, P: FeePolicy> Lot<C, P> {
    /// Parks `vehicle` in the first compatible free spot, scanning floors and
    /// then spots in insertion order.
    ///
    /// Returns `Ok(false)` when no floor has room; that is a normal outcome and
    /// leaves the lot untouched. A plate that already holds a ticket is
    /// rejected with [`LotError::DuplicateVehicle`].
    #[tracing::instrument(level = "debug", skip(self, vehicle), fields(plate = %vehicle.plate()))]
    pub fn allocate(&mut self, vehicle: Vehicle) -> Result<bool, LotError> {
        if self.tickets.contains_key(vehicle.plate()) {
            tracing::warn!("Rejecting {}: it already holds a ticket", vehicle.plate());
            return Err(DuplicateVehicleError::new(vehicle.plate().clone()).into());
        }

        let Some(loc) = self.locate_available(vehicle.class()) else {
            tracing::debug!("No spot available for {}", vehicle);
            return Ok(false);
        };

        let spot = self
            .floors
            .get_mut(loc.floor_index())
            .and_then(|f| f.spot_mut(loc.spot_index()))
            .ok_or_else(|| LotError::Inconsistent(NotOccupiedError::new(loc.spot()).into()))?;
        if let Err(e) = spot.allocate(vehicle.clone()) {
            tracing::error!("Spot {} rejected {}: {}", loc, vehicle.plate(), e);
            return Err(e.into());
        }

        let issued_at = self.clock.now();
        tracing::debug!("Parked {} at {} ({})", vehicle, loc, issued_at);
        self.tickets
            .insert(vehicle.plate().clone(), Ticket::new(vehicle, loc, issued_at));
        Ok(true)
    }

    /// Retires the ticket for `plate`, frees its spot and prices the stay.
    #[tracing::instrument(level = "debug", skip(self, plate), fields(plate = %plate))]
    pub fn checkout(&mut self, plate: &LicensePlate) -> Result<Receipt, LotError> {
        let Some(loc) = self.tickets.get(plate).map(Ticket::location) else {
            tracing::warn!("No ticket for {}", plate);
            return Err(UnknownTicketError::new(plate.clone()).into());
        };

        let spot = self
            .floors
            .get_mut(loc.floor_index())
            .and_then(|f| f.spot_mut(loc.spot_index()))
            .ok_or_else(|| LotError::Inconsistent(NotOccupiedError::new(loc.spot()).into()))?;
        if let Some(occupant) = spot.occupant()
            && occupant.plate() != plate
        {
            let e = SpotError::from(AlreadyOccupiedError::new(spot.id(), occupant.plate().clone()));
            tracing::error!("Ticket for {} points at {}: {}", plate, loc, e);
            return Err(e.into());
        }
        if let Err(e) = spot.release() {
            tracing::error!("Ticket for {} points at {}: {}", plate, loc, e);
            return Err(e.into());
        }

        let ticket = self
            .tickets
            .remove(plate)
            .ok_or_else(|| UnknownTicketError::new(plate.clone()))?;

        let released_at = self.clock.now();
        let duration = released_at
            .checked_since(ticket.issued_at())
            .unwrap_or_else(TimeDelta::zero)
            .non_negative();
        let fee = self.policy.fee(duration, ticket.vehicle().class());
        tracing::debug!(
            "Released {} from {} after {} for {:.2}",
            plate,
            loc,
            duration,
            fee
        );

        Ok(Receipt::new(ticket, released_at, duration, fee))
    }

    /// Like [`Lot::checkout`], returning only the fee.
    #[inline]
    pub fn release(&mut self, plate: &LicensePlate) -> Result<f64, LotError> {
        self.checkout(plate).map(|r| r.fee())
    }
}
