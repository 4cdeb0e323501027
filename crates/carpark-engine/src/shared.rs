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
    err::LotError,
    fee::{FeePolicy, FeeSchedule},
    lot::Lot,
    ticket::{Receipt, Ticket},
};
use carpark_core::prelude::{Clock, SystemClock};
use carpark_model::prelude::{LicensePlate, Vehicle, VehicleClass};
use parking_lot::Mutex;
use std::sync::Arc;

/// A [`Lot`] shared between threads.
///
/// One mutex guards the whole lot, so the scan-then-mark step of `allocate`
/// and every `release` run as a single critical section. Clones share the
/// same lot.
#[derive(Debug)]
pub struct SharedLot<C = SystemClock, P = FeeSchedule> {
    inner: Arc<Mutex<Lot<C, P>>>,
}

impl<C, P> Clone for SharedLot<C, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C, P> From<Lot<C, P>> for SharedLot<C, P> {
    fn from(lot: Lot<C, P>) -> Self {
        Self::new(lot)
    }
}

impl<C, P> SharedLot<C, P> {
    #[inline]
    pub fn new(lot: Lot<C, P>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(lot)),
        }
    }

    /// Runs `f` with the lot locked.
    #[inline]
    pub fn with_lot<R>(&self, f: impl FnOnce(&Lot<C, P>) -> R) -> R {
        f(&self.inner.lock())
    }

    #[inline]
    pub fn ticket(&self, plate: &LicensePlate) -> Option<Ticket> {
        self.inner.lock().ticket(plate).cloned()
    }

    #[inline]
    pub fn is_parked(&self, plate: &LicensePlate) -> bool {
        self.inner.lock().is_parked(plate)
    }

    #[inline]
    pub fn parked_count(&self) -> usize {
        self.inner.lock().parked_count()
    }

    #[inline]
    pub fn free_spot_count(&self) -> usize {
        self.inner.lock().free_spot_count()
    }

    #[inline]
    pub fn free_spot_count_for(&self, class: VehicleClass) -> usize {
        self.inner.lock().free_spot_count_for(class)
    }

    /// Takes the lot back if this is the last handle.
    pub fn try_into_inner(self) -> Result<Lot<C, P>, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<C: Clock, P: FeePolicy> SharedLot<C, P> {
    #[inline]
    pub fn allocate(&self, vehicle: Vehicle) -> Result<bool, LotError> {
        self.inner.lock().allocate(vehicle)
    }

    #[inline]
    pub fn checkout(&self, plate: &LicensePlate) -> Result<Receipt, LotError> {
        self.inner.lock().checkout(plate)
    }

    #[inline]
    pub fn release(&self, plate: &LicensePlate) -> Result<f64, LotError> {
        self.inner.lock().release(plate)
    }
}
