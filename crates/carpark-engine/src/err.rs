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

use carpark_model::prelude::{LicensePlate, SpotError};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownTicketError {
    plate: LicensePlate,
}

impl UnknownTicketError {
    pub fn new(plate: LicensePlate) -> Self {
        Self { plate }
    }

    pub fn plate(&self) -> &LicensePlate {
        &self.plate
    }
}

impl std::fmt::Display for UnknownTicketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No ticket found for {}", self.plate)
    }
}

impl std::error::Error for UnknownTicketError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DuplicateVehicleError {
    plate: LicensePlate,
}

impl DuplicateVehicleError {
    pub fn new(plate: LicensePlate) -> Self {
        Self { plate }
    }

    pub fn plate(&self) -> &LicensePlate {
        &self.plate
    }
}

impl std::fmt::Display for DuplicateVehicleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} already holds an active ticket", self.plate)
    }
}

impl std::error::Error for DuplicateVehicleError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LotError {
    UnknownTicket(UnknownTicketError),
    DuplicateVehicle(DuplicateVehicleError),
    /// Spot occupancy disagrees with the ticket registry. This is a bug, not a
    /// condition callers are expected to recover from.
    Inconsistent(SpotError),
}

impl std::fmt::Display for LotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LotError::UnknownTicket(e) => write!(f, "{}", e),
            LotError::DuplicateVehicle(e) => write!(f, "{}", e),
            LotError::Inconsistent(e) => write!(f, "internal inconsistency: {}", e),
        }
    }
}

impl std::error::Error for LotError {}

impl From<UnknownTicketError> for LotError {
    fn from(err: UnknownTicketError) -> Self {
        LotError::UnknownTicket(err)
    }
}

impl From<DuplicateVehicleError> for LotError {
    fn from(err: DuplicateVehicleError) -> Self {
        LotError::DuplicateVehicle(err)
    }
}

impl From<SpotError> for LotError {
    fn from(err: SpotError) -> Self {
        LotError::Inconsistent(err)
    }
}

#[derive(Debug)]
pub enum FeeScheduleError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidValue { field: &'static str, value: f64 },
    UnorderedMultipliers,
}

impl From<std::io::Error> for FeeScheduleError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for FeeScheduleError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl std::fmt::Display for FeeScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use FeeScheduleError::*;
        match self {
            Io(e) => write!(f, "I/O error: {e}"),
            Json(e) => write!(f, "malformed fee schedule: {e}"),
            InvalidValue { field, value } => write!(f, "invalid value {value} for {field}"),
            UnorderedMultipliers => write!(
                f,
                "multipliers must not decrease with vehicle size (motorcycle <= car <= truck)"
            ),
        }
    }
}

impl std::error::Error for FeeScheduleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeeScheduleError::Io(e) => Some(e),
            FeeScheduleError::Json(e) => Some(e),
            _ => None,
        }
    }
}
