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
    common::SpotIdentifier,
    err::{AlreadyOccupiedError, NotOccupiedError, SpotError, UnknownClassError},
    vehicle::{Vehicle, VehicleClass},
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Capacity class of a spot, ordered `Compact < Regular < Large`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SpotClass {
    Compact,
    Regular,
    Large,
}

impl SpotClass {
    pub const ALL: [SpotClass; 3] = [Self::Compact, Self::Regular, Self::Large];

    #[inline]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Compact => 1,
            Self::Regular => 2,
            Self::Large => 3,
        }
    }

    /// A spot hosts every vehicle whose rank does not exceed its own.
    #[inline]
    pub const fn can_host(self, vehicle: VehicleClass) -> bool {
        vehicle.fits_in(self)
    }
}

impl std::fmt::Display for SpotClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Compact => "compact",
            Self::Regular => "regular",
            Self::Large => "large",
        };
        write!(f, "{name}")
    }
}

impl FromStr for SpotClass {
    type Err = UnknownClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" | "c" => Ok(Self::Compact),
            "regular" | "r" => Ok(Self::Regular),
            "large" | "l" => Ok(Self::Large),
            _ => Err(UnknownClassError::new(s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spot {
    id: SpotIdentifier,
    class: SpotClass,
    occupant: Option<Vehicle>,
}

impl Spot {
    #[inline]
    pub fn new(id: SpotIdentifier, class: SpotClass) -> Self {
        Self {
            id,
            class,
            occupant: None,
        }
    }

    #[inline]
    pub fn id(&self) -> SpotIdentifier {
        self.id
    }

    #[inline]
    pub fn class(&self) -> SpotClass {
        self.class
    }

    #[inline]
    pub fn occupant(&self) -> Option<&Vehicle> {
        self.occupant.as_ref()
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        !self.is_free()
    }

    #[inline]
    pub fn can_host(&self, class: VehicleClass) -> bool {
        self.class.can_host(class)
    }

    #[inline]
    pub fn is_available_for(&self, class: VehicleClass) -> bool {
        self.is_free() && self.can_host(class)
    }

    pub fn allocate(&mut self, vehicle: Vehicle) -> Result<(), SpotError> {
        if let Some(current) = &self.occupant {
            return Err(AlreadyOccupiedError::new(self.id, current.plate().clone()).into());
        }
        self.occupant = Some(vehicle);
        Ok(())
    }

    pub fn release(&mut self) -> Result<Vehicle, SpotError> {
        self.occupant
            .take()
            .ok_or_else(|| NotOccupiedError::new(self.id).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn sid(n: usize) -> SpotIdentifier {
        SpotIdentifier::new(n)
    }

    fn car(plate: &str) -> Vehicle {
        Vehicle::new(plate, VehicleClass::Medium)
    }

    #[test]
    fn test_new_spot_is_free() {
        let s = Spot::new(sid(1), SpotClass::Regular);
        assert!(s.is_free());
        assert!(!s.is_occupied());
        assert!(s.occupant().is_none());
        assert_eq!(s.id(), sid(1));
        assert_eq!(s.class(), SpotClass::Regular);
    }

    #[test]
    fn test_allocate_then_release_returns_occupant() {
        let mut s = Spot::new(sid(1), SpotClass::Regular);
        s.allocate(car("A")).unwrap();
        assert!(s.is_occupied());
        assert_eq!(s.occupant().map(|v| v.plate().as_str()), Some("A"));

        let v = s.release().unwrap();
        assert_eq!(v, car("A"));
        assert!(s.is_free());
    }

    #[test]
    fn test_allocate_twice_fails_and_keeps_first() {
        let mut s = Spot::new(sid(4), SpotClass::Large);
        s.allocate(car("A")).unwrap();
        let err = s.allocate(car("B")).unwrap_err();
        match err {
            SpotError::AlreadyOccupied(e) => {
                assert_eq!(e.spot(), sid(4));
                assert_eq!(e.occupant().as_str(), "A");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(s.occupant(), Some(&car("A")));
    }

    #[test]
    fn test_release_empty_fails() {
        let mut s = Spot::new(sid(2), SpotClass::Compact);
        let err = s.release().unwrap_err();
        assert_eq!(err, SpotError::NotOccupied(NotOccupiedError::new(sid(2))));
    }

    #[test]
    fn test_compatibility_matrix() {
        for spot in SpotClass::ALL {
            for vehicle in VehicleClass::ALL {
                assert_eq!(spot.can_host(vehicle), spot.rank() >= vehicle.rank());
            }
        }
        assert!(!SpotClass::Compact.can_host(VehicleClass::Large));
        assert!(!SpotClass::Regular.can_host(VehicleClass::Large));
    }

    #[test]
    fn test_available_for_requires_free_and_fit() {
        let mut s = Spot::new(sid(1), SpotClass::Regular);
        assert!(s.is_available_for(VehicleClass::Small));
        assert!(!s.is_available_for(VehicleClass::Large));
        s.allocate(car("A")).unwrap();
        assert!(!s.is_available_for(VehicleClass::Small));
    }

    #[test]
    fn test_parse_spot_class() {
        assert_eq!("C".parse::<SpotClass>(), Ok(SpotClass::Compact));
        assert_eq!("Regular".parse::<SpotClass>(), Ok(SpotClass::Regular));
        assert!("huge".parse::<SpotClass>().is_err());
    }
}
