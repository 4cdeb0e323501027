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

use crate::{common::LicensePlate, err::UnknownClassError, spot::SpotClass};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Size class of a vehicle, ordered `Small < Medium < Large`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    #[serde(alias = "motorcycle")]
    Small,
    #[serde(alias = "car")]
    Medium,
    #[serde(alias = "truck")]
    Large,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] = [Self::Small, Self::Medium, Self::Large];

    #[inline]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 3,
        }
    }

    #[inline]
    pub const fn fits_in(self, spot: SpotClass) -> bool {
        spot.rank() >= self.rank()
    }
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        };
        write!(f, "{name}")
    }
}

impl FromStr for VehicleClass {
    type Err = UnknownClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" | "motorcycle" | "s" => Ok(Self::Small),
            "medium" | "car" | "m" => Ok(Self::Medium),
            "large" | "truck" | "l" => Ok(Self::Large),
            _ => Err(UnknownClassError::new(s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vehicle {
    plate: LicensePlate,
    class: VehicleClass,
}

impl Vehicle {
    #[inline]
    pub fn new(plate: impl Into<LicensePlate>, class: VehicleClass) -> Self {
        Self {
            plate: plate.into(),
            class,
        }
    }

    #[inline]
    pub fn plate(&self) -> &LicensePlate {
        &self.plate
    }

    #[inline]
    pub fn class(&self) -> VehicleClass {
        self.class
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.plate, self.class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_are_ordered_by_size() {
        assert!(VehicleClass::Small < VehicleClass::Medium);
        assert!(VehicleClass::Medium < VehicleClass::Large);
        let ranks: Vec<u8> = VehicleClass::ALL.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_fits_in_follows_rank() {
        assert!(VehicleClass::Small.fits_in(SpotClass::Compact));
        assert!(VehicleClass::Small.fits_in(SpotClass::Large));
        assert!(VehicleClass::Medium.fits_in(SpotClass::Regular));
        assert!(!VehicleClass::Medium.fits_in(SpotClass::Compact));
        assert!(!VehicleClass::Large.fits_in(SpotClass::Regular));
        assert!(VehicleClass::Large.fits_in(SpotClass::Large));
    }

    #[test]
    fn test_parse_accepts_rate_table_names() {
        assert_eq!("motorcycle".parse::<VehicleClass>(), Ok(VehicleClass::Small));
        assert_eq!("CAR".parse::<VehicleClass>(), Ok(VehicleClass::Medium));
        assert_eq!("large".parse::<VehicleClass>(), Ok(VehicleClass::Large));
        assert!("bus".parse::<VehicleClass>().is_err());
    }

    #[test]
    fn test_serde_lowercase_with_aliases() {
        let c: VehicleClass = serde_json::from_str("\"truck\"").unwrap();
        assert_eq!(c, VehicleClass::Large);
        assert_eq!(
            serde_json::to_string(&VehicleClass::Medium).unwrap(),
            "\"medium\""
        );
    }

    #[test]
    fn test_vehicle_accessors_and_display() {
        let v = Vehicle::new("ABC123", VehicleClass::Medium);
        assert_eq!(v.plate().as_str(), "ABC123");
        assert_eq!(v.class(), VehicleClass::Medium);
        assert_eq!(v.to_string(), "Plate(ABC123) [medium]");
    }
}
