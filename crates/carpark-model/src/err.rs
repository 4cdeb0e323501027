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

use crate::common::{FloorIdentifier, LicensePlate, SpotIdentifier};
use std::num::ParseIntError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlreadyOccupiedError {
    spot: SpotIdentifier,
    occupant: LicensePlate,
}

impl AlreadyOccupiedError {
    pub fn new(spot: SpotIdentifier, occupant: LicensePlate) -> Self {
        Self { spot, occupant }
    }

    pub fn spot(&self) -> SpotIdentifier {
        self.spot
    }

    pub fn occupant(&self) -> &LicensePlate {
        &self.occupant
    }
}

impl std::fmt::Display for AlreadyOccupiedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Spot {} is already occupied by {}", self.spot, self.occupant)
    }
}

impl std::error::Error for AlreadyOccupiedError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotOccupiedError {
    spot: SpotIdentifier,
}

impl NotOccupiedError {
    pub fn new(spot: SpotIdentifier) -> Self {
        Self { spot }
    }

    pub fn spot(&self) -> SpotIdentifier {
        self.spot
    }
}

impl std::fmt::Display for NotOccupiedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Spot {} is not occupied", self.spot)
    }
}

impl std::error::Error for NotOccupiedError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SpotError {
    AlreadyOccupied(AlreadyOccupiedError),
    NotOccupied(NotOccupiedError),
}

impl std::fmt::Display for SpotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpotError::AlreadyOccupied(e) => write!(f, "{}", e),
            SpotError::NotOccupied(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SpotError {}

impl From<AlreadyOccupiedError> for SpotError {
    fn from(err: AlreadyOccupiedError) -> Self {
        SpotError::AlreadyOccupied(err)
    }
}

impl From<NotOccupiedError> for SpotError {
    fn from(err: NotOccupiedError) -> Self {
        SpotError::NotOccupied(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownClassError {
    value: String,
}

impl UnknownClassError {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for UnknownClassError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown class name '{}'", self.value)
    }
}

impl std::error::Error for UnknownClassError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DuplicateFloorError {
    floor: FloorIdentifier,
}

impl DuplicateFloorError {
    pub fn new(floor: FloorIdentifier) -> Self {
        Self { floor }
    }

    pub fn floor(&self) -> FloorIdentifier {
        self.floor
    }
}

impl std::fmt::Display for DuplicateFloorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Floor {} was declared more than once", self.floor)
    }
}

impl std::error::Error for DuplicateFloorError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DuplicateSpotError {
    floor: FloorIdentifier,
    spot: SpotIdentifier,
}

impl DuplicateSpotError {
    pub fn new(floor: FloorIdentifier, spot: SpotIdentifier) -> Self {
        Self { floor, spot }
    }

    pub fn floor(&self) -> FloorIdentifier {
        self.floor
    }

    pub fn spot(&self) -> SpotIdentifier {
        self.spot
    }
}

impl std::fmt::Display for DuplicateSpotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Spot {} appears more than once on floor {}",
            self.spot, self.floor
        )
    }
}

impl std::error::Error for DuplicateSpotError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LayoutError {
    DuplicateFloor(DuplicateFloorError),
    DuplicateSpot(DuplicateSpotError),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::DuplicateFloor(e) => write!(f, "{}", e),
            LayoutError::DuplicateSpot(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LayoutError {}

impl From<DuplicateFloorError> for LayoutError {
    fn from(err: DuplicateFloorError) -> Self {
        LayoutError::DuplicateFloor(err)
    }
}

impl From<DuplicateSpotError> for LayoutError {
    fn from(err: DuplicateSpotError) -> Self {
        LayoutError::DuplicateSpot(err)
    }
}

#[derive(Debug)]
pub enum LayoutLoaderError {
    Io(std::io::Error),
    ParseInt(ParseIntError),
    UnexpectedEof,
    UnknownSpotClass(UnknownClassError),
    Layout(LayoutError),
}

impl From<std::io::Error> for LayoutLoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseIntError> for LayoutLoaderError {
    fn from(e: ParseIntError) -> Self {
        Self::ParseInt(e)
    }
}

impl From<UnknownClassError> for LayoutLoaderError {
    fn from(e: UnknownClassError) -> Self {
        Self::UnknownSpotClass(e)
    }
}

impl From<LayoutError> for LayoutLoaderError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

impl std::fmt::Display for LayoutLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use LayoutLoaderError::*;
        match self {
            Io(e) => write!(f, "I/O error: {e}"),
            ParseInt(e) => write!(f, "parse-int error: {e}"),
            UnexpectedEof => write!(f, "unexpected end of file while parsing layout"),
            UnknownSpotClass(e) => write!(f, "spot class error: {e}"),
            Layout(e) => write!(f, "layout error: {e}"),
        }
    }
}

impl std::error::Error for LayoutLoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutLoaderError::Io(e) => Some(e),
            LayoutLoaderError::ParseInt(e) => Some(e),
            LayoutLoaderError::UnknownSpotClass(e) => Some(e),
            LayoutLoaderError::Layout(e) => Some(e),
            LayoutLoaderError::UnexpectedEof => None,
        }
    }
}
