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
    common::{FloorIdentifier, SpotIdentifier},
    err::{DuplicateFloorError, DuplicateSpotError, LayoutError},
    floor::Floor,
    spot::{Spot, SpotClass},
};
use std::collections::HashSet;

/// Assembles the ordered floors of a lot and checks id uniqueness on `build`.
#[derive(Debug, Clone, Default)]
pub struct LayoutBuilder {
    floors: Vec<Floor>,
}

impl LayoutBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(floors: usize) -> Self {
        Self {
            floors: Vec::with_capacity(floors),
        }
    }

    #[inline]
    pub fn with_floors<I>(mut self, floors: I) -> Self
    where
        I: IntoIterator<Item = Floor>,
    {
        self.floors.clear();
        self.floors.extend(floors);
        self
    }

    #[inline]
    pub fn add_floor(&mut self, floor: Floor) -> &mut Self {
        self.floors.push(floor);
        self
    }

    /// Adds a floor whose spots are numbered `1..=classes.len()` in the given order.
    pub fn add_floor_of<I>(&mut self, id: FloorIdentifier, classes: I) -> &mut Self
    where
        I: IntoIterator<Item = SpotClass>,
    {
        let spots = classes
            .into_iter()
            .enumerate()
            .map(|(i, class)| Spot::new(SpotIdentifier::new(i + 1), class));
        self.add_floor(Floor::with_spots(id, spots))
    }

    #[inline]
    pub fn extend_floors<I>(&mut self, floors: I) -> &mut Self
    where
        I: IntoIterator<Item = Floor>,
    {
        self.floors.extend(floors);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.floors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn build(self) -> Result<Vec<Floor>, LayoutError> {
        let mut floor_ids = HashSet::with_capacity(self.floors.len());
        for floor in &self.floors {
            if !floor_ids.insert(floor.id()) {
                return Err(DuplicateFloorError::new(floor.id()).into());
            }
            let mut spot_ids = HashSet::with_capacity(floor.len());
            for spot in floor.iter() {
                if !spot_ids.insert(spot.id()) {
                    return Err(DuplicateSpotError::new(floor.id(), spot.id()).into());
                }
            }
        }
        Ok(self.floors)
    }
}
