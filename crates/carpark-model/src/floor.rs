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
    spot::Spot,
    vehicle::VehicleClass,
};

/// An ordered run of spots. Insertion order is scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Floor {
    id: FloorIdentifier,
    spots: Vec<Spot>,
}

impl Floor {
    #[inline]
    pub fn new(id: FloorIdentifier) -> Self {
        Self {
            id,
            spots: Vec::new(),
        }
    }

    #[inline]
    pub fn with_spots<I>(id: FloorIdentifier, spots: I) -> Self
    where
        I: IntoIterator<Item = Spot>,
    {
        Self {
            id,
            spots: spots.into_iter().collect(),
        }
    }

    #[inline]
    pub fn id(&self) -> FloorIdentifier {
        self.id
    }

    /// Appends `spot`. Ids are expected to be unique by construction.
    #[inline]
    pub fn add_spot(&mut self, spot: Spot) -> &mut Self {
        self.spots.push(spot);
        self
    }

    /// First free spot, in insertion order, that can host `class`.
    #[inline]
    pub fn find_available(&self, class: VehicleClass) -> Option<&Spot> {
        self.spots.iter().find(|s| s.is_available_for(class))
    }

    #[inline]
    pub fn find_available_position(&self, class: VehicleClass) -> Option<usize> {
        self.spots.iter().position(|s| s.is_available_for(class))
    }

    #[inline]
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Spot> {
        self.spots.iter()
    }

    #[inline]
    pub fn spot(&self, index: usize) -> Option<&Spot> {
        self.spots.get(index)
    }

    #[inline]
    pub fn spot_mut(&mut self, index: usize) -> Option<&mut Spot> {
        self.spots.get_mut(index)
    }

    #[inline]
    pub fn contains_spot(&self, id: SpotIdentifier) -> bool {
        self.spots.iter().any(|s| s.id() == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    #[inline]
    pub fn free_count(&self) -> usize {
        self.spots.iter().filter(|s| s.is_free()).count()
    }

    #[inline]
    pub fn free_count_for(&self, class: VehicleClass) -> usize {
        self.spots
            .iter()
            .filter(|s| s.is_available_for(class))
            .count()
    }
}
