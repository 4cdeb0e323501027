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

use crate::primitives::{TimeDelta, TimePoint};
use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

/// Source of the current instant, in milliseconds since the Unix epoch.
pub trait Clock {
    fn now(&self) -> TimePoint<i64>;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> TimePoint<i64> {
        (**self).now()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> TimePoint<i64> {
        TimePoint::from_millis(chrono::Utc::now().timestamp_millis())
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying instant, so a test can keep one handle
/// while the lot owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    millis: Arc<AtomicI64>,
}

impl ManualClock {
    #[inline]
    pub fn new(start: TimePoint<i64>) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(start.value())),
        }
    }

    #[inline]
    pub fn set(&self, t: TimePoint<i64>) {
        self.millis.store(t.value(), Ordering::Release);
    }

    #[inline]
    pub fn advance(&self, d: TimeDelta<i64>) {
        self.millis.fetch_add(d.value(), Ordering::AcqRel);
    }

    #[inline]
    pub fn advance_secs(&self, secs: i64) {
        self.advance(TimeDelta::from_secs(secs));
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> TimePoint<i64> {
        TimePoint::from_millis(self.millis.load(Ordering::Acquire))
    }
}
